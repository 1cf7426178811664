use anyhow::{Context, Result, bail};
use include_dir::Dir;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
struct ThemeDocument {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
struct ThemeStyles {
	header: StyleEntry,
	row_highlight: StyleEntry,
	prompt: StyleEntry,
	empty: StyleEntry,
	highlight: StyleEntry,
	accent: StyleEntry,
	#[serde(default)]
	muted: StyleEntry,
}

impl ThemeStyles {
	fn into_theme(self, context: &str) -> Result<Theme> {
		let style = |entry: &StyleEntry, field: &str| entry.to_style(&format!("{context}.{field}"));
		Ok(Theme {
			header: style(&self.header, "header")?,
			row_highlight: style(&self.row_highlight, "row_highlight")?,
			prompt: style(&self.prompt, "prompt")?,
			empty: style(&self.empty, "empty")?,
			highlight: style(&self.highlight, "highlight")?,
			accent: style(&self.accent, "accent")?,
			muted: style(&self.muted, "muted")?,
		})
	}
}

#[derive(Debug, Default, Deserialize)]
struct StyleEntry {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleEntry {
	fn to_style(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg)
				.with_context(|| format!("{context}: invalid foreground colour `{fg}`"))?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg)
				.with_context(|| format!("{context}: invalid background colour `{bg}`"))?);
		}
		for modifier in &self.modifiers {
			style = style.add_modifier(
				parse_modifier(modifier)
					.with_context(|| format!("{context}: invalid modifier `{modifier}`"))?,
			);
		}
		Ok(style)
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations = Vec::new();
	let mut default: Option<(Theme, String)> = None;
	for file in files {
		let label = file.path().display().to_string();
		let contents = file
			.contents_utf8()
			.with_context(|| format!("{label} is not valid UTF-8"))?;
		let (registration, is_default) = parse_theme(&label, contents)?;

		if is_default {
			if let Some((_, existing)) = &default {
				bail!(
					"multiple built-in themes are marked as default (`{existing}` and `{}`)",
					registration.name
				);
			}
			default = Some((registration.theme, registration.name.clone()));
		}
		registrations.push(registration);
	}

	let Some(default_theme) = default
		.map(|(theme, _)| theme)
		.or_else(|| registrations.first().map(|registration| registration.theme))
	else {
		bail!("no built-in theme definitions were found");
	};

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

fn parse_theme(label: &str, contents: &str) -> Result<(ThemeRegistration, bool)> {
	let document: ThemeDocument = toml::from_str(contents)
		.with_context(|| format!("failed to parse built-in theme definition in {label}"))?;
	let theme = document.styles.into_theme(&format!("{label}.styles"))?;
	let registration = document
		.aliases
		.iter()
		.map(|alias| alias.trim())
		.filter(|alias| !alias.is_empty())
		.fold(ThemeRegistration::new(document.name, theme), |registration, alias| {
			registration.alias(alias)
		});
	Ok((registration, document.default))
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex(hex);
	}
	if let Some(body) = value.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
		let parts: Vec<_> = body.split(',').map(str::trim).collect();
		let [r, g, b] = parts.as_slice() else {
			bail!("rgb() takes three components, found {}", parts.len());
		};
		return Ok(Color::Rgb(r.parse()?, g.parse()?, b.parse()?));
	}
	if let Some(body) = value.strip_prefix("ansi(").and_then(|s| s.strip_suffix(')')) {
		let index = body
			.trim()
			.parse()
			.with_context(|| format!("invalid ANSI colour index `{body}`"))?;
		return Ok(Color::Indexed(index));
	}

	match normalise_key(value).as_str() {
		"reset" | "default" => Ok(Color::Reset),
		"black" => Ok(Color::Black),
		"red" => Ok(Color::Red),
		"green" => Ok(Color::Green),
		"yellow" => Ok(Color::Yellow),
		"blue" => Ok(Color::Blue),
		"magenta" => Ok(Color::Magenta),
		"cyan" => Ok(Color::Cyan),
		"gray" | "grey" => Ok(Color::Gray),
		"dark_gray" | "dark_grey" => Ok(Color::DarkGray),
		"light_red" => Ok(Color::LightRed),
		"light_green" => Ok(Color::LightGreen),
		"light_yellow" => Ok(Color::LightYellow),
		"light_blue" => Ok(Color::LightBlue),
		"light_magenta" => Ok(Color::LightMagenta),
		"light_cyan" => Ok(Color::LightCyan),
		"white" => Ok(Color::White),
		other => bail!("unknown colour `{other}`"),
	}
}

fn parse_hex(hex: &str) -> Result<Color> {
	let digits: String = match hex.len() {
		3 => hex.chars().flat_map(|ch| [ch, ch]).collect(),
		6 => hex.to_string(),
		_ => bail!("hex colours must be 3 or 6 characters long"),
	};
	let channel = |range: std::ops::Range<usize>| {
		digits
			.get(range)
			.and_then(|pair| u8::from_str_radix(pair, 16).ok())
			.with_context(|| format!("invalid hex colour `#{hex}`"))
	};
	Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	match normalise_key(input).as_str() {
		"bold" => Ok(Modifier::BOLD),
		"dim" => Ok(Modifier::DIM),
		"italic" => Ok(Modifier::ITALIC),
		"underline" | "underlined" => Ok(Modifier::UNDERLINED),
		"reversed" | "reverse" => Ok(Modifier::REVERSED),
		"crossed_out" | "strikethrough" => Ok(Modifier::CROSSED_OUT),
		other => bail!("unknown modifier `{other}`"),
	}
}

fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.replace(['-', ' '], "_")
}
