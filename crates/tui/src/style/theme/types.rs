use ratatui::style::{Color, Style};

/// A theme containing styles for various UI elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for headers, borders and section titles.
	pub header: Style,
	/// Style for the selected feed row.
	pub row_highlight: Style,
	/// Style for input text.
	pub prompt: Style,
	/// Style for placeholders and empty states.
	pub empty: Style,
	/// Style for fuzzy match highlights.
	pub highlight: Style,
	/// Style for selected chips, primary buttons and slider handles.
	pub accent: Style,
	/// Style for secondary text.
	pub muted: Style,
}

impl Theme {
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Unselected chip: accent colour on the default background.
	#[must_use]
	pub fn chip_style(&self) -> Style {
		Style::new().fg(self.accent.bg.unwrap_or(Color::Reset))
	}

	/// Filled part of the slider track.
	#[must_use]
	pub fn track_fill_style(&self) -> Style {
		Style::new().fg(self.accent.bg.unwrap_or(Color::Reset))
	}
}

/// A named theme plus the alternative names it answers to.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
