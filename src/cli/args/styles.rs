use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use hearth::app_dirs;

/// `--version` output: the crate version followed by the resolved config
/// and data directories, or why they could not be found.
pub(super) fn long_version() -> &'static str {
	let describe = |dir: anyhow::Result<std::path::PathBuf>| match dir {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let banner = format!(
		"hearth {}\nconfig directory: {}\ndata directory: {}\n",
		env!("CARGO_PKG_VERSION"),
		describe(app_dirs::get_config_dir()),
		describe(app_dirs::get_data_dir()),
	);

	// clap wants a 'static str; built once per process.
	Box::leak(banner.into_boxed_str())
}

/// Help colours: warm headings, green flags, cyan placeholders.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Green.on_default())
		.placeholder(AnsiColor::Cyan.on_default())
}
