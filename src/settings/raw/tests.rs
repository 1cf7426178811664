use clap::Parser;
use log::LevelFilter;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"hearth",
		"--query",
		"loft",
		"--theme",
		"dark",
		"--property",
		"5",
		"--log-level",
		"trace",
	]);

	let mut config = RawConfig::default();
	config.ui.initial_query = Some("from file".into());
	config.log.level = Some("warn".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.ui.initial_query.as_deref(), Some("loft"));
	assert_eq!(config.ui.theme.as_deref(), Some("dark"));
	assert_eq!(config.ui.start_property, Some(5));
	assert_eq!(config.log.level.as_deref(), Some("trace"));
}

#[test]
fn absent_overrides_keep_file_values() {
	let cli = CliArgs::parse_from(["hearth"]);

	let mut config = RawConfig::default();
	config.ui.initial_query = Some("villa".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.ui.initial_query.as_deref(), Some("villa"));
	assert_eq!(config.ui.theme, None);
}

#[test]
fn empty_config_resolves_to_defaults() {
	let cli = CliArgs::parse_from(["hearth"]);
	let resolved = RawConfig::default().resolve(&cli).expect("defaults are valid");

	assert_eq!(resolved.initial_query, "");
	assert_eq!(resolved.start_property, None);
	assert_eq!(resolved.log_level, LevelFilter::Info);
	assert_eq!(resolved.panel, hearth_tui::PanelConfig::default());
	assert_eq!(resolved.slider, hearth_tui::SliderConfig::default());
}

#[test]
fn bad_log_level_reports_config_key() {
	let cli = CliArgs::parse_from(["hearth"]);
	let mut config = RawConfig::default();
	config.log.level = Some("chatty".into());

	let message = config.resolve(&cli).expect_err("invalid level").to_string();
	assert!(message.contains("log.level"));
	assert!(message.contains("got chatty"));
}

#[test]
fn log_level_is_case_insensitive() {
	let cli = CliArgs::parse_from(["hearth"]);
	let mut config = RawConfig::default();
	config.log.level = Some("DEBUG".into());

	let resolved = config.resolve(&cli).expect("valid level");
	assert_eq!(resolved.log_level, LevelFilter::Debug);
}
