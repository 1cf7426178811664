use clap::{CommandFactory, FromArgMatches, Parser};

use super::options::LogLevelArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	let command = CliArgs::command();
	command.clone().debug_assert();
	assert!(command.get_about().is_some());
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["hearth"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(!parsed.list);
	assert_eq!(parsed.property, None);
}

#[test]
fn config_flag_repeats() {
	let parsed = CliArgs::parse_from(["hearth", "-c", "a.toml", "--config", "b.toml"]);
	assert_eq!(parsed.config.len(), 2);
	assert!(parsed.config[1].ends_with("b.toml"));
}

#[test]
fn listing_flags_parse() {
	let parsed = CliArgs::parse_from([
		"hearth",
		"--list",
		"-o",
		"json",
		"-q",
		"beach",
		"-p",
		"3",
		"--log-level",
		"debug",
	]);
	assert!(parsed.list);
	assert_eq!(parsed.output, OutputFormat::Json);
	assert_eq!(parsed.initial_query.as_deref(), Some("beach"));
	assert_eq!(parsed.property, Some(3));
	assert_eq!(parsed.log_level.map(LogLevelArg::as_str), Some("debug"));
}

#[test]
fn unknown_log_level_is_rejected() {
	assert!(CliArgs::try_parse_from(["hearth", "--log-level", "loud"]).is_err());
}
