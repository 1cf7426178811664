use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::path::Path;

	use clap::Parser;
	use log::LevelFilter;

	use super::*;

	fn write_config(dir: &Path, body: &str) -> String {
		let path = dir.join("hearth.toml");
		fs::write(&path, body).expect("write config");
		path.display().to_string()
	}

	#[test]
	fn config_file_values_are_resolved() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = write_config(
			dir.path(),
			"[ui]\ninitial_query = \"beach\"\nstart_property = 2\n\n[panel]\ncollapsed_ratio = 0.3\nswipe_threshold = 4.0\n\n[log]\nlevel = \"debug\"\n",
		);
		let cli = CliArgs::parse_from(["hearth", "--no-config", "--config", &path]);

		let resolved = load(&cli).expect("load");
		assert_eq!(resolved.initial_query, "beach");
		assert_eq!(resolved.start_property, Some(2));
		assert!((resolved.panel.collapsed_ratio - 0.3).abs() < 1e-6);
		assert!((resolved.panel.swipe_threshold - 4.0).abs() < 1e-6);
		assert!((resolved.panel.expanded_ratio - 0.55).abs() < 1e-6);
		assert_eq!(resolved.log_level, LevelFilter::Debug);
	}

	#[test]
	fn cli_flags_override_config_files() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = write_config(
			dir.path(),
			"[ui]\ninitial_query = \"beach\"\n\n[log]\nlevel = \"debug\"\n",
		);
		let cli = CliArgs::parse_from([
			"hearth",
			"--no-config",
			"--config",
			&path,
			"--query",
			"loft",
			"--log-level",
			"warn",
		]);

		let resolved = load(&cli).expect("load");
		assert_eq!(resolved.initial_query, "loft");
		assert_eq!(resolved.log_level, LevelFilter::Warn);
	}

	#[test]
	fn later_config_files_win() {
		let first = tempfile::tempdir().expect("tempdir");
		let second = tempfile::tempdir().expect("tempdir");
		let a = write_config(first.path(), "[slider]\nhandle_diameter = 2.0\n");
		let b = write_config(second.path(), "[slider]\nhandle_diameter = 3.0\n");
		let cli = CliArgs::parse_from(["hearth", "-n", "-c", &a, "-c", &b]);

		let resolved = load(&cli).expect("load");
		assert!((resolved.slider.handle_diameter - 3.0).abs() < 1e-6);
	}

	#[test]
	fn invalid_file_value_names_its_key() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = write_config(
			dir.path(),
			"[panel]\ncollapsed_ratio = 0.8\nexpanded_ratio = 0.5\n",
		);
		let cli = CliArgs::parse_from(["hearth", "--no-config", "--config", &path]);

		let message = format!("{:#}", load(&cli).expect_err("collapsed above expanded"));
		assert!(message.contains("panel.collapsed_ratio"));
		assert!(message.contains("configuration key"));
	}

	#[test]
	fn missing_explicit_config_file_fails() {
		let dir = tempfile::tempdir().expect("tempdir");
		let missing = dir.path().join("absent.toml").display().to_string();
		let cli = CliArgs::parse_from(["hearth", "--no-config", "--config", &missing]);

		assert!(load(&cli).is_err());
	}

	#[test]
	fn unknown_theme_is_rejected() {
		let cli = CliArgs::parse_from(["hearth", "--no-config", "--theme", "no-such-theme"]);

		let message = format!("{:#}", load(&cli).expect_err("unknown theme"));
		assert!(message.contains("ui.theme"));
		assert!(message.contains("--theme"));
	}
}
