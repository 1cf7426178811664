use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use hearth::app_dirs;

use crate::cli::CliArgs;

pub(super) const ENV_PREFIX: &str = "HEARTH";

/// Stack every settings layer below the CLI flags, lowest priority first:
/// optional default files, then `--config` files (which must exist), then
/// `HEARTH__SECTION__KEY` variables.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	let optional = defaults
		.into_iter()
		.map(|path| File::from(path).required(false));
	let explicit = cli
		.config
		.iter()
		.map(|path| File::from(path.clone()).required(true));

	optional
		.chain(explicit)
		.fold(Config::builder(), |builder, file| builder.add_source(file))
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.prefix_separator("__")
				.separator("__")
				.try_parsing(true),
		)
		.build()
		.context("failed to read configuration sources")
}

/// `config.toml` in the config dir, then `.hearth.toml` and `hearth.toml` in
/// the working directory. Later files override earlier ones.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let user = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	let local = env::current_dir()
		.ok()
		.into_iter()
		.flat_map(|dir| [dir.join(".hearth.toml"), dir.join("hearth.toml")]);

	user.into_iter().chain(local).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".hearth.toml")));
		assert!(files.iter().any(|path| path.ends_with("hearth.toml")));
	}

	#[test]
	fn working_directory_files_come_last() {
		let files = default_config_files();
		let names: Vec<_> = files
			.iter()
			.rev()
			.take(2)
			.filter_map(|path| path.file_name())
			.collect();
		assert_eq!(names, ["hearth.toml", ".hearth.toml"]);
	}
}
