//! Where `hearth` keeps its files on disk.
//!
//! `HEARTH_CONFIG_DIR` and `HEARTH_DATA_DIR` win when set and non-empty.
//! Otherwise the platform layout from `directories` is used, e.g.
//! `~/.config/hearth` on Linux.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

pub const CONFIG_DIR_ENV: &str = "HEARTH_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "HEARTH_DATA_DIR";

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	resolve(CONFIG_DIR_ENV, ProjectDirs::config_local_dir)
}

/// Directory for application data, reported by `--version`.
pub fn get_data_dir() -> Result<PathBuf> {
	resolve(DATA_DIR_ENV, ProjectDirs::data_local_dir)
}

fn resolve(override_var: &str, platform: fn(&ProjectDirs) -> &Path) -> Result<PathBuf> {
	if let Some(dir) = env_override(override_var) {
		return Ok(dir);
	}
	let dirs = ProjectDirs::from("io", "hearth", "hearth")
		.ok_or_else(|| anyhow!("no home directory; set {override_var}"))?;
	Ok(platform(&dirs).to_path_buf())
}

fn env_override(name: &str) -> Option<PathBuf> {
	env::var_os(name)
		.filter(|value| !value.is_empty())
		.map(PathBuf::from)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_override_is_none() {
		assert_eq!(env_override("HEARTH_TEST_UNSET_DIR_OVERRIDE"), None);
	}
}
