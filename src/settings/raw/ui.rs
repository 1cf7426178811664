use hearth_listings::PropertyId;
use log::LevelFilter;
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

/// `[ui]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) start_property: Option<PropertyId>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(id) = cli.property {
			self.start_property = Some(id);
		}
	}
}

/// `[log]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
}

impl LogSection {
	pub(super) const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level {
			self.level = Some(level.as_str().to_string());
		}
	}

	pub(super) fn resolve(&self, sources: &ConfigSources) -> Result<LevelFilter, ConfigError> {
		let Some(level) = self.level.as_deref() else {
			return Ok(Self::DEFAULT_LEVEL);
		};
		level.trim().parse().map_err(|_| {
			ConfigError::invalid(
				"log.level",
				level,
				sources.source_for("log.level"),
				"expected one of off, error, warn, info, debug, trace",
			)
		})
	}
}
