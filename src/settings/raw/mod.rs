use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod panel;
mod ui;

use panel::{PanelSection, SliderSection};
use ui::{LogSection, UiSection};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	slider: SliderSection,
	panel: PanelSection,
	log: LogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.ui.apply_cli_overrides(cli);
		self.log.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = self.detect_sources(cli);

		let log_level = self.log.resolve(&sources).map_err(Error::new)?;
		let config = ResolvedConfig {
			theme: self.ui.theme,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			start_property: self.ui.start_property,
			slider: self.slider.resolve(),
			panel: self.panel.resolve(),
			log_level,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}

	fn detect_sources(&self, cli: &CliArgs) -> ConfigSources {
		let mut sources = ConfigSources::default();
		let panel = &self.panel;

		sources.record(
			"ui.theme",
			detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"HEARTH__UI__THEME",
				Some("--theme"),
				"ui.theme",
			),
		);
		sources.record(
			"log.level",
			detect_source(
				cli.log_level.is_some(),
				self.log.level.is_some(),
				"HEARTH__LOG__LEVEL",
				Some("--log-level"),
				"log.level",
			),
		);
		sources.record(
			"slider.handle_diameter",
			detect_source(
				false,
				self.slider.handle_diameter.is_some(),
				"HEARTH__SLIDER__HANDLE_DIAMETER",
				None,
				"slider.handle_diameter",
			),
		);

		let panel_keys = [
			(
				panel.swipe_threshold.is_some(),
				"HEARTH__PANEL__SWIPE_THRESHOLD",
				"panel.swipe_threshold",
			),
			(
				panel.collapsed_ratio.is_some(),
				"HEARTH__PANEL__COLLAPSED_RATIO",
				"panel.collapsed_ratio",
			),
			(
				panel.expanded_ratio.is_some(),
				"HEARTH__PANEL__EXPANDED_RATIO",
				"panel.expanded_ratio",
			),
			(
				panel.image_min_ratio.is_some(),
				"HEARTH__PANEL__IMAGE_MIN_RATIO",
				"panel.image_min_ratio",
			),
			(
				panel.image_max_ratio.is_some(),
				"HEARTH__PANEL__IMAGE_MAX_RATIO",
				"panel.image_max_ratio",
			),
			(
				panel.expand_tension.is_some(),
				"HEARTH__PANEL__EXPAND_TENSION",
				"panel.expand_tension",
			),
			(
				panel.expand_friction.is_some(),
				"HEARTH__PANEL__EXPAND_FRICTION",
				"panel.expand_friction",
			),
		];
		for (present, env_var, key) in panel_keys {
			sources.record(key, detect_source(false, present, env_var, None, key));
		}

		sources
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: Option<&'static str>,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if let Some(flag) = cli_flag.filter(|_| cli_present) {
		return Some(SettingSource::CliFlag(flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
