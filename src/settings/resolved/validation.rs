use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if let Some(name) = config.theme.as_deref() {
		if hearth_tui::style::by_name(name).is_none() {
			return Err(ConfigError::invalid(
				"ui.theme",
				name,
				sources.source_for("ui.theme"),
				format!("unknown theme; expected one of {}", hearth_tui::style::names().join(", ")),
			));
		}
	}

	let diameter = config.slider.handle_diameter;
	if !diameter.is_finite() || diameter <= 0.0 {
		return Err(ConfigError::invalid(
			"slider.handle_diameter",
			diameter.to_string(),
			sources.source_for("slider.handle_diameter"),
			"must be greater than zero",
		));
	}

	let panel = &config.panel;
	if !panel.swipe_threshold.is_finite() || panel.swipe_threshold < 0.0 {
		return Err(ConfigError::invalid(
			"panel.swipe_threshold",
			panel.swipe_threshold.to_string(),
			sources.source_for("panel.swipe_threshold"),
			"must not be negative",
		));
	}

	let ratios = [
		("panel.collapsed_ratio", panel.collapsed_ratio),
		("panel.expanded_ratio", panel.expanded_ratio),
		("panel.image_min_ratio", panel.image_min_ratio),
		("panel.image_max_ratio", panel.image_max_ratio),
	];
	for (key, ratio) in ratios {
		if !(0.0..=1.0).contains(&ratio) {
			return Err(ConfigError::invalid(
				key,
				ratio.to_string(),
				sources.source_for(key),
				"must be between 0 and 1",
			));
		}
	}

	if panel.collapsed_ratio > panel.expanded_ratio {
		return Err(ConfigError::invalid(
			"panel.collapsed_ratio",
			panel.collapsed_ratio.to_string(),
			sources.source_for("panel.collapsed_ratio"),
			format!(
				"must not exceed panel.expanded_ratio ({})",
				panel.expanded_ratio
			),
		));
	}

	if panel.image_min_ratio > panel.image_max_ratio {
		return Err(ConfigError::invalid(
			"panel.image_min_ratio",
			panel.image_min_ratio.to_string(),
			sources.source_for("panel.image_min_ratio"),
			format!(
				"must not exceed panel.image_max_ratio ({})",
				panel.image_max_ratio
			),
		));
	}

	if !panel.expand_tension.is_finite() || panel.expand_tension <= 0.0 {
		return Err(ConfigError::invalid(
			"panel.expand_tension",
			panel.expand_tension.to_string(),
			sources.source_for("panel.expand_tension"),
			"must be greater than zero",
		));
	}

	if !panel.expand_friction.is_finite() || panel.expand_friction < 0.0 {
		return Err(ConfigError::invalid(
			"panel.expand_friction",
			panel.expand_friction.to_string(),
			sources.source_for("panel.expand_friction"),
			"must not be negative",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use hearth_tui::PanelConfig;

	use super::super::SettingSource;
	use super::*;

	#[test]
	fn defaults_are_valid() {
		let config = ResolvedConfig::default();
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_handle_diameter() {
		let mut config = ResolvedConfig::default();
		config.slider.handle_diameter = 0.0;

		let mut sources = ConfigSources::default();
		sources.record(
			"slider.handle_diameter",
			Some(SettingSource::Environment("HEARTH__SLIDER__HANDLE_DIAMETER")),
		);

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "slider.handle_diameter");
		let message = err.to_string();
		assert!(message.contains("got 0"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_rejects_ratio_out_of_range() {
		let config = ResolvedConfig {
			panel: PanelConfig {
				expanded_ratio: 1.5,
				..PanelConfig::default()
			},
			..ResolvedConfig::default()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "panel.expanded_ratio");
		assert!(err.to_string().contains("configuration key"));
	}

	#[test]
	fn validation_rejects_inverted_image_bounds() {
		let config = ResolvedConfig {
			panel: PanelConfig {
				image_min_ratio: 0.6,
				image_max_ratio: 0.4,
				..PanelConfig::default()
			},
			..ResolvedConfig::default()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "panel.image_min_ratio");
		assert!(err.reason.contains("image_max_ratio"));
	}

	#[test]
	fn validation_rejects_negative_threshold() {
		let mut config = ResolvedConfig::default();
		config.panel.swipe_threshold = -1.0;

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "panel.swipe_threshold");
	}

	#[test]
	fn validation_reports_theme_flag() {
		let config = ResolvedConfig {
			theme: Some("no-such-theme".into()),
			..ResolvedConfig::default()
		};
		let mut sources = ConfigSources::default();
		sources.record("ui.theme", Some(SettingSource::CliFlag("--theme")));

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.origin, SettingSource::CliFlag("--theme"));
		assert!(err.to_string().contains("CLI flag `--theme`"));
	}

	#[test]
	fn every_builtin_theme_validates() {
		for name in hearth_tui::style::names() {
			let config = ResolvedConfig {
				theme: Some(name.clone()),
				..ResolvedConfig::default()
			};
			assert!(validate(&config, &ConfigSources::default()).is_ok(), "{name}");
		}
	}
}
