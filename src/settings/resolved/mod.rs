use hearth_listings::PropertyId;
use hearth_tui::{PanelConfig, SliderConfig, TuiConfig};
use log::LevelFilter;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
	/// Theme name; `None` uses the built-in default.
	pub theme: Option<String>,
	pub initial_query: String,
	pub start_property: Option<PropertyId>,
	pub slider: SliderConfig,
	pub panel: PanelConfig,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Settings handed to the terminal front-end.
	pub fn tui_config(&self) -> TuiConfig {
		TuiConfig {
			initial_query: self.initial_query.clone(),
			start_property: self.start_property,
			slider: self.slider,
			panel: self.panel,
		}
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

impl Default for ResolvedConfig {
	fn default() -> Self {
		Self {
			theme: None,
			initial_query: String::new(),
			start_property: None,
			slider: SliderConfig::default(),
			panel: PanelConfig::default(),
			log_level: LevelFilter::Info,
		}
	}
}
