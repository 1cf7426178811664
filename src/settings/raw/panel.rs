use hearth_tui::{PanelConfig, SliderConfig};
use serde::Deserialize;

/// `[slider]` values prior to validation.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub(super) struct SliderSection {
	pub(super) handle_diameter: Option<f32>,
}

impl SliderSection {
	pub(super) fn resolve(&self) -> SliderConfig {
		let defaults = SliderConfig::default();
		SliderConfig {
			handle_diameter: self.handle_diameter.unwrap_or(defaults.handle_diameter),
		}
	}
}

/// `[panel]` values prior to validation. Ratios are fractions of the
/// terminal height.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub(super) struct PanelSection {
	pub(super) swipe_threshold: Option<f32>,
	pub(super) collapsed_ratio: Option<f32>,
	pub(super) expanded_ratio: Option<f32>,
	pub(super) image_min_ratio: Option<f32>,
	pub(super) image_max_ratio: Option<f32>,
	pub(super) expand_tension: Option<f32>,
	pub(super) expand_friction: Option<f32>,
}

impl PanelSection {
	pub(super) fn resolve(&self) -> PanelConfig {
		let defaults = PanelConfig::default();
		PanelConfig {
			swipe_threshold: self.swipe_threshold.unwrap_or(defaults.swipe_threshold),
			collapsed_ratio: self.collapsed_ratio.unwrap_or(defaults.collapsed_ratio),
			expanded_ratio: self.expanded_ratio.unwrap_or(defaults.expanded_ratio),
			image_min_ratio: self.image_min_ratio.unwrap_or(defaults.image_min_ratio),
			image_max_ratio: self.image_max_ratio.unwrap_or(defaults.image_max_ratio),
			expand_tension: self.expand_tension.unwrap_or(defaults.expand_tension),
			expand_friction: self.expand_friction.unwrap_or(defaults.expand_friction),
		}
	}
}
