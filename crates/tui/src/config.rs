use hearth_listings::PropertyId;
use hearth_widgets::SpringSpec;

/// Range selector tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
	/// Handle diameter in cells; also the minimum gap between handles.
	pub handle_diameter: f32,
}

impl Default for SliderConfig {
	fn default() -> Self {
		Self {
			handle_diameter: 1.0,
		}
	}
}

/// Detail panel geometry and springs, as fractions of the screen height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConfig {
	/// Release distance in rows needed to switch between collapsed and expanded.
	pub swipe_threshold: f32,
	pub collapsed_ratio: f32,
	pub expanded_ratio: f32,
	pub image_min_ratio: f32,
	pub image_max_ratio: f32,
	pub expand_tension: f32,
	pub expand_friction: f32,
}

impl Default for PanelConfig {
	fn default() -> Self {
		Self {
			swipe_threshold: 2.0,
			collapsed_ratio: 0.2,
			expanded_ratio: 0.55,
			image_min_ratio: 0.25,
			image_max_ratio: 0.5,
			expand_tension: 50.0,
			expand_friction: 10.0,
		}
	}
}

impl PanelConfig {
	#[must_use]
	pub fn expand_spring(&self) -> SpringSpec {
		SpringSpec::from_tension_friction(self.expand_tension, self.expand_friction)
	}
}

/// Everything the terminal front-end needs from the resolved settings.
#[derive(Debug, Clone, Default)]
pub struct TuiConfig {
	pub initial_query: String,
	/// Open this listing's detail screen on start.
	pub start_property: Option<PropertyId>,
	pub slider: SliderConfig,
	pub panel: PanelConfig,
}
