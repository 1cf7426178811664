use thiserror::Error;

/// Configuration errors raised when constructing a widget.
#[derive(Debug, Error, PartialEq)]
pub enum WidgetError {
	/// The range bounds are not finite or `min` is not below `max`.
	#[error("range minimum {min} must be below maximum {max}")]
	InvalidRange { min: f32, max: f32 },

	/// The quantization step is zero, negative or not finite.
	#[error("range step must be a positive number, got {step}")]
	InvalidStep { step: f32 },

	/// The expanded panel would be shorter than its collapsed height.
	#[error("panel height {full} must be at least its collapsed height {collapsed}")]
	InvalidGeometry { full: f32, collapsed: f32 },
}
