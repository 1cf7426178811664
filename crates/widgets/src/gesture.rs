//! Transient per-interaction pointer state.

/// Pointer positions along a single axis for one active drag.
///
/// Created on touch-down and dropped on release; nothing outlives the
/// interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
	/// Pointer coordinate when the drag started.
	pub axis_start_offset: f32,
	/// Latest pointer coordinate.
	pub axis_current_offset: f32,
}

impl GestureState {
	#[must_use]
	pub fn new(start: f32) -> Self {
		Self {
			axis_start_offset: start,
			axis_current_offset: start,
		}
	}

	pub fn move_to(&mut self, offset: f32) {
		self.axis_current_offset = offset;
	}

	/// Signed displacement since the drag started.
	#[must_use]
	pub fn delta(&self) -> f32 {
		self.axis_current_offset - self.axis_start_offset
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn delta_tracks_latest_move() {
		let mut gesture = GestureState::new(20.0);
		gesture.move_to(12.0);
		gesture.move_to(5.0);
		assert_eq!(gesture.delta(), -15.0);
	}
}
