//! Swipeable bottom panel with two resting positions.
//!
//! The panel translates vertically by an offset in `[-travel, 0]`: `0` rests
//! collapsed, `-travel` rests expanded. Releases past a threshold switch
//! [`PanelState`]; every other release springs back. The state enum always
//! names the resting offset the spring is heading to.

use std::fmt;
use std::time::Duration;

use crate::WidgetError;
use crate::gesture::GestureState;
use crate::spring::{SpringAnimation, SpringSpec};

/// Release displacement needed to switch state.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

pub const EXPAND_TENSION: f32 = 50.0;
pub const EXPAND_FRICTION: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
	#[default]
	Collapsed,
	Expanded,
}

/// Heights of the panel at its two resting positions.
///
/// The default is a zero-sized panel, used until the viewport is measured.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelGeometry {
	full_height: f32,
	collapsed_height: f32,
}

impl PanelGeometry {
	/// # Errors
	///
	/// Returns [`WidgetError::InvalidGeometry`] when either height is negative
	/// or not finite, or when `full_height < collapsed_height`.
	pub fn new(full_height: f32, collapsed_height: f32) -> Result<Self, WidgetError> {
		let valid = full_height.is_finite()
			&& collapsed_height.is_finite()
			&& collapsed_height >= 0.0
			&& full_height >= collapsed_height;
		if !valid {
			return Err(WidgetError::InvalidGeometry {
				full: full_height,
				collapsed: collapsed_height,
			});
		}
		Ok(Self {
			full_height,
			collapsed_height,
		})
	}

	/// Derive both heights as fractions of a viewport height.
	///
	/// # Errors
	///
	/// Fails like [`PanelGeometry::new`] when the ratios are inverted.
	pub fn from_viewport(
		height: f32,
		collapsed_ratio: f32,
		expanded_ratio: f32,
	) -> Result<Self, WidgetError> {
		Self::new(height * expanded_ratio, height * collapsed_ratio)
	}

	#[must_use]
	pub fn full_height(&self) -> f32 {
		self.full_height
	}

	#[must_use]
	pub fn collapsed_height(&self) -> f32 {
		self.collapsed_height
	}

	/// Distance between the two resting offsets.
	#[must_use]
	pub fn travel(&self) -> f32 {
		(self.full_height - self.collapsed_height).max(0.0)
	}
}

type StateHook = Box<dyn FnMut(PanelState)>;

/// Drag-to-expand panel driven by a spring between two resting offsets.
pub struct SwipePanel {
	geometry: PanelGeometry,
	state: PanelState,
	animation: SpringAnimation,
	drag: Option<GestureState>,
	baseline: f32,
	threshold: f32,
	expand_spec: SpringSpec,
	settle_spec: SpringSpec,
	on_state_change: Option<StateHook>,
}

impl fmt::Debug for SwipePanel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SwipePanel")
			.field("geometry", &self.geometry)
			.field("state", &self.state)
			.field("animation", &self.animation)
			.field("drag", &self.drag)
			.field("baseline", &self.baseline)
			.field("threshold", &self.threshold)
			.finish_non_exhaustive()
	}
}

impl SwipePanel {
	#[must_use]
	pub fn new(geometry: PanelGeometry) -> Self {
		Self {
			geometry,
			state: PanelState::Collapsed,
			animation: SpringAnimation::new(0.0),
			drag: None,
			baseline: 0.0,
			threshold: DEFAULT_SWIPE_THRESHOLD,
			expand_spec: SpringSpec::from_tension_friction(EXPAND_TENSION, EXPAND_FRICTION),
			settle_spec: SpringSpec::default(),
			on_state_change: None,
		}
	}

	#[must_use]
	pub fn with_threshold(mut self, threshold: f32) -> Self {
		if threshold.is_finite() && threshold >= 0.0 {
			self.threshold = threshold;
		}
		self
	}

	/// Spring used when the panel opens.
	#[must_use]
	pub fn with_expand_spring(mut self, spec: SpringSpec) -> Self {
		self.expand_spec = spec;
		self
	}

	/// Spring used for collapsing and snap-backs.
	#[must_use]
	pub fn with_settle_spring(mut self, spec: SpringSpec) -> Self {
		self.settle_spec = spec;
		self
	}

	#[must_use]
	pub fn on_state_change(mut self, hook: impl FnMut(PanelState) + 'static) -> Self {
		self.on_state_change = Some(Box::new(hook));
		self
	}

	#[must_use]
	pub fn state(&self) -> PanelState {
		self.state
	}

	#[must_use]
	pub fn geometry(&self) -> PanelGeometry {
		self.geometry
	}

	#[must_use]
	pub fn threshold(&self) -> f32 {
		self.threshold
	}

	#[must_use]
	pub fn is_dragging(&self) -> bool {
		self.drag.is_some()
	}

	#[must_use]
	pub fn is_animating(&self) -> bool {
		self.animation.is_running()
	}

	/// Offset the current state rests at.
	#[must_use]
	pub fn resting_offset(&self) -> f32 {
		Self::resting_for(self.state, &self.geometry)
	}

	fn resting_for(state: PanelState, geometry: &PanelGeometry) -> f32 {
		match state {
			PanelState::Collapsed => 0.0,
			PanelState::Expanded => -geometry.travel(),
		}
	}

	/// Current translation, always within `[-travel, 0]`.
	#[must_use]
	pub fn offset(&self) -> f32 {
		let travel = self.geometry.travel();
		self.animation.current_value().clamp(-travel, 0.0)
	}

	/// Height of the panel currently on screen.
	#[must_use]
	pub fn visible_height(&self) -> f32 {
		self.geometry.collapsed_height - self.offset()
	}

	/// Height of the area above the panel, shrinking as the panel rises.
	#[must_use]
	pub fn image_height(&self, min_height: f32, max_height: f32) -> f32 {
		let travel = self.geometry.travel();
		if travel <= 0.0 {
			return max_height;
		}
		let progress = ((self.offset() + travel) / travel).clamp(0.0, 1.0);
		min_height + (max_height - min_height) * progress
	}

	/// Touch-down. Interrupts any spring; its current value becomes the baseline.
	pub fn begin_drag(&mut self, pointer: f32) {
		self.animation.cancel();
		self.baseline = self.offset();
		self.animation.snap_to(self.baseline);
		self.drag = Some(GestureState::new(pointer));
	}

	/// Apply a move in the allowed direction only. Returns the new offset.
	pub fn drag_to(&mut self, pointer: f32) -> Option<f32> {
		let gesture = self.drag.as_mut()?;
		gesture.move_to(pointer);
		let dy = gesture.delta();

		let allowed = match self.state {
			PanelState::Collapsed => dy < 0.0,
			PanelState::Expanded => dy > 0.0,
		};
		let offset = if allowed && dy.is_finite() {
			self.baseline + dy
		} else {
			self.baseline
		};
		let offset = offset.clamp(-self.geometry.travel(), 0.0);
		self.animation.snap_to(offset);
		Some(offset)
	}

	/// Release at `pointer`; see [`SwipePanel::release_with`].
	pub fn release(&mut self, pointer: f32) -> Option<PanelState> {
		let mut gesture = self.drag.take()?;
		gesture.move_to(pointer);
		Some(self.release_with(gesture.delta()))
	}

	/// Resolve a release with total displacement `dy` and start the spring.
	pub fn release_with(&mut self, dy: f32) -> PanelState {
		self.drag = None;
		let previous = self.state;
		let next = match previous {
			PanelState::Collapsed if dy < -self.threshold => PanelState::Expanded,
			PanelState::Expanded if dy > self.threshold => PanelState::Collapsed,
			state => state,
		};

		let spec = if previous == PanelState::Collapsed && next == PanelState::Expanded {
			self.expand_spec
		} else {
			self.settle_spec
		};
		self.animation
			.start(Self::resting_for(next, &self.geometry), spec);

		if next != previous {
			self.state = next;
			log::debug!("detail panel {previous:?} -> {next:?} (dy {dy:.1})");
			if let Some(hook) = self.on_state_change.as_mut() {
				hook(next);
			}
		}
		next
	}

	/// Advance the spring. Returns whether it is still moving.
	pub fn tick(&mut self, dt: Duration) -> bool {
		if self.drag.is_some() {
			return false;
		}
		self.animation.advance(dt)
	}

	/// Back to a collapsed panel at rest, as on a fresh mount.
	pub fn reset(&mut self) {
		self.state = PanelState::Collapsed;
		self.drag = None;
		self.baseline = 0.0;
		self.animation.snap_to(0.0);
	}

	/// Adopt new heights and rest at the current state's offset.
	pub fn set_geometry(&mut self, geometry: PanelGeometry) {
		if geometry == self.geometry {
			return;
		}
		self.geometry = geometry;
		self.drag = None;
		let resting = self.resting_offset();
		self.baseline = resting;
		self.animation.snap_to(resting);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;

	const FRAME: Duration = Duration::from_millis(16);

	fn panel() -> SwipePanel {
		// 800-unit viewport: collapsed 160, full 440, travel 280.
		let geometry = PanelGeometry::from_viewport(800.0, 0.2, 0.55).expect("geometry");
		SwipePanel::new(geometry)
	}

	fn settle(panel: &mut SwipePanel) {
		for _ in 0..1_000 {
			if !panel.tick(FRAME) {
				return;
			}
		}
		panic!("panel never settled");
	}

	#[test]
	fn starts_collapsed_at_rest() {
		let panel = panel();
		assert_eq!(panel.state(), PanelState::Collapsed);
		assert_eq!(panel.offset(), 0.0);
		assert!((panel.geometry().travel() - 280.0).abs() < 1e-3);
	}

	#[test]
	fn swipe_up_past_threshold_expands() {
		let mut panel = panel();
		panel.begin_drag(500.0);
		panel.drag_to(440.0);
		assert_eq!(panel.release(440.0), Some(PanelState::Expanded));
		settle(&mut panel);
		assert_eq!(panel.offset(), -panel.geometry().travel());
	}

	#[test]
	fn short_swipe_up_snaps_back() {
		let mut panel = panel();
		panel.begin_drag(500.0);
		assert_eq!(panel.drag_to(470.0), Some(-30.0));
		assert_eq!(panel.release(470.0), Some(PanelState::Collapsed));
		assert!(panel.is_animating());
		settle(&mut panel);
		assert_eq!(panel.offset(), 0.0);
	}

	#[test]
	fn expanded_short_swipe_down_stays_expanded() {
		let mut panel = panel();
		assert_eq!(panel.release_with(-60.0), PanelState::Expanded);
		settle(&mut panel);

		assert_eq!(panel.release_with(40.0), PanelState::Expanded);
		settle(&mut panel);
		assert_eq!(panel.offset(), -panel.geometry().travel());
	}

	#[test]
	fn expanded_long_swipe_down_collapses() {
		let mut panel = panel();
		panel.release_with(-60.0);
		settle(&mut panel);

		panel.begin_drag(100.0);
		panel.drag_to(180.0);
		assert_eq!(panel.release(180.0), Some(PanelState::Collapsed));
		settle(&mut panel);
		assert_eq!(panel.offset(), 0.0);
	}

	#[test]
	fn disallowed_direction_is_pinned() {
		let mut panel = panel();
		panel.begin_drag(300.0);
		assert_eq!(panel.drag_to(340.0), Some(0.0));

		panel.release_with(-80.0);
		settle(&mut panel);
		let travel = panel.geometry().travel();
		panel.begin_drag(300.0);
		assert_eq!(panel.drag_to(250.0), Some(-travel));
	}

	#[test]
	fn over_drag_is_clamped_to_travel() {
		let mut panel = panel();
		panel.begin_drag(700.0);
		let travel = panel.geometry().travel();
		assert_eq!(panel.drag_to(0.0), Some(-travel));
	}

	#[test]
	fn new_drag_takes_over_mid_animation() {
		let mut panel = panel();
		panel.release_with(-60.0);
		panel.tick(FRAME);
		panel.tick(FRAME);
		let midway = panel.offset();
		assert!(midway < 0.0 && midway > -panel.geometry().travel());

		panel.begin_drag(200.0);
		assert!(!panel.is_animating());
		assert_eq!(panel.offset(), midway);
		assert_eq!(panel.drag_to(210.0), Some(midway + 10.0));
		assert!(!panel.tick(FRAME), "drag owns the offset");
	}

	#[test]
	fn image_height_follows_offset() {
		let mut panel = panel();
		assert_eq!(panel.image_height(200.0, 400.0), 400.0);

		panel.release_with(-60.0);
		settle(&mut panel);
		assert_eq!(panel.image_height(200.0, 400.0), 200.0);

		panel.begin_drag(0.0);
		panel.drag_to(140.0);
		assert!((panel.image_height(200.0, 400.0) - 300.0).abs() < 1e-3);
	}

	#[test]
	fn state_hook_fires_on_transitions_only() {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&seen);
		let mut panel = panel().on_state_change(move |state| sink.borrow_mut().push(state));

		panel.release_with(-30.0);
		panel.release_with(-60.0);
		panel.release_with(-60.0);
		panel.release_with(70.0);

		assert_eq!(
			seen.borrow().as_slice(),
			&[PanelState::Expanded, PanelState::Collapsed]
		);
	}

	#[test]
	fn reset_returns_to_collapsed_rest() {
		let mut panel = panel();
		panel.release_with(-60.0);
		panel.tick(FRAME);
		panel.reset();
		assert_eq!(panel.state(), PanelState::Collapsed);
		assert_eq!(panel.offset(), 0.0);
		assert!(!panel.is_animating());
	}

	#[test]
	fn geometry_change_reseats_resting_offset() {
		let mut panel = panel();
		panel.release_with(-60.0);
		settle(&mut panel);

		let smaller = PanelGeometry::new(100.0, 40.0).unwrap();
		panel.set_geometry(smaller);
		assert_eq!(panel.offset(), -60.0);
		assert_eq!(panel.visible_height(), 100.0);
	}

	#[test]
	fn inverted_geometry_is_rejected() {
		assert!(PanelGeometry::new(10.0, 20.0).is_err());
		assert!(PanelGeometry::from_viewport(100.0, 0.6, 0.5).is_err());
	}
}
