//! Dual-thumb range selector.
//!
//! Two handles share one track. Each handle is dragged independently and its
//! pixel position is mapped to a stepped value inside a [`RangeSpec`]. Every
//! accepted move emits a new [`Selection`] through a single update path so the
//! `low <= high` invariant holds no matter which handle moved last.

use std::fmt;

use crate::WidgetError;
use crate::gesture::GestureState;

/// Default handle diameter, in track units.
pub const DEFAULT_HANDLE_DIAMETER: f32 = 1.0;

/// Immutable bounds and quantization unit for a range selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSpec {
	min: f32,
	max: f32,
	step: f32,
}

impl RangeSpec {
	/// Validate and build a range.
	///
	/// # Errors
	///
	/// Returns [`WidgetError::InvalidRange`] unless `min < max` (both finite),
	/// and [`WidgetError::InvalidStep`] unless `step` is positive and finite.
	pub fn new(min: f32, max: f32, step: f32) -> Result<Self, WidgetError> {
		if !min.is_finite() || !max.is_finite() || min >= max {
			return Err(WidgetError::InvalidRange { min, max });
		}
		if !step.is_finite() || step <= 0.0 {
			return Err(WidgetError::InvalidStep { step });
		}
		Ok(Self { min, max, step })
	}

	#[must_use]
	pub fn min(&self) -> f32 {
		self.min
	}

	#[must_use]
	pub fn max(&self) -> f32 {
		self.max
	}

	#[must_use]
	pub fn step(&self) -> f32 {
		self.step
	}

	#[must_use]
	pub fn span(&self) -> f32 {
		self.max - self.min
	}

	/// Round `value` to the nearest step counted from `min`, then clamp.
	#[must_use]
	pub fn quantize(&self, value: f32) -> f32 {
		if !value.is_finite() {
			return self.min;
		}
		let steps = ((value - self.min) / self.step).round();
		(self.min + steps * self.step).clamp(self.min, self.max)
	}
}

/// Current selected bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
	pub low: f32,
	pub high: f32,
}

impl Selection {
	#[must_use]
	pub fn new(low: f32, high: f32) -> Self {
		Self { low, high }
	}

	/// Quantize both bounds into `spec` and order them.
	#[must_use]
	pub fn normalized(self, spec: &RangeSpec) -> Self {
		let a = spec.quantize(self.low);
		let b = spec.quantize(self.high);
		Self {
			low: a.min(b),
			high: a.max(b),
		}
	}
}

/// One end of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thumb {
	Low,
	High,
}

impl Thumb {
	#[must_use]
	pub fn other(self) -> Self {
		match self {
			Thumb::Low => Thumb::High,
			Thumb::High => Thumb::Low,
		}
	}
}

/// Which handle is being dragged, and where the pointer has been.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
	pub thumb: Thumb,
	pub gesture: GestureState,
}

type ChangeHook = Box<dyn FnMut(Selection)>;

/// Range selector state: handle positions, active drag and last selection.
pub struct RangeSlider {
	spec: RangeSpec,
	handle_diameter: f32,
	track_length: Option<f32>,
	low_px: f32,
	high_px: f32,
	selection: Selection,
	drag: Option<DragState>,
	on_change: Option<ChangeHook>,
}

impl fmt::Debug for RangeSlider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RangeSlider")
			.field("spec", &self.spec)
			.field("handle_diameter", &self.handle_diameter)
			.field("track_length", &self.track_length)
			.field("low_px", &self.low_px)
			.field("high_px", &self.high_px)
			.field("selection", &self.selection)
			.field("drag", &self.drag)
			.field("on_change", &self.on_change.is_some())
			.finish()
	}
}

impl RangeSlider {
	/// Seed a slider from caller-supplied values. The track length stays
	/// unknown until [`RangeSlider::set_track_length`] is called.
	#[must_use]
	pub fn new(spec: RangeSpec, selection: Selection) -> Self {
		Self {
			spec,
			handle_diameter: DEFAULT_HANDLE_DIAMETER,
			track_length: None,
			low_px: 0.0,
			high_px: 0.0,
			selection: selection.normalized(&spec),
			drag: None,
			on_change: None,
		}
	}

	#[must_use]
	pub fn with_handle_diameter(mut self, diameter: f32) -> Self {
		self.handle_diameter = if diameter.is_finite() {
			diameter.max(0.0)
		} else {
			DEFAULT_HANDLE_DIAMETER
		};
		self.reposition();
		self
	}

	/// Register a callback invoked with every emitted selection.
	#[must_use]
	pub fn on_change(mut self, hook: impl FnMut(Selection) + 'static) -> Self {
		self.on_change = Some(Box::new(hook));
		self
	}

	#[must_use]
	pub fn spec(&self) -> &RangeSpec {
		&self.spec
	}

	#[must_use]
	pub fn selection(&self) -> Selection {
		self.selection
	}

	#[must_use]
	pub fn handle_diameter(&self) -> f32 {
		self.handle_diameter
	}

	#[must_use]
	pub fn track_length(&self) -> Option<f32> {
		self.track_length
	}

	/// Pixel position of a handle along the track.
	#[must_use]
	pub fn position(&self, thumb: Thumb) -> f32 {
		match thumb {
			Thumb::Low => self.low_px,
			Thumb::High => self.high_px,
		}
	}

	#[must_use]
	pub fn active_drag(&self) -> Option<DragState> {
		self.drag
	}

	/// Record the measured track length and re-seat both handles.
	///
	/// Zero, negative and non-finite lengths mean "not measured yet".
	pub fn set_track_length(&mut self, length: f32) {
		self.track_length = (length.is_finite() && length > 0.0).then_some(length);
		self.reposition();
	}

	/// Map a raw track position to a stepped value.
	#[must_use]
	pub fn value_at(&self, pixel: f32) -> f32 {
		let Some(track) = self.track_length else {
			return self.spec.min;
		};
		if !pixel.is_finite() {
			return self.spec.min;
		}
		let fraction = pixel / track;
		self.spec.quantize(self.spec.min + fraction * self.spec.span())
	}

	/// Map a value back onto the track. Degrades to `0` before layout.
	#[must_use]
	pub fn pixel_for(&self, value: f32) -> f32 {
		let Some(track) = self.track_length else {
			return 0.0;
		};
		let fraction = (value - self.spec.min) / self.spec.span();
		if !fraction.is_finite() {
			return 0.0;
		}
		(fraction * track).clamp(0.0, track)
	}

	/// Accept a selection from outside the widget.
	///
	/// Both handles are re-seated from the forward mapping, even when the
	/// values match the last emitted selection and a drag is in progress.
	/// Callers should only sync when the selection changed outside the widget.
	pub fn sync(&mut self, selection: Selection) {
		self.selection = selection.normalized(&self.spec);
		self.reposition();
	}

	/// Pick the handle under `pointer`, if any is within one handle diameter.
	#[must_use]
	pub fn hit_test(&self, pointer: f32) -> Option<Thumb> {
		self.track_length?;
		let reach = self.handle_diameter.max(0.5);
		let low = (pointer - self.low_px).abs();
		let high = (pointer - self.high_px).abs();
		if low > reach && high > reach {
			return None;
		}
		if (low - high).abs() <= f32::EPSILON {
			return Some(if pointer > self.low_px {
				Thumb::High
			} else {
				Thumb::Low
			});
		}
		Some(if low < high { Thumb::Low } else { Thumb::High })
	}

	/// Touch-down on a handle. Replaces any previous drag.
	pub fn press(&mut self, thumb: Thumb, pointer: f32) {
		self.drag = Some(DragState {
			thumb,
			gesture: GestureState::new(pointer),
		});
	}

	/// Move the active handle to `pointer` and emit the resulting selection.
	///
	/// Returns `None` without an active drag or before layout is known.
	pub fn drag_to(&mut self, pointer: f32) -> Option<Selection> {
		let drag = self.drag.as_mut()?;
		drag.gesture.move_to(pointer);
		let thumb = drag.thumb;
		if !pointer.is_finite() {
			return None;
		}
		self.move_thumb(thumb, pointer)
	}

	/// End the active drag. The last emitted value stands.
	pub fn release(&mut self) -> Option<DragState> {
		self.drag.take()
	}

	/// Move a handle by whole steps, with the same clamping as a drag.
	pub fn nudge(&mut self, thumb: Thumb, steps: i32) -> Option<Selection> {
		self.track_length?;
		let current = match thumb {
			Thumb::Low => self.selection.low,
			Thumb::High => self.selection.high,
		};
		let value = self.spec.quantize(current + steps as f32 * self.spec.step);
		let pixel = self.pixel_for(value);
		self.move_thumb(thumb, pixel)
	}

	fn move_thumb(&mut self, thumb: Thumb, candidate: f32) -> Option<Selection> {
		let track = self.track_length?;
		match thumb {
			Thumb::Low => {
				let upper = (self.high_px - self.handle_diameter).max(0.0);
				self.low_px = candidate.clamp(0.0, upper);
			}
			Thumb::High => {
				let lower = (self.low_px + self.handle_diameter).min(track);
				self.high_px = candidate.clamp(lower, track);
			}
		}

		let next = Selection::new(self.value_at(self.low_px), self.value_at(self.high_px));
		Some(self.commit(thumb, next))
	}

	/// The single write path for emitted selections.
	fn commit(&mut self, moved: Thumb, mut next: Selection) -> Selection {
		match moved {
			Thumb::Low => next.low = next.low.min(next.high),
			Thumb::High => next.high = next.high.max(next.low),
		}
		self.selection = next;
		if let Some(hook) = self.on_change.as_mut() {
			hook(next);
		}
		next
	}

	fn reposition(&mut self) {
		self.low_px = self.pixel_for(self.selection.low);
		self.high_px = self.pixel_for(self.selection.high);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;

	fn price_slider(track: f32) -> RangeSlider {
		let spec = RangeSpec::new(250.0, 5000.0, 50.0).expect("valid range");
		let mut slider = RangeSlider::new(spec, Selection::new(250.0, 5000.0));
		slider.set_track_length(track);
		slider
	}

	fn is_step_multiple(spec: &RangeSpec, value: f32) -> bool {
		let steps = (value - spec.min()) / spec.step();
		(steps - steps.round()).abs() < 1e-3
	}

	#[test]
	fn rejects_invalid_ranges() {
		assert_eq!(
			RangeSpec::new(10.0, 10.0, 1.0),
			Err(WidgetError::InvalidRange { min: 10.0, max: 10.0 })
		);
		assert_eq!(
			RangeSpec::new(0.0, 10.0, 0.0),
			Err(WidgetError::InvalidStep { step: 0.0 })
		);
		assert!(RangeSpec::new(0.0, 10.0, -2.0).is_err());
		assert!(RangeSpec::new(f32::NAN, 10.0, 1.0).is_err());
	}

	#[test]
	fn mapped_values_stay_in_range_and_on_step() {
		let specs = [
			RangeSpec::new(250.0, 5000.0, 50.0).unwrap(),
			RangeSpec::new(0.0, 1.0, 0.1).unwrap(),
			RangeSpec::new(-40.0, 13.0, 7.0).unwrap(),
			RangeSpec::new(3.0, 4.0, 5.0).unwrap(),
		];
		for spec in specs {
			let mut slider = RangeSlider::new(spec, Selection::new(spec.min(), spec.max()));
			slider.set_track_length(37.0);
			for i in 0..=370 {
				let pixel = i as f32 / 10.0;
				let value = slider.value_at(pixel);
				assert!(
					value >= spec.min() && value <= spec.max(),
					"{value} outside {spec:?}"
				);
				// `max` is off the step grid when the span is not a whole
				// number of steps, so only a divisible span is checked there.
				let span_steps = spec.span() / spec.step();
				let divisible = (span_steps - span_steps.round()).abs() < 1e-3;
				if value < spec.max() || divisible {
					assert!(is_step_multiple(&spec, value), "{value} off-step for {spec:?}");
				}
			}
		}
	}

	#[test]
	fn divisible_span_keeps_max_on_step() {
		let slider = price_slider(40.0);
		let spec = *slider.spec();
		assert_eq!(slider.value_at(40.0), 5000.0);
		assert!(is_step_multiple(&spec, slider.value_at(40.0)));
		assert!(is_step_multiple(&spec, slider.value_at(39.9)));
	}

	#[test]
	fn extremes_map_to_bounds() {
		let mut slider = price_slider(40.0);
		slider.sync(Selection::new(1000.0, 2000.0));

		slider.press(Thumb::Low, 10.0);
		let low = slider.drag_to(0.0).expect("emits");
		slider.release();
		assert_eq!(low.low, 250.0);

		slider.press(Thumb::High, 20.0);
		let high = slider.drag_to(40.0).expect("emits");
		slider.release();
		assert_eq!(high.high, 5000.0);
	}

	#[test]
	fn pointer_past_track_is_clamped() {
		let mut slider = price_slider(40.0);
		slider.press(Thumb::High, 40.0);
		let selection = slider.drag_to(500.0).expect("emits");
		assert_eq!(selection.high, 5000.0);
		assert_eq!(slider.position(Thumb::High), 40.0);
	}

	#[test]
	fn handles_never_cross() {
		let mut slider = price_slider(40.0);
		slider.press(Thumb::Low, 0.0);
		let selection = slider.drag_to(60.0).expect("emits");
		assert_eq!(slider.position(Thumb::Low), 39.0);
		assert!(selection.low <= selection.high);
		slider.release();

		slider.press(Thumb::High, 40.0);
		let selection = slider.drag_to(-5.0).expect("emits");
		assert_eq!(slider.position(Thumb::High), 40.0);
		assert!(selection.low <= selection.high);
	}

	#[test]
	fn random_drag_sequences_keep_order() {
		let mut slider = price_slider(53.0);
		let mut seed: u32 = 0x2545_f491;
		for _ in 0..2_000 {
			seed ^= seed << 13;
			seed ^= seed >> 17;
			seed ^= seed << 5;
			let thumb = if seed & 1 == 0 { Thumb::Low } else { Thumb::High };
			let pointer = (seed % 700) as f32 / 10.0 - 8.0;
			if slider.active_drag().map(|d| d.thumb) != Some(thumb) {
				slider.release();
				slider.press(thumb, pointer);
			}
			if let Some(selection) = slider.drag_to(pointer) {
				assert!(selection.low <= selection.high, "{selection:?}");
			}
			assert!(slider.position(Thumb::Low) <= slider.position(Thumb::High));
		}
	}

	#[test]
	fn emits_to_hook_on_every_move() {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&seen);
		let spec = RangeSpec::new(0.0, 100.0, 10.0).unwrap();
		let mut slider =
			RangeSlider::new(spec, Selection::new(0.0, 100.0)).on_change(move |s| sink.borrow_mut().push(s));
		slider.set_track_length(10.0);

		slider.press(Thumb::Low, 0.0);
		slider.drag_to(2.0);
		slider.drag_to(2.0);
		slider.drag_to(3.0);

		let seen = seen.borrow();
		assert_eq!(seen.len(), 3);
		assert_eq!(seen[0], Selection::new(20.0, 100.0));
		assert_eq!(seen[2], Selection::new(30.0, 100.0));
	}

	#[test]
	fn unknown_layout_degrades_and_recovers() {
		let spec = RangeSpec::new(250.0, 5000.0, 50.0).unwrap();
		let mut slider = RangeSlider::new(spec, Selection::new(1200.0, 3000.0));
		assert_eq!(slider.position(Thumb::Low), 0.0);
		assert_eq!(slider.position(Thumb::High), 0.0);

		slider.press(Thumb::High, 5.0);
		assert_eq!(slider.drag_to(5.0), None);
		slider.release();

		slider.set_track_length(0.0);
		assert_eq!(slider.track_length(), None);

		slider.set_track_length(95.0);
		assert!((slider.position(Thumb::Low) - 19.0).abs() < 1e-4);
		assert!((slider.position(Thumb::High) - 55.0).abs() < 1e-4);
	}

	#[test]
	fn external_sync_overrides_in_progress_drag() {
		let mut slider = price_slider(95.0);
		slider.press(Thumb::Low, 0.0);
		slider.drag_to(30.0);
		assert_ne!(slider.selection().low, 250.0);

		slider.sync(Selection::new(250.0, 5000.0));
		assert_eq!(slider.position(Thumb::Low), 0.0);
		assert_eq!(slider.position(Thumb::High), 95.0);
		assert_eq!(slider.selection(), Selection::new(250.0, 5000.0));
		assert!(slider.active_drag().is_some(), "gesture keeps tracking");
	}

	#[test]
	fn resync_to_unchanged_values_reseats_handles() {
		let mut slider = price_slider(95.0);
		slider.press(Thumb::Low, 0.0);
		let emitted = slider.drag_to(0.4).expect("emits");
		assert_eq!(emitted, Selection::new(250.0, 5000.0));
		assert!((slider.position(Thumb::Low) - 0.4).abs() < 1e-4);

		slider.sync(Selection::new(250.0, 5000.0));
		assert_eq!(slider.position(Thumb::Low), 0.0);
		assert_eq!(slider.position(Thumb::High), 95.0);
	}

	#[test]
	fn nudge_moves_by_whole_steps() {
		let mut slider = price_slider(95.0);
		let selection = slider.nudge(Thumb::Low, 3).expect("emits");
		assert_eq!(selection.low, 400.0);

		let selection = slider.nudge(Thumb::High, -2).expect("emits");
		assert_eq!(selection.high, 4900.0);

		let selection = slider.nudge(Thumb::Low, -100).expect("emits");
		assert_eq!(selection.low, 250.0);
	}

	#[test]
	fn nudge_cannot_cross_other_handle() {
		let mut slider = price_slider(95.0);
		slider.sync(Selection::new(1000.0, 1100.0));
		let selection = slider.nudge(Thumb::Low, 50).expect("emits");
		assert!(selection.low <= selection.high);
		assert!(slider.position(Thumb::Low) <= slider.position(Thumb::High) - 1.0 + 1e-4);
	}

	#[test]
	fn coarse_steps_may_collapse_to_one_value() {
		let spec = RangeSpec::new(0.0, 10.0, 5.0).unwrap();
		let mut slider = RangeSlider::new(spec, Selection::new(0.0, 10.0));
		slider.set_track_length(40.0);
		slider.press(Thumb::Low, 0.0);
		let selection = slider.drag_to(39.0).expect("emits");
		assert_eq!(selection.low, selection.high);
	}

	#[test]
	fn hit_test_prefers_nearest_handle() {
		let mut slider = price_slider(40.0);
		slider.sync(Selection::new(1200.0, 3000.0));
		let low_px = slider.position(Thumb::Low);
		let high_px = slider.position(Thumb::High);
		assert_eq!(slider.hit_test(low_px), Some(Thumb::Low));
		assert_eq!(slider.hit_test(high_px + 0.5), Some(Thumb::High));
		assert_eq!(slider.hit_test((low_px + high_px) / 2.0), None);
	}
}
