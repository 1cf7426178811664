//! Spring physics for resting-position transitions.
//!
//! [`SpringAnimation`] is a small, owned animation controller: the widget that
//! holds it decides when to `start`, `cancel` or `advance` it. It is stepped by
//! frame deltas from whatever loop drives the UI, so input handling never waits
//! on it and tests can drive it deterministically.

use std::time::Duration;

/// Longest physics sub-step; larger frame deltas are integrated in slices.
const MAX_STEP_SECS: f32 = 1.0 / 120.0;

/// Upper bound on a single frame delta, so a stalled loop cannot stall us too.
const MAX_FRAME_SECS: f32 = 1.0;

/// Damped harmonic oscillator parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
	/// Spring constant. Higher values settle faster.
	pub stiffness: f32,
	/// Viscous damping coefficient.
	pub damping: f32,
	/// Mass of the animated value.
	pub mass: f32,
	/// Speed below which the spring may come to rest.
	pub rest_velocity: f32,
	/// Distance from the target below which the spring may come to rest.
	pub rest_displacement: f32,
}

impl SpringSpec {
	pub const DEFAULT_TENSION: f32 = 40.0;
	pub const DEFAULT_FRICTION: f32 = 7.0;

	/// Build a spring from Origami-style tension/friction values.
	#[must_use]
	pub fn from_tension_friction(tension: f32, friction: f32) -> Self {
		let stiffness = ((tension - 30.0) * 3.62 + 194.0).max(1.0);
		let damping = ((friction - 8.0) * 3.0 + 25.0).max(0.0);
		Self {
			stiffness,
			damping,
			mass: 1.0,
			rest_velocity: 0.001,
			rest_displacement: 0.001,
		}
	}
}

impl Default for SpringSpec {
	fn default() -> Self {
		Self::from_tension_friction(Self::DEFAULT_TENSION, Self::DEFAULT_FRICTION)
	}
}

/// A single animated scalar driven toward a target by a [`SpringSpec`].
#[derive(Debug, Clone)]
pub struct SpringAnimation {
	value: f32,
	velocity: f32,
	target: f32,
	spec: SpringSpec,
	running: bool,
}

impl SpringAnimation {
	#[must_use]
	pub fn new(initial: f32) -> Self {
		Self {
			value: initial,
			velocity: 0.0,
			target: initial,
			spec: SpringSpec::default(),
			running: false,
		}
	}

	/// Start (or retarget) the animation from the current value.
	///
	/// A running animation keeps its velocity so a retarget does not jolt.
	pub fn start(&mut self, target: f32, spec: SpringSpec) {
		self.target = target;
		self.spec = spec;
		self.running = true;
	}

	/// Stop animating. The current interpolated value becomes the baseline.
	pub fn cancel(&mut self) {
		self.running = false;
		self.velocity = 0.0;
		self.target = self.value;
	}

	/// Jump to `value` without animating.
	pub fn snap_to(&mut self, value: f32) {
		self.value = value;
		self.target = value;
		self.velocity = 0.0;
		self.running = false;
	}

	#[must_use]
	pub fn current_value(&self) -> f32 {
		self.value
	}

	#[must_use]
	pub fn target(&self) -> f32 {
		self.target
	}

	#[must_use]
	pub fn velocity(&self) -> f32 {
		self.velocity
	}

	#[must_use]
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Integrate the spring over `dt`. Returns whether it is still running.
	pub fn advance(&mut self, dt: Duration) -> bool {
		if !self.running {
			return false;
		}

		let mut remaining = dt.as_secs_f32().min(MAX_FRAME_SECS);
		while remaining > 0.0 && self.running {
			let step = remaining.min(MAX_STEP_SECS);
			let displacement = self.value - self.target;
			let force = -self.spec.stiffness * displacement - self.spec.damping * self.velocity;
			self.velocity += force / self.spec.mass * step;
			self.value += self.velocity * step;
			remaining -= step;

			if self.is_settled() {
				self.value = self.target;
				self.velocity = 0.0;
				self.running = false;
			}
		}

		self.running
	}

	fn is_settled(&self) -> bool {
		self.velocity.abs() < self.spec.rest_velocity
			&& (self.value - self.target).abs() < self.spec.rest_displacement
	}
}
