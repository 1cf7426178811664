//! Interaction logic for the gesture-driven widgets used by `hearth`.
//!
//! Nothing in this crate knows about terminals. Widgets consume pointer
//! coordinates along one axis and frame deltas, and expose the values a
//! renderer needs: handle positions, selections, panel offsets.

mod error;
pub mod gesture;
pub mod sheet;
pub mod slider;
pub mod spring;

pub use error::WidgetError;
pub use gesture::GestureState;
pub use sheet::{DEFAULT_SWIPE_THRESHOLD, PanelGeometry, PanelState, SwipePanel};
pub use slider::{DragState, RangeSlider, RangeSpec, Selection, Thumb};
pub use spring::{SpringAnimation, SpringSpec};
