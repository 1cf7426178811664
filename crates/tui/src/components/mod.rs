//! UI building blocks shared by the screens.

/// Chips and buttons.
pub mod chips;
/// Clickable regions recorded while drawing.
pub mod hits;
pub mod logs;
/// Range slider track.
pub mod range;
/// Feed row construction and match highlighting.
pub mod rows;
/// Scrollbar for viewports.
pub mod scrollbar;
/// Table rendering and configuration.
pub mod tables;

pub use chips::{Chip, render_button, render_chips};
pub use hits::HitMap;
pub use logs::LogOverlay;
pub use range::render_range;
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
pub use tables::{TableAreas, TableSpec, render_table};
