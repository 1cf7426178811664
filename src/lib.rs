//! Library side of the `hearth` property browser.
//!
//! The binary resolves settings and hands them to [`tui::App`]. Embedders can
//! reach the listing data, the gesture widgets and the terminal front-end
//! through the re-exports below without depending on each crate directly.

pub mod app_dirs;
pub mod logging;

pub use hearth_listings as listings;
pub use hearth_tui as tui;
pub use hearth_widgets as widgets;
