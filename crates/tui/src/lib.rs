//! Interactive terminal front-end for `hearth`.
//!
//! This crate contains the full TUI application: the home feed, the filter
//! modal, the property detail screen, the event loop, and the reusable
//! components and themes they are drawn with.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;
#[cfg(test)]
mod test_support;

pub use app::{App, Screen};
pub use config::{PanelConfig, SliderConfig, TuiConfig};
pub use runtime::run;

pub use crate::style::{StyleConfig, Theme, builtin_themes, default_theme};
