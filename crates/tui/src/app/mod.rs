//! Core application state and behaviour for the terminal front-end.
//!
//! [`App`] owns the listing catalog, the feed query and every screen's state.
//! Supporting modules split the implementation by concern: input dispatch,
//! drawing, and one module per screen.

mod actions;
mod detail;
mod filters;
mod home;
mod render;
mod state;

pub use state::{App, Screen};
