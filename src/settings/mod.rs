//! Configuration loading and resolution.
//!
//! Settings are layered from built-in defaults, config files, `HEARTH__*`
//! environment variables and CLI flags. [`load`] merges them and returns a
//! validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
