//! Logger installation.
//!
//! Records go through the `log` facade into `tui-logger`. The terminal UI
//! drains that buffer once per frame and shows it in the F12 overlay, so
//! nothing is written to the terminal while the alternate screen is active.

use anyhow::{Result, anyhow};
use log::LevelFilter;

/// Install `tui-logger` as the global logger, capturing records up to `level`.
///
/// Fails if another logger was already installed.
pub fn initialize(level: LevelFilter) -> Result<()> {
	tui_logger::init_logger(level).map_err(|err| anyhow!("failed to install logger: {err}"))?;
	tui_logger::set_default_level(level);
	log::debug!("logging at {level}");
	Ok(())
}
