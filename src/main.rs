mod cli;
mod settings;
mod workflow;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use hearth::logging;
use hearth_listings::Catalog;
use settings::ResolvedConfig;
use workflow::{BrowseWorkflow, feed_entries};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in hearth_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if cli.list {
		return list_feed(cli.output, &resolved);
	}

	logging::initialize(resolved.log_level)?;
	BrowseWorkflow::from_config(&resolved)?
		.run()
		.context("terminal UI failed")
}

/// Print the feed for the configured query instead of starting the UI.
fn list_feed(format: OutputFormat, settings: &ResolvedConfig) -> Result<()> {
	let catalog = Catalog::mock();
	let entries = feed_entries(&catalog, settings);

	match format {
		OutputFormat::Plain => print_plain(&entries),
		OutputFormat::Json => print_json(&settings.initial_query, &entries)?,
	}

	Ok(())
}
