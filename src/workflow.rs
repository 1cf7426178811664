use anyhow::{Result, anyhow};
use hearth_listings::{Catalog, Feed, FeedQuery};
use hearth_tui::style::{Theme, by_name, default_theme};
use hearth_tui::{App, run};

use crate::cli::FeedEntry;
use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive browser.
pub(crate) struct BrowseWorkflow {
	app: App,
}

impl BrowseWorkflow {
	pub(crate) fn from_config(config: &ResolvedConfig) -> Result<Self> {
		let theme = resolve_theme(config.theme.as_deref())?;
		let mut app = App::new(Catalog::mock(), config.tui_config());
		app.set_theme(theme);
		Ok(Self { app })
	}

	pub(crate) fn run(self) -> Result<()> {
		run(self.app)
	}
}

fn resolve_theme(name: Option<&str>) -> Result<Theme> {
	match name {
		Some(name) => by_name(name).ok_or_else(|| anyhow!("unknown theme `{name}`")),
		None => Ok(default_theme()),
	}
}

/// Rows the home feed would show for the configured initial query.
pub(crate) fn feed_entries<'a>(catalog: &'a Catalog, config: &ResolvedConfig) -> Vec<FeedEntry<'a>> {
	let query = FeedQuery::with_text(config.initial_query.clone());
	Feed::filter(catalog, &query)
		.into_iter()
		.filter_map(|row| {
			catalog
				.by_index(row.index)
				.map(|property| FeedEntry { property, score: row.score })
		})
		.collect()
}
