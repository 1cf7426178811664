//! Core state container for the terminal application.

use std::time::Duration;

use hearth_listings::{Catalog, Favorites, Feed, FeedQuery, PropertyId};

use super::detail::DetailView;
use super::filters::FilterModal;
use super::home::HomeState;
use crate::components::LogOverlay;
use crate::config::TuiConfig;
use crate::style::{StyleConfig, Theme};

/// Which screen receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
	Home,
	/// Filter modal over the home screen.
	Filters,
	Detail,
}

/// Aggregate state shared across the terminal UI.
pub struct App {
	pub(crate) catalog: Catalog,
	pub(crate) favorites: Favorites,
	pub(crate) query: FeedQuery,
	pub(crate) feed: Feed,
	pub(crate) home: HomeState,
	pub(crate) filters: Option<FilterModal>,
	pub(crate) detail: Option<DetailView>,
	pub(crate) config: TuiConfig,
	pub(crate) logs: LogOverlay,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) should_quit: bool,
}

impl App {
	pub fn new(catalog: Catalog, config: TuiConfig) -> Self {
		let query = FeedQuery::with_text(config.initial_query.clone());
		let mut app = Self {
			catalog,
			favorites: Favorites::default(),
			home: HomeState::new(&config.initial_query),
			query,
			feed: Feed::default(),
			filters: None,
			detail: None,
			logs: LogOverlay::default(),
			style: StyleConfig::default(),
			should_quit: false,
			config,
		};
		app.refresh_feed();
		if let Some(id) = app.config.start_property {
			app.open_property(id);
		}
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style = StyleConfig::with_theme(theme);
	}

	#[must_use]
	pub fn should_quit(&self) -> bool {
		self.should_quit
	}

	#[must_use]
	pub fn screen(&self) -> Screen {
		if self.detail.is_some() {
			Screen::Detail
		} else if self.filters.is_some() {
			Screen::Filters
		} else {
			Screen::Home
		}
	}

	/// Show the detail screen for `id`. Unknown ids show a not-found page.
	pub fn open_property(&mut self, id: PropertyId) {
		match self.catalog.get(id) {
			Ok(property) => log::info!("opened property {id}: {}", property.title),
			Err(error) => log::warn!("{error}"),
		}
		self.detail = Some(DetailView::new(id, &self.config.panel));
	}

	/// Advance animations by one frame.
	pub fn tick(&mut self, dt: Duration) {
		if let Some(detail) = self.detail.as_mut() {
			detail.tick(dt);
		}
	}

	/// Recompute visible rows after the query changed.
	pub(crate) fn refresh_feed(&mut self) {
		self.feed.refresh(&self.catalog, &self.query);
		self.home.ensure_selection(self.feed.len());
	}

	/// Id of the highlighted feed row.
	pub(crate) fn selected_property(&self) -> Option<PropertyId> {
		let selected = self.home.table_state.selected()?;
		let row = self.feed.rows().get(selected)?;
		self.catalog.by_index(row.index).map(|property| property.id)
	}

	pub(crate) fn toggle_favorite(&mut self, id: PropertyId) {
		let now = self.favorites.toggle(id);
		log::debug!("property {id} favourite: {now}");
	}
}
