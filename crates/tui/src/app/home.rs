//! Home screen: search box, type chips and the listing feed.

use frizbee::Config;
use hearth_listings::TypeChip;
use hearth_listings::feed::config_for_query;
use ratatui::Frame;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, ScrollbarState, TableState};

use super::App;
use super::filters::FilterModal;
use crate::components::rows::{ListingRows, build_listing_rows};
use crate::components::scrollbar::drag_scroll;
use crate::components::{
	Chip, HitMap, ScrollMetrics, TableSpec, point_in_rect, render_button, render_chips,
	render_table,
};
use crate::input::TextField;

pub(crate) const SEARCH_PLACEHOLDER: &str = "Search Address, city, zip...";
const HOME_HINT: &str = "Tab type · Ctrl-O filters · Ctrl-F favourite · Enter open · F12 log · Esc quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HomeHit {
	Chip(TypeChip),
	Filters,
}

pub(crate) struct HomeState {
	pub(crate) search: TextField,
	pub(crate) table_state: TableState,
	pub(crate) scrollbar_state: ScrollbarState,
	/// Data rows of the feed table, as last drawn.
	pub(crate) body: Option<Rect>,
	pub(crate) scrollbar: Option<Rect>,
	pub(crate) metrics: ScrollMetrics,
	pub(crate) dragging_scrollbar: bool,
	pub(crate) drag_anchor: Option<u16>,
	pub(crate) hits: HitMap<HomeHit>,
}

impl HomeState {
	pub(crate) fn new(initial_query: &str) -> Self {
		let mut table_state = TableState::default();
		table_state.select(Some(0));
		Self {
			search: TextField::new(initial_query).with_placeholder(SEARCH_PLACEHOLDER),
			table_state,
			scrollbar_state: ScrollbarState::default(),
			body: None,
			scrollbar: None,
			metrics: ScrollMetrics::default(),
			dragging_scrollbar: false,
			drag_anchor: None,
			hits: HitMap::default(),
		}
	}

	/// Keep the selection inside `len` rows.
	pub(crate) fn ensure_selection(&mut self, len: usize) {
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			None => self.table_state.select(Some(0)),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	fn move_selection(&mut self, delta: isize, len: usize) {
		if len == 0 {
			return;
		}
		let current = self.table_state.selected().unwrap_or(0);
		let next = current.saturating_add_signed(delta).min(len - 1);
		self.table_state.select(Some(next));
	}
}

impl App {
	pub(crate) fn handle_home_key(&mut self, key: KeyEvent) {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let len = self.feed.len();
		match key.code {
			KeyCode::Esc => self.should_quit = true,
			KeyCode::Enter => {
				if let Some(id) = self.selected_property() {
					self.open_property(id);
				}
			}
			KeyCode::Tab => self.select_chip(self.query.chip.next()),
			KeyCode::BackTab => self.select_chip(self.query.chip.previous()),
			KeyCode::Char('f') if ctrl => {
				if let Some(id) = self.selected_property() {
					self.toggle_favorite(id);
				}
			}
			KeyCode::Char('o') if ctrl => self.open_filters(),
			KeyCode::Up => self.home.move_selection(-1, len),
			KeyCode::Down => self.home.move_selection(1, len),
			KeyCode::PageUp => self.home.move_selection(-10, len),
			KeyCode::PageDown => self.home.move_selection(10, len),
			_ => {
				if self.home.search.input(key) {
					self.query.text = self.home.search.text();
					self.refresh_feed();
				}
			}
		}
	}

	pub(crate) fn handle_home_mouse(&mut self, mouse: MouseEvent) {
		let (column, row) = (mouse.column, mouse.row);
		let len = self.feed.len();
		let over_table = self
			.home
			.body
			.is_some_and(|body| point_in_rect(column, row, body));
		let over_scrollbar = self
			.home
			.scrollbar
			.is_some_and(|bar| point_in_rect(column, row, bar));

		match mouse.kind {
			MouseEventKind::ScrollUp if over_table => self.home.move_selection(-1, len),
			MouseEventKind::ScrollDown if over_table => self.home.move_selection(1, len),
			MouseEventKind::Down(MouseButton::Left) if over_scrollbar => {
				self.home.dragging_scrollbar = true;
				self.home.drag_anchor = None;
				self.drag_feed_scrollbar(row);
			}
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(hit) = self.home.hits.at(column, row) {
					match hit {
						HomeHit::Chip(chip) => self.select_chip(chip),
						HomeHit::Filters => self.open_filters(),
					}
				} else if over_table {
					self.open_row_at(row);
				}
			}
			MouseEventKind::Drag(MouseButton::Left) if self.home.dragging_scrollbar => {
				self.drag_feed_scrollbar(row);
			}
			MouseEventKind::Up(MouseButton::Left) => {
				self.home.dragging_scrollbar = false;
				self.home.drag_anchor = None;
			}
			_ => {}
		}
	}

	fn select_chip(&mut self, chip: TypeChip) {
		if self.query.chip != chip {
			self.query.chip = chip;
			self.refresh_feed();
		}
	}

	fn open_filters(&mut self) {
		match FilterModal::new(self.query.criteria.as_ref(), &self.config.slider) {
			Ok(modal) => self.filters = Some(modal),
			Err(error) => log::error!("cannot open filters: {error:#}"),
		}
	}

	fn open_row_at(&mut self, row: u16) {
		let Some(body) = self.home.body else {
			return;
		};
		let index = self.home.table_state.offset() + usize::from(row.saturating_sub(body.y));
		if index >= self.feed.len() {
			return;
		}
		self.home.table_state.select(Some(index));
		if let Some(id) = self.selected_property() {
			self.open_property(id);
		}
	}

	fn drag_feed_scrollbar(&mut self, row: u16) {
		let Some(bar) = self.home.scrollbar else {
			return;
		};
		let home = &mut self.home;
		let current = home.table_state.offset();
		let Some(offset) = drag_scroll(bar, row, current, home.metrics, &mut home.drag_anchor)
		else {
			return;
		};
		*home.table_state.offset_mut() = offset;
		home.table_state
			.select(Some(offset.min(self.feed.len().saturating_sub(1))));
	}

	fn highlight_config(&self) -> Option<(String, Config)> {
		let needle = self.query.text.trim();
		(!needle.is_empty()).then(|| (needle.to_string(), config_for_query(needle)))
	}

	pub(crate) fn render_home(&mut self, frame: &mut Frame, area: Rect) {
		self.home.hits.clear();
		let [header, search, chips, hint, results] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(3),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(3),
		])
		.areas(area);

		self.render_home_header(frame, header);

		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(self.style.theme.border_style())
			.title("Search");
		let inner = block.inner(search);
		frame.render_widget(block, search);
		let focused = self.screen() == super::Screen::Home;
		self.home.search.render(frame, inner, focused, &self.style.theme);

		let chip_list: Vec<Chip<'_>> = TypeChip::ALL
			.iter()
			.map(|chip| Chip::new(chip.label(), *chip == self.query.chip))
			.collect();
		let rects = render_chips(frame, chips, &chip_list, &self.style.theme);
		for (rect, chip) in rects.into_iter().zip(TypeChip::ALL) {
			self.home.hits.push(rect, HomeHit::Chip(chip));
		}

		let hint_line = match &self.query.criteria {
			Some(criteria) => Line::from(vec![
				Span::styled("Filters: ", self.style.theme.header),
				Span::styled(criteria.to_string(), self.style.theme.muted),
			]),
			None => Line::styled(HOME_HINT, self.style.theme.empty_style()),
		};
		frame.render_widget(Paragraph::new(hint_line), hint);

		self.render_feed(frame, results);
	}

	fn render_home_header(&mut self, frame: &mut Frame, area: Rect) {
		let theme = self.style.theme;
		let title = Line::from(vec![
			Span::styled("hearth", theme.header),
			Span::styled("  find your next home", theme.muted),
		]);
		frame.render_widget(Paragraph::new(title), area);

		let label = "Filters";
		let width = u16::try_from(label.len() + 4).unwrap_or(u16::MAX);
		let button_area = Rect {
			x: area.right().saturating_sub(width),
			width: width.min(area.width),
			..area
		};
		let rect = render_button(frame, button_area, label, false, false, &theme);
		self.home.hits.push(rect, HomeHit::Filters);
	}

	fn render_feed(&mut self, frame: &mut Frame, area: Rect) {
		let theme = self.style.theme;
		let viewport = usize::from(area.height.saturating_sub(4));
		self.home.metrics = ScrollMetrics::compute(self.feed.len(), viewport);
		self.home.scrollbar_state = self
			.home
			.scrollbar_state
			.content_length(self.home.metrics.max_scroll.saturating_add(1))
			.viewport_content_length(self.home.metrics.viewport_len)
			.position(self.home.table_state.offset());

		let title_width = area.width.saturating_sub(2).saturating_mul(2) / 5;
		let needle = self.highlight_config();
		let rows = build_listing_rows(ListingRows {
			catalog: &self.catalog,
			rows: self.feed.rows(),
			favorites: &self.favorites,
			needle: needle
				.as_ref()
				.map(|(text, config)| (text.as_str(), config.clone())),
			highlight: theme.highlight,
			favorite: theme.highlight,
			title_width: Some(title_width),
		});

		let spec = TableSpec {
			headers: vec!["", "Property", "Location", "Type", "Price", "Rating"],
			widths: vec![
				Constraint::Length(1),
				Constraint::Length(title_width),
				Constraint::Fill(1),
				Constraint::Length(10),
				Constraint::Length(6),
				Constraint::Length(6),
			],
			rows,
			title: Some(format!("Properties ({})", self.feed.len())),
		};
		let areas = render_table(
			frame,
			area,
			&mut self.home.table_state,
			&mut self.home.scrollbar_state,
			spec,
			&theme,
		);
		self.home.body = Some(areas.body);
		self.home.scrollbar = areas.scrollbar;

		if self.feed.is_empty() && areas.body.height > 0 {
			let empty = Paragraph::new(Line::styled("No properties match", theme.empty_style()))
				.alignment(Alignment::Center);
			frame.render_widget(empty, areas.body);
		}
	}
}
