//! Filter modal drawn over the home screen.
//!
//! The modal edits a working copy of [`FilterCriteria`]. Nothing reaches the
//! feed until "Apply Filters"; `Esc` drops the copy.

use anyhow::{Context, Result};
use hearth_listings::{
	Bathrooms, Bedrooms, Category, Facility, FilterCriteria, ListingType, PRICE_RANGE,
};
use hearth_widgets::{RangeSlider, RangeSpec, Selection, Thumb};
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::App;
use crate::components::range::track_length_for;
use crate::components::{Chip, HitMap, point_in_rect, render_button, render_chips, render_range};
use crate::config::SliderConfig;
use crate::input::TextField;
use crate::style::Theme;

const MODAL_WIDTH: u16 = 72;
const MODAL_HEIGHT: u16 = 19;

/// Focusable parts of the modal, in `Tab` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FilterField {
	ListingType,
	City,
	Country,
	Category,
	PriceLow,
	PriceHigh,
	Bedrooms,
	Bathrooms,
	Facility,
	ClearAll,
	Apply,
}

impl FilterField {
	const ORDER: [Self; 11] = [
		Self::ListingType,
		Self::City,
		Self::Country,
		Self::Category,
		Self::PriceLow,
		Self::PriceHigh,
		Self::Bedrooms,
		Self::Bathrooms,
		Self::Facility,
		Self::ClearAll,
		Self::Apply,
	];

	fn index(self) -> usize {
		Self::ORDER
			.iter()
			.position(|field| *field == self)
			.unwrap_or(0)
	}

	fn next(self) -> Self {
		Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
	}

	fn previous(self) -> Self {
		let len = Self::ORDER.len();
		Self::ORDER[(self.index() + len - 1) % len]
	}

	fn thumb(self) -> Option<Thumb> {
		match self {
			Self::PriceLow => Some(Thumb::Low),
			Self::PriceHigh => Some(Thumb::High),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FilterHit {
	ListingType(ListingType),
	City,
	Country,
	Category(Category),
	Facility(Facility),
	Bedrooms,
	Bathrooms,
	Bedroom(Bedrooms),
	Bathroom(Bathrooms),
	ClearAll,
	Apply,
	Cancel,
}

/// What the app should do with the modal after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FilterOutcome {
	Stay,
	Close,
	Apply,
}

/// An open room dropdown and its highlighted option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dropdown {
	field: FilterField,
	index: usize,
}

impl Dropdown {
	fn len(self) -> usize {
		match self.field {
			FilterField::Bathrooms => Bathrooms::ALL.len(),
			_ => Bedrooms::ALL.len(),
		}
	}
}

pub(crate) struct FilterModal {
	pub(crate) criteria: FilterCriteria,
	city: TextField,
	country: TextField,
	pub(crate) slider: RangeSlider,
	pub(crate) focus: FilterField,
	listing_cursor: usize,
	category_cursor: usize,
	facility_cursor: usize,
	dropdown: Option<Dropdown>,
	pub(crate) hits: HitMap<FilterHit>,
	/// Track row of the price slider, as last drawn.
	pub(crate) slider_area: Option<Rect>,
}

impl FilterModal {
	/// Open the modal on the applied criteria, or on the defaults.
	pub(crate) fn new(applied: Option<&FilterCriteria>, slider: &SliderConfig) -> Result<Self> {
		let criteria = applied.cloned().unwrap_or_default();
		let spec = RangeSpec::new(
			PRICE_RANGE.min as f32,
			PRICE_RANGE.max as f32,
			PRICE_RANGE.step as f32,
		)
		.context("price slider bounds")?;
		let slider = RangeSlider::new(spec, price_selection(&criteria))
			.with_handle_diameter(slider.handle_diameter);

		Ok(Self {
			city: TextField::new(criteria.city.clone()).with_placeholder("Enter city"),
			country: TextField::new(criteria.country.clone()).with_placeholder("Enter country"),
			listing_cursor: ListingType::ALL
				.iter()
				.position(|kind| *kind == criteria.listing_type)
				.unwrap_or(0),
			criteria,
			slider,
			focus: FilterField::ListingType,
			category_cursor: 0,
			facility_cursor: 0,
			dropdown: None,
			hits: HitMap::default(),
			slider_area: None,
		})
	}

	pub(crate) fn into_criteria(self) -> FilterCriteria {
		self.criteria
	}

	/// Reset to the "Clear All" state.
	pub(crate) fn clear_all(&mut self) {
		self.criteria = FilterCriteria::cleared();
		self.city.set_text(&self.criteria.city);
		self.country.set_text(&self.criteria.country);
		self.slider.sync(price_selection(&self.criteria));
		self.dropdown = None;
		log::debug!("filters cleared");
	}

	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> FilterOutcome {
		if let Some(dropdown) = self.dropdown {
			self.handle_dropdown_key(dropdown, key);
			return FilterOutcome::Stay;
		}

		match key.code {
			KeyCode::Esc => return FilterOutcome::Close,
			KeyCode::Tab => self.focus = self.focus.next(),
			KeyCode::BackTab => self.focus = self.focus.previous(),
			_ => return self.handle_field_key(key),
		}
		FilterOutcome::Stay
	}

	fn handle_field_key(&mut self, key: KeyEvent) -> FilterOutcome {
		let activate = matches!(key.code, KeyCode::Enter | KeyCode::Char(' '));
		let step = match key.code {
			KeyCode::Left => -1,
			KeyCode::Right => 1,
			_ => 0,
		};

		match self.focus {
			FilterField::City => {
				if self.city.input(key) {
					self.criteria.city = self.city.text();
				}
			}
			FilterField::Country => {
				if self.country.input(key) {
					self.criteria.country = self.country.text();
				}
			}
			FilterField::ListingType => {
				self.listing_cursor = shift(self.listing_cursor, step, ListingType::ALL.len());
				if activate {
					self.criteria.listing_type = ListingType::ALL[self.listing_cursor];
				}
			}
			FilterField::Category => {
				self.category_cursor = shift(self.category_cursor, step, Category::ALL.len());
				if activate {
					self.criteria
						.toggle_category(Category::ALL[self.category_cursor]);
				}
			}
			FilterField::Facility => {
				self.facility_cursor = shift(self.facility_cursor, step, Facility::ALL.len());
				if activate {
					self.criteria
						.toggle_facility(Facility::ALL[self.facility_cursor]);
				}
			}
			FilterField::PriceLow | FilterField::PriceHigh => {
				let thumb = self.focus.thumb().unwrap_or(Thumb::Low);
				if step != 0 {
					if let Some(selection) = self.slider.nudge(thumb, step) {
						self.store_price(selection);
					}
				}
				if activate {
					self.focus = match thumb.other() {
						Thumb::Low => FilterField::PriceLow,
						Thumb::High => FilterField::PriceHigh,
					};
				}
			}
			FilterField::Bedrooms => {
				if step != 0 {
					let index = Bedrooms::ALL
						.iter()
						.position(|rooms| *rooms == self.criteria.bedrooms)
						.unwrap_or(0);
					self.criteria.bedrooms = Bedrooms::ALL[shift(index, step, Bedrooms::ALL.len())];
				}
				if activate {
					self.open_dropdown(FilterField::Bedrooms);
				}
			}
			FilterField::Bathrooms => {
				if step != 0 {
					let index = Bathrooms::ALL
						.iter()
						.position(|rooms| *rooms == self.criteria.bathrooms)
						.unwrap_or(0);
					self.criteria.bathrooms =
						Bathrooms::ALL[shift(index, step, Bathrooms::ALL.len())];
				}
				if activate {
					self.open_dropdown(FilterField::Bathrooms);
				}
			}
			FilterField::ClearAll if activate => self.clear_all(),
			FilterField::Apply if activate => return FilterOutcome::Apply,
			FilterField::ClearAll | FilterField::Apply => {}
		}
		FilterOutcome::Stay
	}

	fn handle_dropdown_key(&mut self, mut dropdown: Dropdown, key: KeyEvent) {
		match key.code {
			KeyCode::Esc => self.dropdown = None,
			KeyCode::Up => {
				dropdown.index = dropdown.index.saturating_sub(1);
				self.dropdown = Some(dropdown);
			}
			KeyCode::Down => {
				dropdown.index = (dropdown.index + 1).min(dropdown.len() - 1);
				self.dropdown = Some(dropdown);
			}
			KeyCode::Enter | KeyCode::Char(' ') => {
				match dropdown.field {
					FilterField::Bathrooms => {
						self.criteria.bathrooms = Bathrooms::ALL[dropdown.index];
					}
					_ => self.criteria.bedrooms = Bedrooms::ALL[dropdown.index],
				}
				self.dropdown = None;
			}
			_ => {}
		}
	}

	fn open_dropdown(&mut self, field: FilterField) {
		let index = match field {
			FilterField::Bathrooms => Bathrooms::ALL
				.iter()
				.position(|rooms| *rooms == self.criteria.bathrooms),
			_ => Bedrooms::ALL
				.iter()
				.position(|rooms| *rooms == self.criteria.bedrooms),
		}
		.unwrap_or(0);
		self.focus = field;
		self.dropdown = Some(Dropdown { field, index });
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) -> FilterOutcome {
		let (column, row) = (mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(hit) = self.hits.at(column, row) {
					return self.activate(hit);
				}
				self.dropdown = None;
				let track = self
					.slider_area
					.filter(|area| point_in_rect(column, row, *area));
				if let Some(area) = track {
					let pointer = f32::from(column - area.x);
					if let Some(thumb) = self.slider.hit_test(pointer) {
						self.slider.press(thumb, pointer);
						self.focus = match thumb {
							Thumb::Low => FilterField::PriceLow,
							Thumb::High => FilterField::PriceHigh,
						};
					}
				}
			}
			MouseEventKind::Drag(MouseButton::Left) => {
				if let (Some(area), Some(_)) = (self.slider_area, self.slider.active_drag()) {
					let pointer = f32::from(column) - f32::from(area.x);
					if let Some(selection) = self.slider.drag_to(pointer) {
						self.store_price(selection);
					}
				}
			}
			MouseEventKind::Up(MouseButton::Left) => {
				self.slider.release();
			}
			_ => {}
		}
		FilterOutcome::Stay
	}

	fn activate(&mut self, hit: FilterHit) -> FilterOutcome {
		if !matches!(hit, FilterHit::Bedrooms | FilterHit::Bathrooms) {
			self.dropdown = None;
		}
		match hit {
			FilterHit::ListingType(kind) => {
				self.focus = FilterField::ListingType;
				self.listing_cursor = index_of(&ListingType::ALL, kind);
				self.criteria.listing_type = kind;
			}
			FilterHit::City => self.focus = FilterField::City,
			FilterHit::Country => self.focus = FilterField::Country,
			FilterHit::Category(category) => {
				self.focus = FilterField::Category;
				self.category_cursor = index_of(&Category::ALL, category);
				self.criteria.toggle_category(category);
			}
			FilterHit::Facility(facility) => {
				self.focus = FilterField::Facility;
				self.facility_cursor = index_of(&Facility::ALL, facility);
				self.criteria.toggle_facility(facility);
			}
			FilterHit::Bedrooms | FilterHit::Bathrooms => {
				let field = if hit == FilterHit::Bedrooms {
					FilterField::Bedrooms
				} else {
					FilterField::Bathrooms
				};
				if self.dropdown.is_some_and(|open| open.field == field) {
					self.dropdown = None;
				} else {
					self.open_dropdown(field);
				}
			}
			FilterHit::Bedroom(rooms) => self.criteria.bedrooms = rooms,
			FilterHit::Bathroom(rooms) => self.criteria.bathrooms = rooms,
			FilterHit::ClearAll => self.clear_all(),
			FilterHit::Apply => return FilterOutcome::Apply,
			FilterHit::Cancel => return FilterOutcome::Close,
		}
		FilterOutcome::Stay
	}

	fn store_price(&mut self, selection: Selection) {
		let low = selection.low.round() as u32;
		let high = selection.high.round() as u32;
		if let Err(error) = self.criteria.set_price(low, high) {
			log::warn!("{error}");
		}
	}

	pub(crate) fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		self.hits.clear();
		let popup = centered(area, MODAL_WIDTH, MODAL_HEIGHT);
		frame.render_widget(Clear, popup);
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_style())
			.title(Span::styled(" Filters ", theme.header));
		let inner = block.inner(popup).inner(Margin::new(1, 0));
		frame.render_widget(block, popup);

		let [
			top,
			location_labels,
			location_inputs,
			category_label,
			categories,
			price_label,
			track,
			room_labels,
			rooms,
			facility_label,
			facilities,
			_,
			actions,
		] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(2),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(2),
			Constraint::Min(0),
			Constraint::Length(1),
		])
		.areas(inner);

		self.render_listing_types(frame, top, theme);
		self.render_location(frame, location_labels, location_inputs, theme);

		self.label(frame, category_label, "Select Category", FilterField::Category, theme);
		let focused = self.focus == FilterField::Category;
		let chips: Vec<Chip<'_>> = Category::ALL
			.iter()
			.enumerate()
			.map(|(index, category)| {
				Chip::new(category.label(), self.criteria.has_category(*category))
					.with_cursor(focused && index == self.category_cursor)
			})
			.collect();
		let rects = render_chips(frame, categories, &chips, theme);
		for (rect, category) in rects.into_iter().zip(Category::ALL) {
			self.hits.push(rect, FilterHit::Category(category));
		}

		self.render_price(frame, price_label, track, theme);
		let (bedrooms, bathrooms) = self.render_rooms(frame, room_labels, rooms, theme);

		self.label(frame, facility_label, "Facility Place", FilterField::Facility, theme);
		let focused = self.focus == FilterField::Facility;
		let chips: Vec<Chip<'_>> = Facility::ALL
			.iter()
			.enumerate()
			.map(|(index, facility)| {
				Chip::new(facility.label(), self.criteria.has_facility(*facility))
					.with_cursor(focused && index == self.facility_cursor)
			})
			.collect();
		let rects = render_chips(frame, facilities, &chips, theme);
		for (rect, facility) in rects.into_iter().zip(Facility::ALL) {
			self.hits.push(rect, FilterHit::Facility(facility));
		}

		let apply = render_button(
			frame,
			actions,
			"Apply Filters",
			true,
			self.focus == FilterField::Apply,
			theme,
		);
		self.hits.push(apply, FilterHit::Apply);
		let cancel_area = Rect {
			x: apply.right().saturating_add(2),
			width: actions.right().saturating_sub(apply.right().saturating_add(2)),
			..actions
		};
		let cancel = render_button(frame, cancel_area, "Cancel", false, false, theme);
		self.hits.push(cancel, FilterHit::Cancel);

		// Drawn last so the open list sits on top of the rows below it.
		match self.dropdown.map(|open| open.field) {
			Some(FilterField::Bedrooms) => self.render_dropdown(frame, bedrooms, popup, theme),
			Some(FilterField::Bathrooms) => self.render_dropdown(frame, bathrooms, popup, theme),
			_ => {}
		}
	}

	fn label(&self, frame: &mut Frame, area: Rect, text: &str, field: FilterField, theme: &Theme) {
		let style = if self.focus == field {
			theme.accent
		} else {
			theme.header
		};
		frame.render_widget(Paragraph::new(Span::styled(text.to_string(), style)), area);
	}

	fn render_listing_types(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let clear_width = 13.min(area.width);
		let [types, clear] =
			Layout::horizontal([Constraint::Fill(1), Constraint::Length(clear_width)]).areas(area);

		let focused = self.focus == FilterField::ListingType;
		let chips: Vec<Chip<'_>> = ListingType::ALL
			.iter()
			.enumerate()
			.map(|(index, kind)| {
				Chip::new(kind.label(), *kind == self.criteria.listing_type)
					.with_cursor(focused && index == self.listing_cursor)
			})
			.collect();
		let rects = render_chips(frame, types, &chips, theme);
		for (rect, kind) in rects.into_iter().zip(ListingType::ALL) {
			self.hits.push(rect, FilterHit::ListingType(kind));
		}

		let rect = render_button(
			frame,
			clear,
			"Clear All",
			false,
			self.focus == FilterField::ClearAll,
			theme,
		);
		self.hits.push(rect, FilterHit::ClearAll);
	}

	fn render_location(&mut self, frame: &mut Frame, labels: Rect, inputs: Rect, theme: &Theme) {
		let columns = || Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).spacing(2);
		let [city_label, country_label] = columns().areas(labels);
		let [city, country] = columns().areas(inputs);

		self.label(frame, city_label, "City", FilterField::City, theme);
		self.label(frame, country_label, "Country", FilterField::Country, theme);
		self.city
			.render(frame, city, self.focus == FilterField::City, theme);
		self.country
			.render(frame, country, self.focus == FilterField::Country, theme);
		self.hits.push(city, FilterHit::City);
		self.hits.push(country, FilterHit::Country);
	}

	fn render_price(&mut self, frame: &mut Frame, label: Rect, track: Rect, theme: &Theme) {
		let focused = self.focus.thumb();
		let style = if focused.is_some() {
			theme.accent
		} else {
			theme.header
		};
		frame.render_widget(Paragraph::new(Span::styled("Price Range", style)), label);
		frame.render_widget(
			Paragraph::new(Span::styled(self.criteria.price().to_string(), theme.muted))
				.alignment(Alignment::Right),
			label,
		);

		let length = track_length_for(track);
		if self.slider.track_length() != Some(length) {
			self.slider.set_track_length(length);
		}
		render_range(frame, track, &self.slider, focused, theme);
		self.slider_area = Some(track);
	}

	/// Draw both room pickers and return their value rects.
	fn render_rooms(&mut self, frame: &mut Frame, labels: Rect, values: Rect, theme: &Theme) -> (Rect, Rect) {
		let columns = || Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).spacing(2);
		let [bed_label, bath_label] = columns().areas(labels);
		let [bedrooms, bathrooms] = columns().areas(values);

		self.label(frame, bed_label, "Bed Room", FilterField::Bedrooms, theme);
		self.label(frame, bath_label, "Bathrooms", FilterField::Bathrooms, theme);

		for (area, text, field, hit) in [
			(
				bedrooms,
				self.criteria.bedrooms.label(),
				FilterField::Bedrooms,
				FilterHit::Bedrooms,
			),
			(
				bathrooms,
				self.criteria.bathrooms.label(),
				FilterField::Bathrooms,
				FilterHit::Bathrooms,
			),
		] {
			let mut style = theme.prompt;
			if self.focus == field {
				style = style.add_modifier(Modifier::REVERSED);
			}
			frame.render_widget(Paragraph::new(Span::styled(format!("{text} ▾"), style)), area);
			self.hits.push(area, hit);
		}
		(bedrooms, bathrooms)
	}

	fn render_dropdown(&mut self, frame: &mut Frame, anchor: Rect, popup: Rect, theme: &Theme) {
		let Some(dropdown) = self.dropdown else {
			return;
		};
		let options: Vec<(&'static str, FilterHit)> = match dropdown.field {
			FilterField::Bathrooms => Bathrooms::ALL
				.iter()
				.map(|rooms| (rooms.label(), FilterHit::Bathroom(*rooms)))
				.collect(),
			_ => Bedrooms::ALL
				.iter()
				.map(|rooms| (rooms.label(), FilterHit::Bedroom(*rooms)))
				.collect(),
		};
		let top = anchor.y.saturating_add(1);
		let room = popup.bottom().saturating_sub(top);
		let height = u16::try_from(options.len()).unwrap_or(u16::MAX).min(room);
		let list = Rect {
			y: top,
			height,
			..anchor
		};
		frame.render_widget(Clear, list);

		for (offset, (label, hit)) in (0..height).zip(options) {
			let row = Rect {
				y: top + offset,
				height: 1,
				..anchor
			};
			let style = if usize::from(offset) == dropdown.index {
				theme.row_highlight
			} else {
				theme.muted
			};
			frame.render_widget(Paragraph::new(Line::styled(format!(" {label}"), style)), row);
			self.hits.push(row, hit);
		}
	}
}

impl App {
	pub(crate) fn handle_filters_key(&mut self, key: KeyEvent) {
		let Some(modal) = self.filters.as_mut() else {
			return;
		};
		let outcome = modal.handle_key(key);
		self.finish_filters(outcome);
	}

	pub(crate) fn handle_filters_mouse(&mut self, mouse: MouseEvent) {
		let Some(modal) = self.filters.as_mut() else {
			return;
		};
		let outcome = modal.handle_mouse(mouse);
		self.finish_filters(outcome);
	}

	fn finish_filters(&mut self, outcome: FilterOutcome) {
		match outcome {
			FilterOutcome::Stay => {}
			FilterOutcome::Close => {
				self.filters = None;
				log::debug!("filters dismissed");
			}
			FilterOutcome::Apply => {
				if let Some(modal) = self.filters.take() {
					modal.into_criteria().apply(&mut self.query);
					self.refresh_feed();
				}
			}
		}
	}
}

fn price_selection(criteria: &FilterCriteria) -> Selection {
	let price = criteria.price();
	Selection::new(price.low() as f32, price.high() as f32)
}

fn shift(index: usize, step: i32, len: usize) -> usize {
	index
		.saturating_add_signed(step as isize)
		.min(len.saturating_sub(1))
}

fn index_of<T: PartialEq>(all: &[T], item: T) -> usize {
	all.iter().position(|candidate| *candidate == item).unwrap_or(0)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}

#[cfg(test)]
mod tests {
	use hearth_listings::Catalog;
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::crossterm::event::KeyModifiers;

	use super::*;
	use crate::app::Screen;
	use crate::config::TuiConfig;
	use crate::test_support::buffer_to_string;

	fn app_with_filters() -> App {
		let mut app = App::new(Catalog::mock(), TuiConfig::default());
		app.handle_key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL));
		assert_eq!(app.screen(), Screen::Filters);
		app
	}

	fn press(app: &mut App, code: KeyCode) {
		app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
	}

	fn draw(app: &mut App) -> String {
		let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("terminal");
		terminal.draw(|frame| app.draw(frame)).expect("draw");
		buffer_to_string(terminal.backend().buffer())
	}

	fn modal(app: &mut App) -> &mut FilterModal {
		app.filters.as_mut().expect("modal open")
	}

	fn click(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
		app.handle_mouse(MouseEvent {
			kind,
			column,
			row,
			modifiers: KeyModifiers::NONE,
		});
	}

	#[test]
	fn opens_on_default_criteria() {
		let mut app = app_with_filters();
		assert_eq!(modal(&mut app).criteria, FilterCriteria::default());
	}

	#[test]
	fn modal_lists_every_section() {
		let mut app = app_with_filters();
		let screen = draw(&mut app);
		for text in [
			"Filters",
			"Clear All",
			"For Rent",
			"City",
			"New York",
			"United States",
			"Select Category",
			"Price Range",
			"$250 - $5000",
			"3 Rooms",
			"2 Bathrooms",
			"Facility Place",
			"Free Wifi",
			"Apply Filters",
		] {
			assert!(screen.contains(text), "missing {text:?}");
		}
	}

	#[test]
	fn escape_discards_changes() {
		let mut app = app_with_filters();
		modal(&mut app).clear_all();
		press(&mut app, KeyCode::Esc);
		assert_eq!(app.screen(), Screen::Home);
		assert_eq!(app.query.criteria, None);
		assert_eq!(app.feed.len(), 9);
	}

	#[test]
	fn clear_all_then_apply_narrows_the_feed() {
		let mut app = app_with_filters();
		modal(&mut app).focus = FilterField::ClearAll;
		press(&mut app, KeyCode::Enter);
		press(&mut app, KeyCode::Tab);
		assert_eq!(modal(&mut app).focus, FilterField::Apply);
		press(&mut app, KeyCode::Enter);

		assert_eq!(app.screen(), Screen::Home);
		assert_eq!(app.query.criteria, Some(FilterCriteria::cleared()));
		assert_eq!(app.selected_property(), Some(8));
		assert_eq!(app.feed.len(), 1);
	}

	#[test]
	fn tab_wraps_around_the_fields() {
		let mut app = app_with_filters();
		press(&mut app, KeyCode::BackTab);
		assert_eq!(modal(&mut app).focus, FilterField::Apply);
		press(&mut app, KeyCode::Tab);
		assert_eq!(modal(&mut app).focus, FilterField::ListingType);
	}

	#[test]
	fn typing_edits_the_city() {
		let mut app = app_with_filters();
		press(&mut app, KeyCode::Tab);
		press(&mut app, KeyCode::Char('!'));
		assert_eq!(modal(&mut app).criteria.city, "New York!");
	}

	#[test]
	fn arrow_keys_nudge_the_focused_handle() {
		let mut app = app_with_filters();
		draw(&mut app);
		modal(&mut app).focus = FilterField::PriceHigh;
		press(&mut app, KeyCode::Left);
		press(&mut app, KeyCode::Left);
		let price = modal(&mut app).criteria.price();
		assert_eq!((price.low(), price.high()), (250, 4900));

		press(&mut app, KeyCode::Char(' '));
		assert_eq!(modal(&mut app).focus, FilterField::PriceLow);
		press(&mut app, KeyCode::Right);
		assert_eq!(modal(&mut app).criteria.price().low(), 300);
	}

	#[test]
	fn dragging_the_low_handle_moves_the_price() {
		let mut app = app_with_filters();
		draw(&mut app);
		let track = modal(&mut app).slider_area.expect("slider drawn");
		click(&mut app, MouseEventKind::Down(MouseButton::Left), track.x, track.y);
		assert!(modal(&mut app).slider.active_drag().is_some());
		click(
			&mut app,
			MouseEventKind::Drag(MouseButton::Left),
			track.x + track.width / 2,
			track.y,
		);
		click(&mut app, MouseEventKind::Up(MouseButton::Left), track.x, track.y);

		let price = modal(&mut app).criteria.price();
		assert!(price.low() > 2000 && price.low() < 3000, "{price}");
		assert_eq!(price.low() % 50, 0);
		assert_eq!(price.high(), 5000);
		assert!(modal(&mut app).slider.active_drag().is_none());
	}

	#[test]
	fn clear_all_reseats_a_dragged_handle() {
		let mut app = app_with_filters();
		draw(&mut app);
		let track = modal(&mut app).slider_area.expect("slider drawn");
		click(&mut app, MouseEventKind::Down(MouseButton::Left), track.x, track.y);
		click(&mut app, MouseEventKind::Drag(MouseButton::Left), track.x + 5, track.y);
		assert!(modal(&mut app).slider.position(Thumb::Low) > 0.0);

		modal(&mut app).clear_all();
		let slider = &modal(&mut app).slider;
		assert_eq!(slider.position(Thumb::Low), 0.0);
		assert_eq!(slider.position(Thumb::High), slider.pixel_for(1000.0));
		draw(&mut app);
		assert_eq!(modal(&mut app).slider.position(Thumb::Low), 0.0);
		assert_eq!(modal(&mut app).criteria.price().low(), 250);
	}

	#[test]
	fn clicking_chips_toggles_categories() {
		let mut app = app_with_filters();
		draw(&mut app);
		let villa = modal(&mut app)
			.hits
			.area_of(FilterHit::Category(Category::Villa))
			.expect("villa chip drawn");
		click(&mut app, MouseEventKind::Down(MouseButton::Left), villa.x, villa.y);
		assert!(modal(&mut app).criteria.has_category(Category::Villa));
		assert_eq!(modal(&mut app).focus, FilterField::Category);
	}

	#[test]
	fn bedroom_dropdown_picks_with_keys() {
		let mut app = app_with_filters();
		modal(&mut app).focus = FilterField::Bedrooms;
		press(&mut app, KeyCode::Enter);
		let screen = draw(&mut app);
		assert!(screen.contains("5+ Rooms"));

		press(&mut app, KeyCode::Down);
		press(&mut app, KeyCode::Enter);
		assert_eq!(modal(&mut app).criteria.bedrooms, Bedrooms::Four);
		assert!(!draw(&mut app).contains("5+ Rooms"));
	}

	#[test]
	fn bathroom_dropdown_picks_with_the_mouse() {
		let mut app = app_with_filters();
		draw(&mut app);
		let picker = modal(&mut app)
			.hits
			.area_of(FilterHit::Bathrooms)
			.expect("picker drawn");
		click(&mut app, MouseEventKind::Down(MouseButton::Left), picker.x, picker.y);
		draw(&mut app);
		let option = modal(&mut app)
			.hits
			.area_of(FilterHit::Bathroom(Bathrooms::FourPlus))
			.expect("option drawn");
		click(&mut app, MouseEventKind::Down(MouseButton::Left), option.x, option.y);
		assert_eq!(modal(&mut app).criteria.bathrooms, Bathrooms::FourPlus);
	}
}
