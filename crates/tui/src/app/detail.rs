//! Property detail screen: photo, swipe panel, price bar and contact form.

use std::time::Duration;

use hearth_listings::{Property, PropertyId};
use hearth_widgets::{PanelGeometry, SpringAnimation, SpringSpec, SwipePanel};
use ratatui::Frame;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::App;
use crate::components::{Chip, HitMap, point_in_rect, render_button, render_chips};
use crate::config::PanelConfig;
use crate::input::TextField;
use crate::style::Theme;

const PRICE_BAR_HEIGHT: u16 = 3;
const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;
/// Rows below its resting place the toast slides in from.
const TOAST_DROP: f32 = 4.0;
const TOAST_VISIBLE: Duration = Duration::from_secs(3);
const TOAST_TENSION: f32 = 50.0;
const TOAST_FRICTION: f32 = 7.0;

const FEATURES: &str = "• Modern kitchen appliances\n\
	• High ceilings\n\
	• Hardwood floors\n\
	• Energy-efficient windows\n\
	• Central heating and cooling\n\
	• In-unit washer and dryer\n\
	• Balcony with city views";
const REVIEWS: &str = "No reviews available yet.";
const DIRECTIONS: &str = "Located in the heart of downtown, easily accessible by subway lines \
	A, B, and C. Walking distance to Central Park and major shopping centers.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum DetailTab {
	#[default]
	Overview,
	Features,
	Reviews,
	Directions,
}

impl DetailTab {
	const ALL: [Self; 4] = [
		Self::Overview,
		Self::Features,
		Self::Reviews,
		Self::Directions,
	];

	fn label(self) -> &'static str {
		match self {
			Self::Overview => "Overview",
			Self::Features => "Features",
			Self::Reviews => "Reviews",
			Self::Directions => "Directions",
		}
	}

	fn index(self) -> usize {
		Self::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
	}

	fn next(self) -> Self {
		Self::ALL[(self.index() + 1) % Self::ALL.len()]
	}

	fn previous(self) -> Self {
		let len = Self::ALL.len();
		Self::ALL[(self.index() + len - 1) % len]
	}

	fn body(self, property: &Property) -> &str {
		match self {
			Self::Overview => &property.description,
			Self::Features => FEATURES,
			Self::Reviews => REVIEWS,
			Self::Directions => DIRECTIONS,
		}
	}
}

/// Contact form inputs plus the send button, in `Tab` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContactField {
	FirstName,
	LastName,
	Phone,
	Email,
	Message,
	Send,
}

impl ContactField {
	const ORDER: [Self; 6] = [
		Self::FirstName,
		Self::LastName,
		Self::Phone,
		Self::Email,
		Self::Message,
		Self::Send,
	];

	fn next(self) -> Self {
		let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
		Self::ORDER[(index + 1) % Self::ORDER.len()]
	}

	fn previous(self) -> Self {
		let len = Self::ORDER.len();
		let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
		Self::ORDER[(index + len - 1) % len]
	}

	/// Slot in [`ContactForm::fields`]; the send button has none.
	fn slot(self) -> Option<usize> {
		match self {
			Self::FirstName => Some(0),
			Self::LastName => Some(1),
			Self::Phone => Some(2),
			Self::Email => Some(3),
			Self::Message => Some(4),
			Self::Send => None,
		}
	}

	fn placeholder(self) -> &'static str {
		match self {
			Self::FirstName => "First Name",
			Self::LastName => "Sec Name",
			Self::Phone => "You Phone Number",
			Self::Email => "You Email",
			Self::Message => "Message",
			Self::Send => "Send Inquiry",
		}
	}
}

/// What "Send Inquiry" submits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Inquiry {
	pub(crate) first_name: String,
	pub(crate) last_name: String,
	pub(crate) phone: String,
	pub(crate) email: String,
	pub(crate) message: String,
}

pub(crate) struct ContactForm {
	fields: [TextField; 5],
	pub(crate) focus: ContactField,
}

impl ContactForm {
	fn new() -> Self {
		let field = |kind: ContactField| TextField::default().with_placeholder(kind.placeholder());
		Self {
			fields: [
				field(ContactField::FirstName),
				field(ContactField::LastName),
				field(ContactField::Phone),
				field(ContactField::Email),
				field(ContactField::Message).multiline(),
			],
			focus: ContactField::FirstName,
		}
	}

	fn field_mut(&mut self, kind: ContactField) -> Option<&mut TextField> {
		kind.slot().map(|slot| &mut self.fields[slot])
	}

	pub(crate) fn inquiry(&self) -> Inquiry {
		let [first_name, last_name, phone, email, message] = &self.fields;
		Inquiry {
			first_name: first_name.text(),
			last_name: last_name.text(),
			phone: phone.text(),
			email: email.text(),
			message: message.text(),
		}
	}

	fn clear(&mut self) {
		for field in &mut self.fields {
			field.clear();
		}
		self.focus = ContactField::FirstName;
	}
}

/// Confirmation banner that springs up from below and hides on a timer.
#[derive(Debug, Clone)]
pub(crate) struct Toast {
	slide: SpringAnimation,
	remaining: Option<Duration>,
}

impl Toast {
	fn new() -> Self {
		Self {
			slide: SpringAnimation::new(TOAST_DROP),
			remaining: None,
		}
	}

	fn show(&mut self) {
		self.slide.snap_to(TOAST_DROP);
		self.slide.start(
			0.0,
			SpringSpec::from_tension_friction(TOAST_TENSION, TOAST_FRICTION),
		);
		self.remaining = Some(TOAST_VISIBLE);
	}

	pub(crate) fn is_visible(&self) -> bool {
		self.remaining.is_some()
	}

	/// Rows below the resting position. Overshoot above it is not drawn.
	pub(crate) fn offset(&self) -> f32 {
		self.slide.current_value().max(0.0)
	}

	fn tick(&mut self, dt: Duration) {
		let Some(remaining) = self.remaining else {
			return;
		};
		self.slide.advance(dt);
		self.remaining = remaining.checked_sub(dt).filter(|left| !left.is_zero());
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DetailHit {
	Back,
	Tab(DetailTab),
	Contact,
	Field(ContactField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DetailOutcome {
	Stay,
	Back,
}

pub(crate) struct DetailView {
	id: PropertyId,
	config: PanelConfig,
	pub(crate) panel: SwipePanel,
	pub(crate) tab: DetailTab,
	pub(crate) form: ContactForm,
	pub(crate) form_open: bool,
	pub(crate) toast: Toast,
	pub(crate) hits: HitMap<DetailHit>,
	/// Panel rect as last drawn; drags start here.
	pub(crate) panel_area: Option<Rect>,
}

impl DetailView {
	pub(crate) fn new(id: PropertyId, config: &PanelConfig) -> Self {
		let panel = SwipePanel::new(PanelGeometry::default())
			.with_threshold(config.swipe_threshold)
			.with_expand_spring(config.expand_spring());
		Self {
			id,
			config: *config,
			panel,
			tab: DetailTab::default(),
			form: ContactForm::new(),
			form_open: false,
			toast: Toast::new(),
			hits: HitMap::default(),
			panel_area: None,
		}
	}

	pub(crate) fn id(&self) -> PropertyId {
		self.id
	}

	pub(crate) fn tick(&mut self, dt: Duration) {
		self.panel.tick(dt);
		self.toast.tick(dt);
	}

	fn open_form(&mut self) {
		self.form_open = true;
		self.panel.reset();
	}

	/// Log the inquiry, reset the form and confirm with the toast.
	pub(crate) fn send_inquiry(&mut self) -> Inquiry {
		let inquiry = self.form.inquiry();
		log::info!("sending inquiry for property {}: {inquiry:?}", self.id);
		self.form.clear();
		self.form_open = false;
		self.toast.show();
		inquiry
	}

	/// `found` is false when the listing id did not resolve.
	pub(crate) fn handle_key(&mut self, key: KeyEvent, found: bool) -> DetailOutcome {
		if !found {
			return match key.code {
				KeyCode::Esc | KeyCode::Enter => DetailOutcome::Back,
				_ => DetailOutcome::Stay,
			};
		}
		if self.form_open {
			self.handle_form_key(key);
			return DetailOutcome::Stay;
		}

		let swipe = self.panel.threshold() + 1.0;
		match key.code {
			KeyCode::Esc => return DetailOutcome::Back,
			KeyCode::Up => {
				self.panel.release_with(-swipe);
			}
			KeyCode::Down => {
				self.panel.release_with(swipe);
			}
			KeyCode::Right | KeyCode::Tab => self.tab = self.tab.next(),
			KeyCode::Left | KeyCode::BackTab => self.tab = self.tab.previous(),
			KeyCode::Enter | KeyCode::Char('c') => self.open_form(),
			_ => {}
		}
		DetailOutcome::Stay
	}

	fn handle_form_key(&mut self, key: KeyEvent) {
		let focus = self.form.focus;
		match key.code {
			KeyCode::Esc => self.form_open = false,
			KeyCode::Tab => self.form.focus = focus.next(),
			KeyCode::BackTab => self.form.focus = focus.previous(),
			KeyCode::Enter if focus == ContactField::Send => {
				self.send_inquiry();
			}
			KeyCode::Enter if focus != ContactField::Message => self.form.focus = focus.next(),
			_ => {
				if let Some(field) = self.form.field_mut(focus) {
					field.input(key);
				}
			}
		}
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) -> DetailOutcome {
		let (column, row) = (mouse.column, mouse.row);
		let pointer = f32::from(row);
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(hit) = self.hits.at(column, row) {
					return self.activate(hit);
				}
				let on_panel = self
					.panel_area
					.is_some_and(|area| point_in_rect(column, row, area));
				if on_panel && !self.form_open {
					self.panel.begin_drag(pointer);
				}
			}
			MouseEventKind::Drag(MouseButton::Left) if self.panel.is_dragging() => {
				self.panel.drag_to(pointer);
			}
			MouseEventKind::Up(MouseButton::Left) if self.panel.is_dragging() => {
				self.panel.release(pointer);
			}
			_ => {}
		}
		DetailOutcome::Stay
	}

	fn activate(&mut self, hit: DetailHit) -> DetailOutcome {
		match hit {
			DetailHit::Back if self.form_open => self.form_open = false,
			DetailHit::Back => return DetailOutcome::Back,
			DetailHit::Tab(tab) => self.tab = tab,
			DetailHit::Contact => self.open_form(),
			DetailHit::Field(ContactField::Send) => {
				self.send_inquiry();
			}
			DetailHit::Field(field) => self.form.focus = field,
		}
		DetailOutcome::Stay
	}

	pub(crate) fn render(
		&mut self,
		frame: &mut Frame,
		area: Rect,
		property: Option<&Property>,
		favourite: bool,
		theme: &Theme,
	) {
		self.hits.clear();
		self.panel_area = None;
		let Some(property) = property else {
			self.render_not_found(frame, area, theme);
			return;
		};
		if self.form_open {
			self.render_form(frame, area, property, favourite, theme);
		} else {
			self.render_listing(frame, area, property, favourite, theme);
		}
		self.render_toast(frame, area, theme);
	}

	fn render_listing(
		&mut self,
		frame: &mut Frame,
		area: Rect,
		property: &Property,
		favourite: bool,
		theme: &Theme,
	) {
		let [content, bar] =
			Layout::vertical([Constraint::Min(0), Constraint::Length(PRICE_BAR_HEIGHT)]).areas(area);
		let height = f32::from(content.height);
		match PanelGeometry::from_viewport(
			height,
			self.config.collapsed_ratio,
			self.config.expanded_ratio,
		) {
			Ok(geometry) => self.panel.set_geometry(geometry),
			Err(error) => log::debug!("keeping panel geometry: {error}"),
		}

		let image_rows = rows(self.panel.image_height(
			height * self.config.image_min_ratio,
			height * self.config.image_max_ratio,
		))
		.min(content.height);
		let image = Rect {
			height: image_rows,
			..content
		};
		self.render_image(frame, image, property, favourite, theme);

		let panel_rows = rows(self.panel.visible_height()).min(content.height);
		let panel = Rect {
			y: content.bottom() - panel_rows,
			height: panel_rows,
			..content
		};
		self.render_panel(frame, panel, property, theme);
		self.render_price_bar(frame, bar, property, theme);
	}

	fn render_image(
		&mut self,
		frame: &mut Frame,
		area: Rect,
		property: &Property,
		favourite: bool,
		theme: &Theme,
	) {
		if area.height == 0 {
			return;
		}
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_style())
			.title(Span::styled(format!(" {} ", property.kind), theme.muted));
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let back = render_button(frame, inner, "‹ Back", false, false, theme);
		self.hits.push(back, DetailHit::Back);
		if favourite {
			frame.render_widget(
				Paragraph::new(Span::styled("♥", theme.highlight)).alignment(Alignment::Right),
				Rect { height: 1.min(inner.height), ..inner },
			);
		}

		if inner.height > 2 {
			let caption = Rect {
				y: inner.y + inner.height / 2,
				height: inner.height - inner.height / 2,
				..inner
			};
			frame.render_widget(
				Paragraph::new(Line::styled(property.image.as_str(), theme.muted))
					.alignment(Alignment::Center)
					.wrap(Wrap { trim: true }),
				caption,
			);
		}
	}

	fn render_panel(&mut self, frame: &mut Frame, area: Rect, property: &Property, theme: &Theme) {
		if area.height == 0 {
			return;
		}
		self.panel_area = Some(area);
		frame.render_widget(Clear, area);
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_style())
			.title(Line::styled("━━━━", theme.muted).centered());
		let inner = block.inner(area).inner(Margin::new(1, 0));
		frame.render_widget(block, area);

		let line = |index: u16| {
			(index < inner.height).then_some(Rect {
				y: inner.y + index,
				height: 1,
				..inner
			})
		};

		if let Some(row) = line(0) {
			frame.render_widget(
				Paragraph::new(Span::styled(format!("⌖ {}", property.location), theme.muted)),
				row,
			);
			frame.render_widget(
				Paragraph::new(Line::from(vec![
					Span::styled(format!("{:.1} ", property.rating), theme.header),
					Span::styled("★", theme.highlight),
				]))
				.alignment(Alignment::Right),
				row,
			);
		}
		if let Some(row) = line(1) {
			let title = Span::styled(property.title.as_str(), theme.header.add_modifier(Modifier::BOLD));
			frame.render_widget(Paragraph::new(title), row);
		}
		if let Some(row) = line(2) {
			frame.render_widget(Paragraph::new(property.stats_line()), row);
		}
		if let Some(row) = line(3) {
			let chips: Vec<Chip<'_>> = DetailTab::ALL
				.iter()
				.map(|tab| Chip::new(tab.label(), *tab == self.tab))
				.collect();
			let rects = render_chips(frame, row, &chips, theme);
			for (rect, tab) in rects.into_iter().zip(DetailTab::ALL) {
				self.hits.push(rect, DetailHit::Tab(tab));
			}
		}
		if let Some(row) = line(4) {
			frame.render_widget(
				Paragraph::new(Span::styled("Property Details", theme.header)),
				row,
			);
		}
		if inner.height > 5 {
			let body = Rect {
				y: inner.y + 5,
				height: inner.height - 5,
				..inner
			};
			frame.render_widget(
				Paragraph::new(self.tab.body(property))
					.style(theme.prompt)
					.wrap(Wrap { trim: true }),
				body,
			);
		}
	}

	fn render_price_bar(&mut self, frame: &mut Frame, area: Rect, property: &Property, theme: &Theme) {
		if area.height == 0 {
			return;
		}
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_style());
		let inner = block.inner(area).inner(Margin::new(1, 0));
		frame.render_widget(Clear, area);
		frame.render_widget(block, area);

		let price = Line::from(vec![
			Span::styled("Rent ", theme.muted),
			Span::styled(property.price_label(), theme.header.add_modifier(Modifier::BOLD)),
			Span::styled(" /Month", theme.muted),
		]);
		frame.render_widget(Paragraph::new(price), inner);

		let label = "Contact Agent";
		let width = u16::try_from(label.len() + 4).unwrap_or(u16::MAX);
		let button = Rect {
			x: inner.right().saturating_sub(width).max(inner.x),
			width: width.min(inner.width),
			..inner
		};
		let rect = render_button(frame, button, label, true, false, theme);
		self.hits.push(rect, DetailHit::Contact);
	}

	fn render_form(
		&mut self,
		frame: &mut Frame,
		area: Rect,
		property: &Property,
		favourite: bool,
		theme: &Theme,
	) {
		let [image, header, names, phone, email, message, send] = Layout::vertical([
			Constraint::Length(area.height / 5),
			Constraint::Length(4),
			Constraint::Length(3),
			Constraint::Length(3),
			Constraint::Length(3),
			Constraint::Min(3),
			Constraint::Length(1),
		])
		.areas(area);
		self.render_image(frame, image, property, favourite, theme);

		let header = header.inner(Margin::new(1, 0));
		let header_rows: [Rect; 4] = Layout::vertical([Constraint::Length(1); 4]).areas(header);
		let left = [
			Line::styled("Contact Agent", theme.header.add_modifier(Modifier::BOLD)),
			Line::styled(format!("⌖ {}", property.location), theme.muted),
			Line::styled(property.title.as_str(), theme.header),
			Line::raw(property.stats_line()),
		];
		let right = [
			Line::default(),
			Line::styled(property.price_label(), theme.header.add_modifier(Modifier::BOLD)),
			Line::styled("month", theme.muted),
			Line::default(),
		];
		for ((row, left), right) in header_rows.into_iter().zip(left).zip(right) {
			frame.render_widget(Paragraph::new(left), row);
			frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), row);
		}

		let [first, last] = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
			.spacing(1)
			.areas(names);
		for (rect, field) in [
			(first, ContactField::FirstName),
			(last, ContactField::LastName),
			(phone, ContactField::Phone),
			(email, ContactField::Email),
			(message, ContactField::Message),
		] {
			self.render_field(frame, rect, field, theme);
		}

		let focused = self.form.focus == ContactField::Send;
		let rect = render_button(frame, send, ContactField::Send.placeholder(), true, focused, theme);
		self.hits.push(rect, DetailHit::Field(ContactField::Send));
	}

	fn render_field(&mut self, frame: &mut Frame, area: Rect, kind: ContactField, theme: &Theme) {
		let focused = self.form.focus == kind;
		let border = if focused {
			theme.accent
		} else {
			theme.border_style()
		};
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(border);
		let inner = block.inner(area);
		frame.render_widget(block, area);
		if let Some(field) = self.form.field_mut(kind) {
			field.render(frame, inner, focused, theme);
		}
		self.hits.push(area, DetailHit::Field(kind));
	}

	fn render_toast(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		if !self.toast.is_visible() {
			return;
		}
		let width = TOAST_WIDTH.min(area.width);
		let rest = area
			.bottom()
			.saturating_sub(TOAST_HEIGHT + PRICE_BAR_HEIGHT + 1)
			.max(area.y);
		let toast = Rect {
			x: area.x + (area.width - width) / 2,
			y: rest.saturating_add(rows(self.toast.offset())),
			width,
			height: TOAST_HEIGHT,
		}
		.intersection(area);
		if toast.is_empty() {
			return;
		}

		frame.render_widget(Clear, toast);
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.accent);
		let text = vec![
			Line::styled("✓ Success!", theme.header.add_modifier(Modifier::BOLD)),
			Line::styled("Your inquiry has been sent to the agent", theme.muted),
		];
		frame.render_widget(
			Paragraph::new(text)
				.block(block)
				.alignment(Alignment::Center),
			toast,
		);
	}

	fn render_not_found(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		if area.height == 0 {
			return;
		}
		let middle = area.y + area.height / 2;
		frame.render_widget(
			Paragraph::new(Line::styled("Property not found", theme.empty_style()))
				.alignment(Alignment::Center),
			Rect {
				y: middle,
				height: 1,
				..area
			},
		);

		let label = "Go Back";
		let width = u16::try_from(label.len() + 4).unwrap_or(u16::MAX).min(area.width);
		let button = Rect {
			x: area.x + (area.width - width) / 2,
			y: (middle + 2).min(area.bottom().saturating_sub(1)),
			width,
			height: 1,
		};
		let rect = render_button(frame, button, label, true, false, theme);
		self.hits.push(rect, DetailHit::Back);
	}
}

/// Round a fractional height to whole rows.
fn rows(value: f32) -> u16 {
	value.round().clamp(0.0, f32::from(u16::MAX)) as u16
}

impl App {
	pub(crate) fn handle_detail_key(&mut self, key: KeyEvent) {
		let Some(detail) = self.detail.as_mut() else {
			return;
		};
		let id = detail.id();
		let found = self.catalog.get(id).is_ok();
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		if found && ctrl && key.code == KeyCode::Char('f') && !detail.form_open {
			self.toggle_favorite(id);
			return;
		}
		if detail.handle_key(key, found) == DetailOutcome::Back {
			self.close_detail();
		}
	}

	pub(crate) fn handle_detail_mouse(&mut self, mouse: MouseEvent) {
		let Some(detail) = self.detail.as_mut() else {
			return;
		};
		if detail.handle_mouse(mouse) == DetailOutcome::Back {
			self.close_detail();
		}
	}

	fn close_detail(&mut self) {
		if let Some(detail) = self.detail.take() {
			log::debug!("closed property {}", detail.id());
		}
	}

	pub(crate) fn render_detail(&mut self, frame: &mut Frame, area: Rect) {
		let Some(detail) = self.detail.as_mut() else {
			return;
		};
		let property = self.catalog.get(detail.id()).ok();
		let favourite = property.is_some_and(|property| self.favorites.contains(property.id));
		detail.render(frame, area, property, favourite, &self.style.theme);
	}
}
