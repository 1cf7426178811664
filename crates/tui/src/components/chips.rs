//! Pill-shaped toggles and buttons.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

const CHIP_GAP: u16 = 1;

#[derive(Debug, Clone, Copy)]
pub struct Chip<'a> {
	pub label: &'a str,
	pub selected: bool,
	/// Keyboard cursor is on this chip.
	pub cursor: bool,
}

impl<'a> Chip<'a> {
	#[must_use]
	pub fn new(label: &'a str, selected: bool) -> Self {
		Self {
			label,
			selected,
			cursor: false,
		}
	}

	#[must_use]
	pub fn with_cursor(mut self, cursor: bool) -> Self {
		self.cursor = cursor;
		self
	}

	fn width(&self) -> u16 {
		u16::try_from(self.label.width() + 2).unwrap_or(u16::MAX)
	}

	fn style(&self, theme: &Theme) -> Style {
		let style = if self.selected {
			theme.accent
		} else {
			theme.chip_style()
		};
		if self.cursor {
			style.add_modifier(Modifier::UNDERLINED)
		} else {
			style
		}
	}
}

/// Lay chips out left to right, wrapping onto following rows of `area`.
///
/// Returns one rect per chip; chips that do not fit get an empty rect.
pub fn render_chips(frame: &mut Frame, area: Rect, chips: &[Chip<'_>], theme: &Theme) -> Vec<Rect> {
	let mut x = area.x;
	let mut y = area.y;
	let right = area.x.saturating_add(area.width);
	let bottom = area.y.saturating_add(area.height);

	chips
		.iter()
		.map(|chip| {
			let width = chip.width();
			if x > area.x && x.saturating_add(width) > right {
				x = area.x;
				y = y.saturating_add(1);
			}
			if y >= bottom || width > area.width {
				return Rect::default();
			}
			let rect = Rect::new(x, y, width, 1);
			frame.render_widget(
				Paragraph::new(Span::styled(format!(" {} ", chip.label), chip.style(theme))),
				rect,
			);
			x = x.saturating_add(width + CHIP_GAP);
			rect
		})
		.collect()
}

/// Draw `[ label ]` and return its rect.
pub fn render_button(
	frame: &mut Frame,
	area: Rect,
	label: &str,
	primary: bool,
	focused: bool,
	theme: &Theme,
) -> Rect {
	let text = format!("[ {label} ]");
	let width = u16::try_from(text.width())
		.unwrap_or(u16::MAX)
		.min(area.width);
	let rect = Rect::new(area.x, area.y, width, 1.min(area.height));
	let mut style = if primary {
		theme.accent
	} else {
		theme.header
	};
	if focused {
		style = style.add_modifier(Modifier::REVERSED);
	}
	frame.render_widget(Paragraph::new(Span::styled(text, style)), rect);
	rect
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::test_support::buffer_to_string;

	#[test]
	fn chips_render_in_a_row_with_gaps() {
		let mut terminal = Terminal::new(TestBackend::new(16, 1)).expect("terminal");
		let mut rects = Vec::new();
		terminal
			.draw(|frame| {
				let chips = [Chip::new("All", false), Chip::new("Villa", true)];
				rects = render_chips(frame, frame.area(), &chips, &Theme::default());
			})
			.expect("draw");

		assert_eq!(buffer_to_string(terminal.backend().buffer()), " All   Villa");
		assert_eq!(rects, vec![Rect::new(0, 0, 5, 1), Rect::new(6, 0, 7, 1)]);
	}

	#[test]
	fn chips_wrap_onto_the_next_row() {
		let mut terminal = Terminal::new(TestBackend::new(10, 2)).expect("terminal");
		let mut rects = Vec::new();
		terminal
			.draw(|frame| {
				let chips = [
					Chip::new("Pool", false),
					Chip::new("Garden", false),
					Chip::new("Wifi", false),
				];
				rects = render_chips(frame, frame.area(), &chips, &Theme::default());
			})
			.expect("draw");

		assert_eq!(rects[0], Rect::new(0, 0, 6, 1));
		assert_eq!(rects[1], Rect::new(0, 1, 8, 1));
		assert_eq!(rects[2], Rect::default());
	}

	#[test]
	fn button_is_bracketed() {
		let mut terminal = Terminal::new(TestBackend::new(12, 1)).expect("terminal");
		terminal
			.draw(|frame| {
				render_button(frame, frame.area(), "Apply", true, false, &Theme::default());
			})
			.expect("draw");
		insta::assert_snapshot!(buffer_to_string(terminal.backend().buffer()), @"[ Apply ]");
	}
}
