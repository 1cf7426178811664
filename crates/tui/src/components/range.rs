//! Terminal rendering for [`RangeSlider`].
//!
//! One cell is one unit of track distance. The track spans the full width,
//! so handle positions run from `0` to `width - 1`.

use hearth_widgets::{RangeSlider, Thumb};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

const TRACK: &str = "─";
const FILLED: &str = "━";
const HANDLE: &str = "●";

/// Track length for a slider drawn into `area`.
#[must_use]
pub fn track_length_for(area: Rect) -> f32 {
	f32::from(area.width.saturating_sub(1))
}

/// Handle cell for a track position.
#[must_use]
pub fn handle_column(position: f32) -> u16 {
	let rounded = position.round().max(0.0);
	if rounded >= f32::from(u16::MAX) {
		u16::MAX
	} else {
		rounded as u16
	}
}

/// Draw the track in the first row of `area`. `focused` underlines that handle.
pub fn render_range(
	frame: &mut Frame,
	area: Rect,
	slider: &RangeSlider,
	focused: Option<Thumb>,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let low = handle_column(slider.position(Thumb::Low));
	let high = handle_column(slider.position(Thumb::High));
	let handle_style = |thumb: Thumb| {
		let style = theme.track_fill_style().add_modifier(Modifier::BOLD);
		if focused == Some(thumb) {
			style.add_modifier(Modifier::REVERSED)
		} else {
			style
		}
	};

	let spans: Vec<Span<'_>> = (0..area.width)
		.map(|column| {
			if column == high {
				Span::styled(HANDLE, handle_style(Thumb::High))
			} else if column == low {
				Span::styled(HANDLE, handle_style(Thumb::Low))
			} else if column > low && column < high {
				Span::styled(FILLED, theme.track_fill_style())
			} else {
				Span::styled(TRACK, theme.muted)
			}
		})
		.collect();
	let row = Rect {
		height: 1,
		..area
	};
	frame.render_widget(Paragraph::new(Line::from(spans)), row);
}

#[cfg(test)]
mod tests {
	use hearth_widgets::{RangeSpec, Selection};
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::test_support::buffer_to_string;

	fn draw(slider: &RangeSlider, width: u16) -> String {
		let mut terminal = Terminal::new(TestBackend::new(width, 1)).expect("terminal");
		terminal
			.draw(|frame| render_range(frame, frame.area(), slider, None, &Theme::default()))
			.expect("draw");
		buffer_to_string(terminal.backend().buffer())
	}

	#[test]
	fn handles_sit_on_selection() {
		let spec = RangeSpec::new(0.0, 100.0, 10.0).expect("spec");
		let mut slider = RangeSlider::new(spec, Selection::new(20.0, 80.0));
		slider.set_track_length(track_length_for(Rect::new(0, 0, 11, 1)));

		insta::assert_snapshot!(draw(&slider, 11), @"──●━━━━━●──");
	}

	#[test]
	fn full_range_puts_handles_on_the_ends() {
		let spec = RangeSpec::new(250.0, 5000.0, 50.0).expect("spec");
		let mut slider = RangeSlider::new(spec, Selection::new(250.0, 5000.0));
		slider.set_track_length(track_length_for(Rect::new(0, 0, 8, 1)));

		insta::assert_snapshot!(draw(&slider, 8), @"●━━━━━━●");
	}

	#[test]
	fn handle_column_rounds_and_clamps() {
		assert_eq!(handle_column(2.4), 2);
		assert_eq!(handle_column(2.6), 3);
		assert_eq!(handle_column(-3.0), 0);
	}
}
