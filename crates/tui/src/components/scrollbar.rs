//! Feed scrollbar: rendering, hit testing and thumb dragging.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Scrolling metrics for a viewport over `content_length` rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	pub content_length: usize,
	pub viewport_len: usize,
	pub max_scroll: usize,
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Empty metrics when either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}
		let viewport_len = viewport_height.min(content_length);
		Self {
			content_length,
			viewport_len,
			max_scroll: content_length - viewport_len,
			needs_scrollbar: content_length > viewport_len,
		}
	}
}

#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	area.width > 0
		&& area.height > 0
		&& column >= area.x
		&& column < area.x.saturating_add(area.width)
		&& row >= area.y
		&& row < area.y.saturating_add(area.height)
}

/// Draw a vertical scrollbar on the right edge of `area` and return its rect.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	state: &mut ScrollbarState,
	theme: &Theme,
) -> Rect {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(theme.border_style());
	let bar = Rect {
		x: area.x + area.width.saturating_sub(1),
		y: area.y,
		width: 1.min(area.width),
		height: area.height,
	};
	frame.render_stateful_widget(scrollbar, bar, state);
	bar
}

fn thumb_height(track: usize, viewport_len: usize, content_len: usize) -> usize {
	if track == 0 || content_len == 0 {
		return 0;
	}
	viewport_len
		.saturating_mul(track)
		.div_ceil(content_len)
		.clamp(1, track)
}

/// Translate a pointer row on the scrollbar into a scroll offset.
///
/// `anchor` remembers where inside the thumb the drag grabbed it, so the
/// thumb does not jump to the pointer on the first move.
pub fn drag_scroll(
	bar: Rect,
	row: u16,
	current: usize,
	metrics: ScrollMetrics,
	anchor: &mut Option<u16>,
) -> Option<usize> {
	if bar.height == 0 || metrics.content_length == 0 {
		return None;
	}
	let track = usize::from(bar.height);
	let thumb = thumb_height(track, metrics.viewport_len, metrics.content_length);
	let span = track.saturating_sub(thumb);
	if span == 0 || metrics.max_scroll == 0 {
		return Some(0);
	}

	let last_row = bar.y.saturating_add(bar.height).saturating_sub(1);
	let relative = usize::from(row.clamp(bar.y, last_row) - bar.y);
	let thumb_top = current.min(metrics.max_scroll) * span / metrics.max_scroll;
	let grab = match anchor {
		Some(grab) => usize::from(*grab),
		None => {
			let grab = relative.saturating_sub(thumb_top).min(thumb.saturating_sub(1));
			*anchor = u16::try_from(grab).ok();
			grab
		}
	};

	let top = relative.saturating_sub(grab).min(span);
	Some(metrics.max_scroll * top / span)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn metrics_only_scroll_when_overflowing() {
		assert_eq!(ScrollMetrics::compute(0, 10), ScrollMetrics::default());
		let fits = ScrollMetrics::compute(5, 10);
		assert!(!fits.needs_scrollbar);
		assert_eq!(fits.max_scroll, 0);

		let overflow = ScrollMetrics::compute(30, 10);
		assert!(overflow.needs_scrollbar);
		assert_eq!(overflow.max_scroll, 20);
	}

	#[test]
	fn point_in_rect_excludes_far_edges() {
		let area = Rect::new(2, 3, 4, 2);
		assert!(point_in_rect(2, 3, area));
		assert!(point_in_rect(5, 4, area));
		assert!(!point_in_rect(6, 4, area));
		assert!(!point_in_rect(5, 5, area));
		assert!(!point_in_rect(0, 0, Rect::default()));
	}

	#[test]
	fn dragging_thumb_to_bottom_reaches_max_scroll() {
		let bar = Rect::new(10, 0, 1, 10);
		let metrics = ScrollMetrics::compute(40, 10);
		let mut anchor = None;

		assert_eq!(drag_scroll(bar, 0, 0, metrics, &mut anchor), Some(0));
		assert_eq!(anchor, Some(0));
		assert_eq!(drag_scroll(bar, 9, 0, metrics, &mut anchor), Some(30));
		assert_eq!(drag_scroll(bar, 200, 0, metrics, &mut anchor), Some(30));
	}
}
