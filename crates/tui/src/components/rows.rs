use frizbee::{Config, match_indices};
use hearth_listings::{Catalog, Favorites, FeedRow};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};
use unicode_truncate::UnicodeTruncateStr;

/// Matched positions of `needle` inside `text`, if it matches at all.
#[must_use]
pub fn highlight_for(needle: &str, config: &Config, text: &str) -> Option<Vec<usize>> {
	if text.is_empty() || needle.is_empty() {
		return None;
	}
	match_indices(needle, text, config).map(|m| m.indices)
}

/// Split `text` into plain and highlighted spans.
#[must_use]
pub fn highlight_line(
	text: &str,
	indices: Option<&[usize]>,
	highlight: Style,
) -> Line<'static> {
	let Some(indices) = indices.filter(|indices| !indices.is_empty()) else {
		return Line::from(text.to_string());
	};

	let mut spans = Vec::new();
	let mut current = String::new();
	let mut current_hit = false;
	for (offset, ch) in text.char_indices() {
		let hit = indices.contains(&offset);
		if hit != current_hit && !current.is_empty() {
			spans.push(span(std::mem::take(&mut current), current_hit, highlight));
		}
		current_hit = hit;
		current.push(ch);
	}
	if !current.is_empty() {
		spans.push(span(current, current_hit, highlight));
	}
	Line::from(spans)
}

fn span(text: String, hit: bool, highlight: Style) -> Span<'static> {
	if hit {
		Span::styled(text, highlight)
	} else {
		Span::raw(text)
	}
}

/// Inputs for [`build_listing_rows`].
pub struct ListingRows<'a> {
	pub catalog: &'a Catalog,
	pub rows: &'a [FeedRow],
	pub favorites: &'a Favorites,
	/// Query text and matcher configuration when the search box is non-empty.
	pub needle: Option<(&'a str, Config)>,
	pub highlight: Style,
	pub favorite: Style,
	/// Width of the title column; titles are truncated to fit.
	pub title_width: Option<u16>,
}

/// Build one table row per visible listing.
#[must_use]
pub fn build_listing_rows(input: ListingRows<'_>) -> Vec<Row<'static>> {
	input
		.rows
		.iter()
		.filter_map(|row| {
			let property = input.catalog.by_index(row.index)?;
			let title = match input.title_width {
				Some(width) => property.title.unicode_truncate(usize::from(width)).0,
				None => property.title.as_str(),
			};
			let indices = input
				.needle
				.as_ref()
				.and_then(|(needle, config)| highlight_for(needle, config, title));
			let marker = if input.favorites.contains(property.id) {
				Span::styled("♥", input.favorite)
			} else {
				Span::raw(" ")
			};

			Some(Row::new([
				Cell::from(marker),
				Cell::from(highlight_line(title, indices.as_deref(), input.highlight)),
				Cell::from(property.location.clone()),
				Cell::from(property.kind.label()),
				Cell::from(property.price_label()),
				Cell::from(format!("★ {:.1}", property.rating)),
			]))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use ratatui::style::{Color, Style};

	use super::*;

	#[test]
	fn highlight_line_splits_on_hits() {
		let hit = Style::new().fg(Color::Red);
		let line = highlight_line("Villa", Some(&[0, 1][..]), hit);
		assert_eq!(line.spans.len(), 2);
		assert_eq!(line.spans[0].content, "Vi");
		assert_eq!(line.spans[0].style, hit);
		assert_eq!(line.spans[1].content, "lla");
	}

	#[test]
	fn highlight_line_without_hits_is_plain() {
		let line = highlight_line("Loft", None, Style::new());
		assert_eq!(line.spans.len(), 1);
		assert_eq!(line.spans[0].content, "Loft");
	}

	#[test]
	fn rows_follow_feed_order() {
		let catalog = Catalog::mock();
		let rows = [FeedRow { index: 2, score: 0 }, FeedRow { index: 0, score: 0 }];
		let built = build_listing_rows(ListingRows {
			catalog: &catalog,
			rows: &rows,
			favorites: &Favorites::default(),
			needle: None,
			highlight: Style::new(),
			favorite: Style::new(),
			title_width: Some(8),
		});
		assert_eq!(built.len(), 2);
	}
}
