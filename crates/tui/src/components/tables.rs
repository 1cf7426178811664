use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table, TableState,
};

use crate::components::render_scrollbar;
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	pub headers: Vec<&'static str>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'a>>,
	pub title: Option<String>,
}

/// Screen areas produced while drawing a table, used for mouse hit tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableAreas {
	/// First data row and below.
	pub body: Rect,
	pub scrollbar: Option<Rect>,
}

/// Render a bordered table with a header separator and optional scrollbar.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	scrollbar_state: &mut ScrollbarState,
	spec: TableSpec<'_>,
	theme: &Theme,
) -> TableAreas {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());
	if let Some(title) = spec.title {
		block = block.title(title);
	}
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let header = Row::new(spec.headers.into_iter().map(Cell::from))
		.style(theme.header)
		.height(1)
		.bottom_margin(1);

	let available_rows = usize::from(inner.height.saturating_sub(TABLE_HEADER_ROWS));
	let needs_scrollbar = spec.rows.len() > available_rows && available_rows > 0;
	let table_area = if needs_scrollbar {
		Rect {
			width: inner.width.saturating_sub(1),
			..inner
		}
	} else {
		inner
	};

	let widths = if spec.widths.is_empty() {
		vec![Constraint::Fill(1)]
	} else {
		spec.widths
	};
	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, table_state);

	let scrollbar = needs_scrollbar.then(|| render_scrollbar(frame, inner, scrollbar_state, theme));
	render_header_separator(frame, table_area, theme);

	TableAreas {
		body: Rect {
			y: table_area.y.saturating_add(TABLE_HEADER_ROWS),
			height: table_area.height.saturating_sub(TABLE_HEADER_ROWS),
			..table_area
		},
		scrollbar,
	}
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 || area.width <= 2 {
		return;
	}
	let line = Line::from(vec![
		Span::raw(" "),
		Span::styled("─".repeat(usize::from(area.width - 2)), theme.border_style()),
		Span::raw(" "),
	]);
	let separator = Rect {
		y: area.y + 1,
		height: 1,
		..area
	};
	frame.render_widget(Paragraph::new(line), separator);
}
