//! In-app log viewer.

use log::LevelFilter;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerSmartWidget, TuiWidgetEvent, TuiWidgetState};

use crate::style::Theme;

pub struct LogOverlay {
	visible: bool,
	state: TuiWidgetState,
}

impl Default for LogOverlay {
	fn default() -> Self {
		Self {
			visible: false,
			state: TuiWidgetState::new().set_default_display_level(LevelFilter::Debug),
		}
	}
}

impl LogOverlay {
	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	pub fn toggle(&mut self) {
		self.visible = !self.visible;
	}

	/// Forward navigation keys to the widget. Returns whether the key was used.
	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		let event = match key.code {
			KeyCode::Esc => {
				self.visible = false;
				return true;
			}
			KeyCode::Char(' ') => TuiWidgetEvent::SpaceKey,
			KeyCode::Char('h') => TuiWidgetEvent::HideKey,
			KeyCode::Char('f') => TuiWidgetEvent::FocusKey,
			KeyCode::Char('+') => TuiWidgetEvent::PlusKey,
			KeyCode::Char('-') => TuiWidgetEvent::MinusKey,
			KeyCode::Up => TuiWidgetEvent::UpKey,
			KeyCode::Down => TuiWidgetEvent::DownKey,
			KeyCode::Left => TuiWidgetEvent::LeftKey,
			KeyCode::Right => TuiWidgetEvent::RightKey,
			KeyCode::PageUp => TuiWidgetEvent::PrevPageKey,
			KeyCode::PageDown => TuiWidgetEvent::NextPageKey,
			_ => return false,
		};
		self.state.transition(event);
		true
	}

	pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		if !self.visible || area.width < 4 || area.height < 4 {
			return;
		}
		let popup = Rect {
			x: area.x + 1,
			y: area.y + area.height / 3,
			width: area.width - 2,
			height: area.height - area.height / 3 - 1,
		};
		frame.render_widget(Clear, popup);
		let widget = TuiLoggerSmartWidget::default()
			.title_log("Log (F12 to close)")
			.title_target("Targets")
			.highlight_style(theme.highlight)
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.state(&self.state);
		frame.render_widget(widget, popup);
	}
}
