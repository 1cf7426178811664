use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

use super::{App, Screen};

impl App {
	/// Route a key press to the log overlay or the active screen.
	pub fn handle_key(&mut self, key: KeyEvent) {
		if key.kind == KeyEventKind::Release {
			return;
		}
		match key.code {
			KeyCode::F(12) => {
				self.logs.toggle();
				return;
			}
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.should_quit = true;
				return;
			}
			_ => {}
		}
		if self.logs.is_visible() && self.logs.handle_key(key) {
			return;
		}

		match self.screen() {
			Screen::Home => self.handle_home_key(key),
			Screen::Filters => self.handle_filters_key(key),
			Screen::Detail => self.handle_detail_key(key),
		}
	}

	/// Mouse input goes to the active screen; the log overlay swallows it.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		if self.logs.is_visible() {
			return;
		}
		match self.screen() {
			Screen::Home => self.handle_home_mouse(mouse),
			Screen::Filters => self.handle_filters_mouse(mouse),
			Screen::Detail => self.handle_detail_mouse(mouse),
		}
	}
}

#[cfg(test)]
mod tests {
	use hearth_listings::Catalog;

	use super::*;
	use crate::config::TuiConfig;

	fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
		KeyEvent::new(code, modifiers)
	}

	#[test]
	fn ctrl_c_quits_from_any_screen() {
		let mut app = App::new(Catalog::mock(), TuiConfig::default());
		app.handle_key(key(KeyCode::Char('o'), KeyModifiers::CONTROL));
		assert_eq!(app.screen(), Screen::Filters);
		app.handle_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
		assert!(app.should_quit());
	}

	#[test]
	fn log_overlay_takes_escape_first() {
		let mut app = App::new(Catalog::mock(), TuiConfig::default());
		app.handle_key(key(KeyCode::F(12), KeyModifiers::NONE));
		assert!(app.logs.is_visible());

		app.handle_key(key(KeyCode::Esc, KeyModifiers::NONE));
		assert!(!app.logs.is_visible());
		assert!(!app.should_quit());

		app.handle_key(key(KeyCode::Esc, KeyModifiers::NONE));
		assert!(app.should_quit());
	}
}
