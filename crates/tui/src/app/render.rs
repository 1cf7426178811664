use ratatui::Frame;

use super::{App, Screen};

impl App {
	/// Draw the active screen, then any overlays on top of it.
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		match self.screen() {
			Screen::Detail => self.render_detail(frame, area),
			Screen::Home | Screen::Filters => {
				self.render_home(frame, area);
				if let Some(modal) = self.filters.as_mut() {
					modal.render(frame, area, &self.style.theme);
				}
			}
		}
		self.logs.render(frame, area, &self.style.theme);
	}
}
