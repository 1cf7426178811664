//! Editable text fields backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

use crate::style::Theme;

/// A labelled input. Single-line unless built with [`TextField::multiline`].
#[derive(Debug, Clone)]
pub struct TextField {
	textarea: TextArea<'static>,
	placeholder: String,
	multiline: bool,
}

impl Default for TextField {
	fn default() -> Self {
		Self::new("")
	}
}

impl TextField {
	pub fn new(initial: impl Into<String>) -> Self {
		Self {
			textarea: build_textarea(&initial.into()),
			placeholder: String::new(),
			multiline: false,
		}
	}

	#[must_use]
	pub fn multiline(mut self) -> Self {
		self.multiline = true;
		self
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn text(&self) -> String {
		self.textarea.lines().join("\n")
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.textarea.lines().iter().all(String::is_empty)
	}

	pub fn set_text(&mut self, text: &str) {
		self.textarea = build_textarea(text);
	}

	pub fn clear(&mut self) {
		self.set_text("");
	}

	/// Feed a key press. Returns whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m' | 'j')));
		if newline && !self.multiline {
			return false;
		}
		self.textarea.input(key)
	}

	/// Draw the text, or the placeholder when empty. The cursor only shows
	/// while focused.
	pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
		if area.width == 0 || area.height == 0 {
			return;
		}
		self.textarea.set_style(theme.prompt);
		self.textarea.set_cursor_line_style(Style::default());
		self.textarea.set_cursor_style(if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			theme.prompt
		});
		self.textarea.set_placeholder_text(self.placeholder.clone());
		self.textarea.set_placeholder_style(theme.empty_style());
		frame.render_widget(&self.textarea, area);
	}
}

fn build_textarea(text: &str) -> TextArea<'static> {
	let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
	let mut textarea = TextArea::new(lines);
	textarea.move_cursor(CursorMove::Bottom);
	textarea.move_cursor(CursorMove::End);
	textarea
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_after_initial_text() {
		let mut field = TextField::new("New");
		assert!(field.input(key(KeyCode::Char(' '))));
		assert!(field.input(key(KeyCode::Char('Y'))));
		assert_eq!(field.text(), "New Y");
		assert!(field.input(key(KeyCode::Backspace)));
		assert_eq!(field.text(), "New ");
	}

	#[test]
	fn single_line_fields_ignore_enter() {
		let mut field = TextField::new("a");
		assert!(!field.input(key(KeyCode::Enter)));
		assert_eq!(field.text(), "a");

		let mut message = TextField::new("a").multiline();
		assert!(message.input(key(KeyCode::Enter)));
		assert!(message.input(key(KeyCode::Char('b'))));
		assert_eq!(message.text(), "a\nb");
	}

	#[test]
	fn clear_empties_the_field() {
		let mut field = TextField::new("Jane");
		field.clear();
		assert!(field.is_empty());
		assert_eq!(field.text(), "");
	}
}
