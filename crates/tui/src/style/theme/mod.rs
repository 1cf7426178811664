mod builtins;
mod types;

pub use builtins::default_theme;
pub use types::{Theme, ThemeRegistration};

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations()
}

/// Canonical names of every built-in theme, sorted.
#[must_use]
pub fn names() -> Vec<String> {
	let mut names: Vec<String> = builtins::registrations()
		.into_iter()
		.map(|registration| registration.name)
		.collect();
	names.sort();
	names
}

/// Look up a theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	builtins::registrations()
		.into_iter()
		.find(|registration| registration.answers_to(name))
		.map(|registration| registration.theme)
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
