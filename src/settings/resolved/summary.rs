use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let panel = &config.panel;
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!(
			"  UI theme: {}",
			config.theme.as_deref().unwrap_or("(use the built-in default)")
		),
	];
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	match config.start_property {
		Some(id) => lines.push(format!("  Start property: {id}")),
		None => lines.push("  Start property: (home feed)".to_string()),
	}
	lines.push(format!(
		"  Slider handle diameter: {}",
		config.slider.handle_diameter
	));
	lines.push(format!("  Swipe threshold: {} rows", panel.swipe_threshold));
	lines.push(format!(
		"  Panel height: {} collapsed, {} expanded",
		percent(panel.collapsed_ratio),
		percent(panel.expanded_ratio)
	));
	lines.push(format!(
		"  Image height: {} to {}",
		percent(panel.image_min_ratio),
		percent(panel.image_max_ratio)
	));
	lines.push(format!(
		"  Expand spring: tension {}, friction {}",
		panel.expand_tension, panel.expand_friction
	));
	lines.push(format!("  Log level: {}", config.log_level));
	lines
}

fn percent(ratio: f32) -> String {
	format!("{:.0}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn percent_rounds_to_whole_numbers() {
		assert_eq!(percent(0.2), "20%");
		assert_eq!(percent(0.56), "56%");
	}

	#[test]
	fn summary_lists_panel_bounds() {
		let config = ResolvedConfig {
			theme: Some("slate".into()),
			initial_query: "loft".into(),
			start_property: Some(3),
			..ResolvedConfig::default()
		};

		let lines = summary_lines(&config);
		assert!(lines.contains(&"  UI theme: slate".to_string()));
		assert!(lines.contains(&"  Initial query: loft".to_string()));
		assert!(lines.contains(&"  Start property: 3".to_string()));
		assert!(lines.contains(&"  Panel height: 20% collapsed, 55% expanded".to_string()));
		assert!(lines.contains(&"  Image height: 25% to 50%".to_string()));
		assert!(lines.contains(&"  Log level: INFO".to_string()));
	}

	#[test]
	fn summary_prints_without_panic() {
		print_summary(&ResolvedConfig::default());
	}
}
