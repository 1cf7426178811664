use anyhow::Result;
use hearth_listings::Property;
use serde_json::json;

/// One visible feed row as printed by `--list`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FeedEntry<'a> {
	pub(crate) property: &'a Property,
	pub(crate) score: u16,
}

/// Print the feed as aligned plain-text rows.
pub(crate) fn print_plain(entries: &[FeedEntry<'_>]) {
	if entries.is_empty() {
		println!("No properties match");
		return;
	}

	for entry in entries {
		println!("{}", format_plain_row(entry.property));
	}
}

fn format_plain_row(property: &Property) -> String {
	format!(
		"{:>3}  {:<10}  {:<28}  {:<24}  {}/month",
		property.id,
		property.kind.label(),
		property.title,
		property.location,
		property.price_label()
	)
}

/// Format the feed as a JSON string.
pub(crate) fn format_feed_json(query: &str, entries: &[FeedEntry<'_>]) -> Result<String> {
	let properties: Vec<_> = entries
		.iter()
		.map(|entry| {
			json!({
				"id": entry.property.id,
				"kind": entry.property.kind,
				"title": entry.property.title,
				"location": entry.property.location,
				"price": entry.property.price,
				"beds": entry.property.beds,
				"baths": entry.property.baths,
				"sqft": entry.property.sqft,
				"rating": entry.property.rating,
				"score": entry.score,
			})
		})
		.collect();

	let payload = json!({
		"query": query,
		"count": properties.len(),
		"properties": properties,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the feed.
pub(crate) fn print_json(query: &str, entries: &[FeedEntry<'_>]) -> Result<()> {
	println!("{}", format_feed_json(query, entries)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use hearth_listings::Catalog;
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_lists_properties_in_order() {
		let catalog = Catalog::mock();
		let entries: Vec<FeedEntry<'_>> = catalog
			.iter()
			.take(2)
			.map(|property| FeedEntry { property, score: 0 })
			.collect();

		let json = format_feed_json("", &entries).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["count"], 2);
		assert_eq!(value["properties"][0]["id"], entries[0].property.id);
		assert_eq!(value["properties"][1]["title"], entries[1].property.title.as_str());
	}

	#[test]
	fn json_kind_is_lowercase() {
		let catalog = Catalog::mock();
		let property = catalog.iter().next().expect("mock catalog is not empty");
		let json = format_feed_json("x", &[FeedEntry { property, score: 7 }]).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		let kind = value["properties"][0]["kind"].as_str().expect("kind");
		assert_eq!(kind, kind.to_lowercase());
		assert_eq!(value["properties"][0]["score"], 7);
		assert_eq!(value["query"], "x");
	}

	#[test]
	fn plain_row_shows_price_per_month() {
		let catalog = Catalog::mock();
		let property = catalog.iter().next().expect("mock catalog is not empty");
		let row = format_plain_row(property);
		assert!(row.contains(&property.title));
		assert!(row.ends_with(&format!("${}/month", property.price)));
	}
}
