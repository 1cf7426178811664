use std::fmt;

use serde::Serialize;

pub type PropertyId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
	Apartments,
	House,
	Villa,
	Hotel,
	Penthouse,
	Land,
}

impl PropertyKind {
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Apartments => "Apartments",
			Self::House => "House",
			Self::Villa => "Villa",
			Self::Hotel => "Hotel",
			Self::Penthouse => "Penthouse",
			Self::Land => "Land",
		}
	}
}

impl fmt::Display for PropertyKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// A rentable listing as shown on the feed and detail screens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
	pub id: PropertyId,
	pub kind: PropertyKind,
	pub title: String,
	pub location: String,
	/// Monthly rent in dollars.
	pub price: u32,
	pub baths: u8,
	pub beds: u8,
	pub sqft: u32,
	pub rating: f32,
	pub description: String,
	/// Caption drawn in place of the listing photo.
	pub image: String,
}

impl Property {
	/// Text the feed search matches against.
	#[must_use]
	pub fn haystack(&self) -> String {
		format!("{} {}", self.title, self.location)
	}

	/// `2 Baths • 2 Beds • 1200 sqft`
	#[must_use]
	pub fn stats_line(&self) -> String {
		format!(
			"{} {} • {} {} • {} sqft",
			self.baths,
			plural(self.baths, "Bath"),
			self.beds,
			plural(self.beds, "Bed"),
			self.sqft
		)
	}

	#[must_use]
	pub fn price_label(&self) -> String {
		format!("${}", self.price)
	}
}

fn plural(count: u8, noun: &str) -> String {
	if count == 1 {
		noun.to_string()
	} else {
		format!("{noun}s")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Property {
		Property {
			id: 7,
			kind: PropertyKind::Land,
			title: "Lot".into(),
			location: "Hudson Valley".into(),
			price: 300,
			baths: 1,
			beds: 0,
			sqft: 9000,
			rating: 3.9,
			description: String::new(),
			image: String::new(),
		}
	}

	#[test]
	fn stats_line_pluralizes_counts() {
		assert_eq!(sample().stats_line(), "1 Bath • 0 Beds • 9000 sqft");
	}

	#[test]
	fn haystack_joins_title_and_location() {
		assert_eq!(sample().haystack(), "Lot Hudson Valley");
	}

	#[test]
	fn serializes_with_lowercase_kind() {
		let value = serde_json::to_value(sample()).expect("serialize");
		assert_eq!(value["id"], 7);
		assert_eq!(value["kind"], "land");
		assert_eq!(value["title"], "Lot");
		assert_eq!(value["price"], 300);
		assert_eq!(value["sqft"], 9000);
	}
}
