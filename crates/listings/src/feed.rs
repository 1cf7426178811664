//! Home feed query and ranking.

use std::collections::BTreeSet;

use frizbee::{Config, match_list};

use crate::catalog::Catalog;
use crate::criteria::FilterCriteria;
use crate::property::{PropertyId, PropertyKind};

/// Quick filter chips shown under the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeChip {
	#[default]
	All,
	Apartments,
	House,
	Villa,
	Hotel,
}

impl TypeChip {
	pub const ALL: [Self; 5] = [
		Self::All,
		Self::Apartments,
		Self::House,
		Self::Villa,
		Self::Hotel,
	];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::All => "All",
			Self::Apartments => "Apartments",
			Self::House => "House",
			Self::Villa => "Villa",
			Self::Hotel => "Hotel",
		}
	}

	#[must_use]
	pub fn admits(self, kind: PropertyKind) -> bool {
		match self {
			Self::All => true,
			Self::Apartments => kind == PropertyKind::Apartments,
			Self::House => kind == PropertyKind::House,
			Self::Villa => kind == PropertyKind::Villa,
			Self::Hotel => kind == PropertyKind::Hotel,
		}
	}

	fn position(self) -> usize {
		Self::ALL
			.iter()
			.position(|chip| *chip == self)
			.unwrap_or_default()
	}

	#[must_use]
	pub fn next(self) -> Self {
		Self::ALL[(self.position() + 1) % Self::ALL.len()]
	}

	#[must_use]
	pub fn previous(self) -> Self {
		let len = Self::ALL.len();
		Self::ALL[(self.position() + len - 1) % len]
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedQuery {
	pub text: String,
	pub chip: TypeChip,
	/// Criteria from the filter modal, once applied.
	pub criteria: Option<FilterCriteria>,
}

impl FeedQuery {
	#[must_use]
	pub fn with_text(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			..Self::default()
		}
	}
}

/// A visible feed entry: catalog index plus its match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedRow {
	pub index: usize,
	pub score: u16,
}

/// Filtered, ranked view over a [`Catalog`].
#[derive(Debug, Clone, Default)]
pub struct Feed {
	rows: Vec<FeedRow>,
}

impl Feed {
	/// Rows of `catalog` visible under `query`.
	///
	/// Empty text keeps catalog order; otherwise rows are ranked by fuzzy
	/// score over "title location", best first.
	#[must_use]
	pub fn filter(catalog: &Catalog, query: &FeedQuery) -> Vec<FeedRow> {
		let candidates: Vec<usize> = catalog
			.iter()
			.enumerate()
			.filter(|(_, property)| query.chip.admits(property.kind))
			.filter(|(_, property)| {
				query
					.criteria
					.as_ref()
					.is_none_or(|criteria| criteria.matches(property))
			})
			.map(|(index, _)| index)
			.collect();

		let needle = query.text.trim();
		if needle.is_empty() {
			return candidates
				.into_iter()
				.map(|index| FeedRow { index, score: 0 })
				.collect();
		}

		let haystacks: Vec<String> = candidates
			.iter()
			.filter_map(|&index| catalog.by_index(index).map(|p| p.haystack()))
			.collect();
		let haystack_refs: Vec<&str> = haystacks.iter().map(String::as_str).collect();
		let config = config_for_query(needle);

		let mut rows: Vec<FeedRow> = match_list(needle, &haystack_refs, &config)
			.into_iter()
			.filter(|entry| entry.score > 0)
			.filter_map(|entry| {
				let index = *candidates.get(entry.index as usize)?;
				Some(FeedRow {
					index,
					score: entry.score,
				})
			})
			.collect();
		rows.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));
		rows
	}

	pub fn refresh(&mut self, catalog: &Catalog, query: &FeedQuery) {
		self.rows = Self::filter(catalog, query);
	}

	#[must_use]
	pub fn rows(&self) -> &[FeedRow] {
		&self.rows
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

/// Fuzzy matching options; the typo allowance grows with the query length.
#[must_use]
pub fn config_for_query(query: &str) -> Config {
	let length = query.chars().count();
	let mut allowed_typos: u16 = match length {
		0..=2 => 0,
		3..=5 => 1,
		6..=9 => 2,
		_ => 3,
	};
	if let Ok(max_reasonable) = u16::try_from(length.saturating_sub(1)) {
		allowed_typos = allowed_typos.min(max_reasonable);
	}

	Config {
		prefilter: true,
		max_typos: Some(allowed_typos),
		sort: false,
		..Config::default()
	}
}

/// Favourited listing ids. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorites {
	ids: BTreeSet<PropertyId>,
}

impl Default for Favorites {
	fn default() -> Self {
		Self {
			ids: BTreeSet::from([1]),
		}
	}
}

impl Favorites {
	/// Flip `id` and return whether it is now a favourite.
	pub fn toggle(&mut self, id: PropertyId) -> bool {
		if self.ids.remove(&id) {
			false
		} else {
			self.ids.insert(id);
			true
		}
	}

	#[must_use]
	pub fn contains(&self, id: PropertyId) -> bool {
		self.ids.contains(&id)
	}

	pub fn iter(&self) -> impl Iterator<Item = PropertyId> + '_ {
		self.ids.iter().copied()
	}
}
