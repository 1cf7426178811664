//! Filter modal model.
//!
//! [`FilterCriteria`] holds every choice the modal offers. Applying it narrows
//! the home feed to listings in the price range, of an allowed category, with
//! at least the requested number of bedrooms. The remaining fields are carried
//! for display and logging.

use std::fmt;

use crate::ListingError;
use crate::feed::FeedQuery;
use crate::property::{Property, PropertyKind};

/// Bounds and quantization of the price selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBounds {
	pub min: u32,
	pub max: u32,
	pub step: u32,
}

pub const PRICE_RANGE: PriceBounds = PriceBounds {
	min: 250,
	max: 5000,
	step: 50,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingType {
	Sale,
	#[default]
	Rent,
	Buy,
}

impl ListingType {
	pub const ALL: [Self; 3] = [Self::Sale, Self::Rent, Self::Buy];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Sale => "For Sale",
			Self::Rent => "For Rent",
			Self::Buy => "For Buy",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
	Apartments,
	House,
	All,
	Hotel,
	Penthouse,
	Land,
	Villa,
}

impl Category {
	pub const ALL: [Self; 7] = [
		Self::Apartments,
		Self::House,
		Self::All,
		Self::Hotel,
		Self::Penthouse,
		Self::Land,
		Self::Villa,
	];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Apartments => "Apartments",
			Self::House => "House",
			Self::All => "All",
			Self::Hotel => "Hotel",
			Self::Penthouse => "Penthouse",
			Self::Land => "Land",
			Self::Villa => "Villa",
		}
	}

	#[must_use]
	pub fn admits(self, kind: PropertyKind) -> bool {
		match self {
			Self::All => true,
			Self::Apartments => kind == PropertyKind::Apartments,
			Self::House => kind == PropertyKind::House,
			Self::Hotel => kind == PropertyKind::Hotel,
			Self::Penthouse => kind == PropertyKind::Penthouse,
			Self::Land => kind == PropertyKind::Land,
			Self::Villa => kind == PropertyKind::Villa,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facility {
	Parking,
	Kitchen,
	Wifi,
	Garden,
	Pool,
}

impl Facility {
	pub const ALL: [Self; 5] = [
		Self::Parking,
		Self::Kitchen,
		Self::Wifi,
		Self::Garden,
		Self::Pool,
	];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Parking => "Parking",
			Self::Kitchen => "Kitchen",
			Self::Wifi => "Free Wifi",
			Self::Garden => "Garden",
			Self::Pool => "Pool",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bedrooms {
	One,
	Two,
	#[default]
	Three,
	Four,
	FivePlus,
}

impl Bedrooms {
	pub const ALL: [Self; 5] = [
		Self::One,
		Self::Two,
		Self::Three,
		Self::Four,
		Self::FivePlus,
	];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::One => "1 Room",
			Self::Two => "2 Rooms",
			Self::Three => "3 Rooms",
			Self::Four => "4 Rooms",
			Self::FivePlus => "5+ Rooms",
		}
	}

	/// Fewest bedrooms a listing needs to pass the filter.
	#[must_use]
	pub fn minimum(self) -> u8 {
		match self {
			Self::One => 1,
			Self::Two => 2,
			Self::Three => 3,
			Self::Four => 4,
			Self::FivePlus => 5,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bathrooms {
	One,
	#[default]
	Two,
	Three,
	FourPlus,
}

impl Bathrooms {
	pub const ALL: [Self; 4] = [Self::One, Self::Two, Self::Three, Self::FourPlus];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::One => "1 Bathroom",
			Self::Two => "2 Bathrooms",
			Self::Three => "3 Bathrooms",
			Self::FourPlus => "4+ Bathrooms",
		}
	}
}

/// Inclusive monthly price window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
	low: u32,
	high: u32,
}

impl PriceRange {
	/// # Errors
	///
	/// Returns [`ListingError::InvalidPriceRange`] when the bounds are
	/// inverted or fall outside [`PRICE_RANGE`].
	pub fn new(low: u32, high: u32) -> Result<Self, ListingError> {
		if low > high || low < PRICE_RANGE.min || high > PRICE_RANGE.max {
			return Err(ListingError::InvalidPriceRange {
				low,
				high,
				min: PRICE_RANGE.min,
				max: PRICE_RANGE.max,
			});
		}
		Ok(Self { low, high })
	}

	#[must_use]
	pub fn full() -> Self {
		Self {
			low: PRICE_RANGE.min,
			high: PRICE_RANGE.max,
		}
	}

	#[must_use]
	pub fn low(&self) -> u32 {
		self.low
	}

	#[must_use]
	pub fn high(&self) -> u32 {
		self.high
	}

	#[must_use]
	pub fn contains(&self, price: u32) -> bool {
		(self.low..=self.high).contains(&price)
	}
}

impl fmt::Display for PriceRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "${} - ${}", self.low, self.high)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
	pub listing_type: ListingType,
	categories: Vec<Category>,
	facilities: Vec<Facility>,
	price: PriceRange,
	pub city: String,
	pub country: String,
	pub bedrooms: Bedrooms,
	pub bathrooms: Bathrooms,
}

impl Default for FilterCriteria {
	fn default() -> Self {
		Self {
			listing_type: ListingType::Rent,
			categories: vec![Category::Apartments],
			facilities: vec![Facility::Parking, Facility::Pool],
			price: PriceRange::full(),
			city: "New York".to_string(),
			country: "United States".to_string(),
			bedrooms: Bedrooms::Three,
			bathrooms: Bathrooms::Two,
		}
	}
}

impl FilterCriteria {
	/// The state "Clear All" resets to.
	#[must_use]
	pub fn cleared() -> Self {
		Self {
			facilities: Vec::new(),
			price: PriceRange {
				low: PRICE_RANGE.min,
				high: 1000,
			},
			..Self::default()
		}
	}

	#[must_use]
	pub fn categories(&self) -> &[Category] {
		&self.categories
	}

	#[must_use]
	pub fn facilities(&self) -> &[Facility] {
		&self.facilities
	}

	#[must_use]
	pub fn price(&self) -> PriceRange {
		self.price
	}

	#[must_use]
	pub fn has_category(&self, category: Category) -> bool {
		self.categories.contains(&category)
	}

	#[must_use]
	pub fn has_facility(&self, facility: Facility) -> bool {
		self.facilities.contains(&facility)
	}

	/// Add or remove `category`. The last selected category stays selected.
	///
	/// Returns whether the selection changed.
	pub fn toggle_category(&mut self, category: Category) -> bool {
		match self.categories.iter().position(|c| *c == category) {
			Some(_) if self.categories.len() == 1 => false,
			Some(index) => {
				self.categories.remove(index);
				true
			}
			None => {
				self.categories.push(category);
				true
			}
		}
	}

	pub fn toggle_facility(&mut self, facility: Facility) {
		match self.facilities.iter().position(|f| *f == facility) {
			Some(index) => {
				self.facilities.remove(index);
			}
			None => self.facilities.push(facility),
		}
	}

	/// # Errors
	///
	/// Propagates [`PriceRange::new`] validation failures and leaves the
	/// current range untouched.
	pub fn set_price(&mut self, low: u32, high: u32) -> Result<(), ListingError> {
		self.price = PriceRange::new(low, high)?;
		Ok(())
	}

	#[must_use]
	pub fn matches(&self, property: &Property) -> bool {
		self.price.contains(property.price)
			&& self
				.categories
				.iter()
				.any(|category| category.admits(property.kind))
			&& property.beds >= self.bedrooms.minimum()
	}

	/// Log the criteria and hand them to the feed.
	pub fn apply(self, query: &mut FeedQuery) {
		log::info!("applying filters: {self}");
		query.criteria = Some(self);
	}
}

impl fmt::Display for FilterCriteria {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let categories: Vec<_> = self.categories.iter().map(|c| c.label()).collect();
		let facilities: Vec<_> = self.facilities.iter().map(|f| f.label()).collect();
		write!(
			f,
			"{}; categories [{}]; facilities [{}]; price {}; {}, {}; {}; {}",
			self.listing_type.label(),
			categories.join(", "),
			facilities.join(", "),
			self.price,
			self.city,
			self.country,
			self.bedrooms.label(),
			self.bathrooms.label(),
		)
	}
}
