//! Property data for `hearth`: the listing model, the in-memory catalog, the
//! home feed query and the filter modal's criteria.

pub mod catalog;
pub mod criteria;
mod error;
pub mod feed;
pub mod property;

pub use catalog::Catalog;
pub use criteria::{
	Bathrooms, Bedrooms, Category, Facility, FilterCriteria, ListingType, PRICE_RANGE, PriceBounds,
	PriceRange,
};
pub use error::ListingError;
pub use feed::{Favorites, Feed, FeedQuery, FeedRow, TypeChip};
pub use property::{Property, PropertyId, PropertyKind};
