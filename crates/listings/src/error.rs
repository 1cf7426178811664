use thiserror::Error;

use crate::property::PropertyId;

/// Errors raised while looking up or filtering listings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListingError {
	#[error("property {id} not found")]
	NotFound { id: PropertyId },

	#[error("price range {low}..={high} is outside {min}..={max}")]
	InvalidPriceRange {
		low: u32,
		high: u32,
		min: u32,
		max: u32,
	},
}
