//! In-memory listing data.

use crate::ListingError;
use crate::property::{Property, PropertyId, PropertyKind};

/// Read-only collection of listings, in feed order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	properties: Vec<Property>,
}

impl Catalog {
	#[must_use]
	pub fn new(properties: Vec<Property>) -> Self {
		Self { properties }
	}

	/// The bundled demo listings.
	#[must_use]
	pub fn mock() -> Self {
		let properties = MOCK
			.iter()
			.map(|seed| Property {
				id: seed.id,
				kind: seed.kind,
				title: seed.title.to_string(),
				location: seed.location.to_string(),
				price: seed.price,
				baths: seed.baths,
				beds: seed.beds,
				sqft: seed.sqft,
				rating: seed.rating,
				description: seed.description.to_string(),
				image: seed.image.to_string(),
			})
			.collect();
		Self::new(properties)
	}

	/// # Errors
	///
	/// Returns [`ListingError::NotFound`] for an unknown id.
	pub fn get(&self, id: PropertyId) -> Result<&Property, ListingError> {
		self.properties
			.iter()
			.find(|property| property.id == id)
			.ok_or(ListingError::NotFound { id })
	}

	#[must_use]
	pub fn by_index(&self, index: usize) -> Option<&Property> {
		self.properties.get(index)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Property> {
		self.properties.iter()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[Property] {
		&self.properties
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
}

struct Seed {
	id: PropertyId,
	kind: PropertyKind,
	title: &'static str,
	location: &'static str,
	price: u32,
	baths: u8,
	beds: u8,
	sqft: u32,
	rating: f32,
	description: &'static str,
	image: &'static str,
}

const MOCK: &[Seed] = &[
	Seed {
		id: 1,
		kind: PropertyKind::Apartments,
		title: "Modern 2 Bedroom Apartment In New York.",
		location: "Downtown, New York",
		price: 1200,
		baths: 2,
		beds: 2,
		sqft: 1200,
		rating: 4.5,
		description: "A beautiful and spacious apartment located in the heart of downtown New York. \
			This modern apartment offers an open floor plan, updated kitchen, and stunning city views. \
			Perfect for professionals and families alike. It features hardwood floors, high ceilings, \
			and abundant natural light throughout the space. The building includes 24/7 security, \
			a fitness center, rooftop lounge, and private parking.",
		image: "Open-plan living room with floor-to-ceiling windows",
	},
	Seed {
		id: 2,
		kind: PropertyKind::Apartments,
		title: "Modern 2 Bedroom",
		location: "Midtown, New York",
		price: 1200,
		baths: 2,
		beds: 2,
		sqft: 1100,
		rating: 4.2,
		description: "A stylish apartment in Midtown with modern amenities. Features include \
			stainless steel appliances, central air conditioning, and access to building amenities \
			including a fitness center and rooftop lounge.",
		image: "Bright bedroom with a view over Midtown",
	},
	Seed {
		id: 3,
		kind: PropertyKind::House,
		title: "Family House With Garden",
		location: "Park Slope, Brooklyn",
		price: 3400,
		baths: 3,
		beds: 4,
		sqft: 2400,
		rating: 4.7,
		description: "Brownstone on a quiet tree-lined street with a private back garden, \
			a renovated eat-in kitchen and a finished basement.",
		image: "Brownstone facade with a front stoop",
	},
	Seed {
		id: 4,
		kind: PropertyKind::Villa,
		title: "Waterfront Villa With Pool",
		location: "Montauk, New York",
		price: 4800,
		baths: 4,
		beds: 5,
		sqft: 3800,
		rating: 4.9,
		description: "Shingle-style villa on the bay with a heated pool, outdoor kitchen \
			and direct beach access.",
		image: "Pool deck at sunset",
	},
	Seed {
		id: 5,
		kind: PropertyKind::Hotel,
		title: "Boutique Hotel Suite",
		location: "SoHo, New York",
		price: 2100,
		baths: 1,
		beds: 1,
		sqft: 650,
		rating: 4.4,
		description: "Serviced suite with daily housekeeping, concierge and a rooftop bar \
			two floors up.",
		image: "King bed under exposed brick",
	},
	Seed {
		id: 6,
		kind: PropertyKind::Penthouse,
		title: "Skyline Penthouse",
		location: "Tribeca, New York",
		price: 5000,
		baths: 3,
		beds: 3,
		sqft: 2600,
		rating: 4.8,
		description: "Full-floor penthouse with a wraparound terrace, private elevator \
			and unobstructed river views.",
		image: "Terrace overlooking the Hudson",
	},
	Seed {
		id: 7,
		kind: PropertyKind::Apartments,
		title: "Riverside 3 Bedroom Loft",
		location: "Upper West Side, New York",
		price: 2400,
		baths: 2,
		beds: 3,
		sqft: 1500,
		rating: 4.3,
		description: "Converted warehouse loft steps from Riverside Park with oversized \
			windows and an in-unit washer and dryer.",
		image: "Loft kitchen with steel beams",
	},
	Seed {
		id: 8,
		kind: PropertyKind::Apartments,
		title: "Shared 3 Bedroom Flat",
		location: "Astoria, Queens",
		price: 950,
		baths: 1,
		beds: 3,
		sqft: 1000,
		rating: 4.0,
		description: "Affordable walk-up near the N and W trains, free wifi and a shared \
			backyard.",
		image: "Sunny corner living room",
	},
	Seed {
		id: 9,
		kind: PropertyKind::Land,
		title: "Buildable Lot Near The Lake",
		location: "Hudson Valley, New York",
		price: 300,
		baths: 0,
		beds: 0,
		sqft: 9000,
		rating: 3.9,
		description: "Cleared, level lot with road frontage and utilities at the street.",
		image: "Meadow with a lake in the distance",
	},
];
