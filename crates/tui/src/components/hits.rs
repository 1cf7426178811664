//! Clickable regions recorded while drawing.

use ratatui::layout::Rect;

use super::point_in_rect;

/// Targets registered during the last frame, topmost last.
#[derive(Debug, Clone)]
pub struct HitMap<T> {
	regions: Vec<(Rect, T)>,
}

impl<T> Default for HitMap<T> {
	fn default() -> Self {
		Self {
			regions: Vec::new(),
		}
	}
}

impl<T: Copy> HitMap<T> {
	pub fn clear(&mut self) {
		self.regions.clear();
	}

	pub fn push(&mut self, area: Rect, target: T) {
		if area.width > 0 && area.height > 0 {
			self.regions.push((area, target));
		}
	}

	/// The most recently registered target under the pointer.
	#[must_use]
	pub fn at(&self, column: u16, row: u16) -> Option<T> {
		self.regions
			.iter()
			.rev()
			.find(|(area, _)| point_in_rect(column, row, *area))
			.map(|(_, target)| *target)
	}

	#[must_use]
	pub fn area_of(&self, target: T) -> Option<Rect>
	where
		T: PartialEq,
	{
		self.regions
			.iter()
			.find(|(_, candidate)| *candidate == target)
			.map(|(area, _)| *area)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn later_regions_win_on_overlap() {
		let mut hits = HitMap::default();
		hits.push(Rect::new(0, 0, 10, 10), 'a');
		hits.push(Rect::new(2, 2, 2, 2), 'b');
		hits.push(Rect::new(50, 50, 0, 4), 'c');

		assert_eq!(hits.at(3, 3), Some('b'));
		assert_eq!(hits.at(8, 8), Some('a'));
		assert_eq!(hits.at(50, 50), None);
		assert_eq!(hits.area_of('b'), Some(Rect::new(2, 2, 2, 2)));
	}
}
