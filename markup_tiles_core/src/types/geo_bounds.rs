use crate::GeoPoint;
use std::fmt::Debug;

/// A geographic rectangle given by its southwest and northeast corners.
///
/// `southwest.lat <= northeast.lat` holds for every bounds produced by a tile projection.
/// Longitudes are stored as computed and never reordered, so a rectangle that crosses the
/// antimeridian has a western edge greater than its eastern edge.
///
/// # Examples
/// ```
/// use markup_tiles_core::{GeoBounds, GeoPoint};
///
/// let bounds = GeoBounds::new(GeoPoint::new(-5.0, -10.0), GeoPoint::new(5.0, 10.0));
/// assert_eq!(bounds.as_array(), [-10.0, -5.0, 10.0, 5.0]);
/// assert_eq!(bounds.center(), GeoPoint::new(0.0, 0.0));
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoBounds {
	pub southwest: GeoPoint,
	pub northeast: GeoPoint,
}

impl GeoBounds {
	pub fn new(southwest: GeoPoint, northeast: GeoPoint) -> GeoBounds {
		GeoBounds { southwest, northeast }
	}

	pub fn west(&self) -> f64 {
		self.southwest.lng
	}

	pub fn south(&self) -> f64 {
		self.southwest.lat
	}

	pub fn east(&self) -> f64 {
		self.northeast.lng
	}

	pub fn north(&self) -> f64 {
		self.northeast.lat
	}

	/// Arithmetic midpoint of both axes.
	///
	/// This is the geographic center, not the Mercator center: on a tile the midpoint latitude
	/// sits south of the tile's vertical pixel center in the northern hemisphere.
	#[must_use]
	pub fn center(&self) -> GeoPoint {
		GeoPoint::new(
			f64::midpoint(self.southwest.lat, self.northeast.lat),
			f64::midpoint(self.southwest.lng, self.northeast.lng),
		)
	}

	/// Returns `true` if the western edge lies east of the eastern edge.
	pub fn crosses_antimeridian(&self) -> bool {
		self.west() > self.east()
	}

	/// Returns the bounds as `[west, south, east, north]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.west(), self.south(), self.east(), self.north()]
	}

	/// Returns the bounds as a string in the form `[west,south,east,north]`.
	///
	/// # Examples
	/// ```
	/// use markup_tiles_core::{GeoBounds, GeoPoint};
	///
	/// let bounds = GeoBounds::new(GeoPoint::new(-5.0, -10.0), GeoPoint::new(5.0, 10.0));
	/// assert_eq!(bounds.as_string_json(), "[-10,-5,10,5]");
	/// ```
	#[must_use]
	pub fn as_string_json(&self) -> String {
		format!(
			"[{},{},{},{}]",
			self.west(),
			self.south(),
			self.east(),
			self.north()
		)
	}
}

impl Debug for GeoBounds {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		// Renders "GeoBounds(sw: GeoPoint(-5, -10), ne: GeoPoint(5, 10))" for example
		write!(f, "GeoBounds(sw: {:?}, ne: {:?})", self.southwest, self.northeast)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn bounds(south: f64, west: f64, north: f64, east: f64) -> GeoBounds {
		GeoBounds::new(GeoPoint::new(south, west), GeoPoint::new(north, east))
	}

	#[test]
	fn edges() {
		let b = bounds(-5.0, -10.0, 5.0, 10.0);
		assert_eq!(b.west(), -10.0);
		assert_eq!(b.south(), -5.0);
		assert_eq!(b.east(), 10.0);
		assert_eq!(b.north(), 5.0);
	}

	#[test]
	fn center() {
		assert_eq!(bounds(0.0, -180.0, 80.0, 0.0).center(), GeoPoint::new(40.0, -90.0));
	}

	#[test]
	fn crosses_antimeridian() {
		assert!(!bounds(-5.0, -10.0, 5.0, 10.0).crosses_antimeridian());
		assert!(bounds(-5.0, 170.0, 5.0, -170.0).crosses_antimeridian());
	}

	#[test]
	fn as_string_json_keeps_order() {
		assert_eq!(bounds(-5.0, 170.0, 5.0, -170.0).as_string_json(), "[170,-5,-170,5]");
	}

	#[test]
	fn debug_format() {
		assert_eq!(
			format!("{:?}", bounds(-5.0, -10.0, 5.0, 10.0)),
			"GeoBounds(sw: GeoPoint(-5, -10), ne: GeoPoint(5, 10))"
		);
	}
}
