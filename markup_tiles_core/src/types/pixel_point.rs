use std::fmt::Debug;

/// A point in a pixel plane, `x` growing to the right and `y` growing downward.
///
/// The origin depends on the operation that produced the point: world pixels are relative to
/// the top-left corner of the whole map, tile-local pixels to the top-left corner of one tile.
/// The type does not record which plane it belongs to, so never mix the two without converting.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
	pub x: f64,
	pub y: f64,
}

impl PixelPoint {
	pub fn new(x: f64, y: f64) -> PixelPoint {
		PixelPoint { x, y }
	}

	/// Returns `true` if neither coordinate is NaN or infinite.
	pub fn is_finite(&self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}

	/// Returns `true` if this tile-local point lies on a tile of `tile_size` pixels, allowing
	/// `margin` pixels of overhang on every side.
	///
	/// A marker icon anchored a few pixels outside a tile still paints into it, so callers
	/// pass the icon's half extent as `margin`.
	///
	/// # Examples
	/// ```
	/// use markup_tiles_core::PixelPoint;
	///
	/// assert!(PixelPoint::new(10.0, 250.0).is_inside_tile(256, 0.0));
	/// assert!(!PixelPoint::new(-4.0, 100.0).is_inside_tile(256, 0.0));
	/// assert!(PixelPoint::new(-4.0, 100.0).is_inside_tile(256, 8.0));
	/// ```
	pub fn is_inside_tile(&self, tile_size: u32, margin: f64) -> bool {
		let max = f64::from(tile_size) + margin;
		let min = -margin;
		(min..=max).contains(&self.x) && (min..=max).contains(&self.y)
	}

	/// Euclidean distance to `other` in pixels.
	pub fn distance(&self, other: &PixelPoint) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}

	/// Returns the point as `[x, y]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 2] {
		[self.x, self.y]
	}
}

impl Debug for PixelPoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "PixelPoint({}, {})", self.x, self.y)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0.0, 0.0, 0.0, true)]
	#[case(256.0, 256.0, 0.0, true)]
	#[case(256.1, 128.0, 0.0, false)]
	#[case(128.0, -0.1, 0.0, false)]
	#[case(-7.5, 263.5, 8.0, true)]
	#[case(-8.5, 128.0, 8.0, false)]
	#[case(f64::NAN, 128.0, 8.0, false)]
	fn is_inside_tile(#[case] x: f64, #[case] y: f64, #[case] margin: f64, #[case] expected: bool) {
		assert_eq!(PixelPoint::new(x, y).is_inside_tile(256, margin), expected);
	}

	#[test]
	fn distance() {
		let a = PixelPoint::new(1.0, 2.0);
		let b = PixelPoint::new(4.0, 6.0);
		assert_eq!(a.distance(&b), 5.0);
		assert_eq!(b.distance(&a), 5.0);
	}

	#[test]
	fn finite() {
		assert!(PixelPoint::new(-1e9, 1e9).is_finite());
		assert!(!PixelPoint::new(f64::INFINITY, 0.0).is_finite());
		assert!(!PixelPoint::new(0.0, f64::NAN).is_finite());
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", PixelPoint::new(384.0, 0.5)), "PixelPoint(384, 0.5)");
	}
}
