use anyhow::{Context, Result, ensure};
use std::{fmt::Debug, str::FromStr};

/// A point in geographic space, represented by:
/// - `f64` latitude (range: [-90, 90])
/// - `f64` longitude (any finite value, wrapped into (-180, 180] when projected)
///
/// Nothing is validated on construction; use [`check`](Self::check) when the point comes from
/// untrusted input.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
	pub lat: f64,
	pub lng: f64,
}

impl GeoPoint {
	pub fn new(lat: f64, lng: f64) -> GeoPoint {
		GeoPoint { lat, lng }
	}

	/// Checks that latitude is between -90 and 90 and longitude is finite.
	///
	/// # Errors
	///
	/// Returns an error if any of these checks fail.
	pub fn check(&self) -> Result<()> {
		ensure!(self.lat >= -90.0, "latitude ({}) must be >= -90", self.lat);
		ensure!(self.lat <= 90.0, "latitude ({}) must be <= 90", self.lat);
		ensure!(self.lng.is_finite(), "longitude ({}) must be finite", self.lng);
		Ok(())
	}

	/// Returns the longitude shifted by whole turns into the range `[-180, 180]`.
	///
	/// Values already inside the range are returned unchanged, so both `-180` and `180`
	/// survive. Non-finite values are returned as they are.
	///
	/// # Examples
	/// ```
	/// use markup_tiles_core::GeoPoint;
	///
	/// assert_eq!(GeoPoint::new(0.0, 190.0).wrapped_lng(), -170.0);
	/// assert_eq!(GeoPoint::new(0.0, -540.0).wrapped_lng(), -180.0);
	/// assert_eq!(GeoPoint::new(0.0, 180.0).wrapped_lng(), 180.0);
	/// ```
	#[must_use]
	pub fn wrapped_lng(&self) -> f64 {
		wrap_lng(self.lng)
	}

	/// Returns the point as `[lat, lng]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 2] {
		[self.lat, self.lng]
	}
}

/// Shifts `lng` by multiples of 360 until it is no longer outside `[-180, 180]`.
pub(crate) fn wrap_lng(lng: f64) -> f64 {
	if !lng.is_finite() {
		return lng;
	}
	if lng > 180.0 {
		lng - 360.0 * ((lng - 180.0) / 360.0).ceil()
	} else if lng < -180.0 {
		lng + 360.0 * ((-180.0 - lng) / 360.0).ceil()
	} else {
		lng
	}
}

impl Debug for GeoPoint {
	/// Formats the `GeoPoint` as `"GeoPoint(lat, lng)"`.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "GeoPoint({}, {})", self.lat, self.lng)
	}
}

impl FromStr for GeoPoint {
	type Err = anyhow::Error;

	/// Parses `"lat,lng"`, surrounding whitespace is ignored.
	fn from_str(s: &str) -> Result<Self> {
		let values = s
			.split(',')
			.map(|v| v.trim().parse::<f64>())
			.collect::<Result<Vec<f64>, _>>()
			.with_context(|| format!("point '{s}' must be formatted as 'lat,lng'"))?;
		GeoPoint::try_from(values).with_context(|| format!("Failed to parse point '{s}'"))
	}
}

impl TryFrom<Vec<f64>> for GeoPoint {
	type Error = anyhow::Error;

	/// Attempts to construct a `GeoPoint` from a `Vec<f64>` with exactly two elements:
	/// `[lat, lng]`.
	fn try_from(input: Vec<f64>) -> Result<Self> {
		ensure!(input.len() == 2, "point must have 2 elements: [lat, lng]");
		Ok(GeoPoint::new(input[0], input[1]))
	}
}

impl From<[f64; 2]> for GeoPoint {
	fn from(input: [f64; 2]) -> Self {
		GeoPoint::new(input[0], input[1])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0.0, 0.0)]
	#[case(179.9, 179.9)]
	#[case(180.0, 180.0)]
	#[case(-180.0, -180.0)]
	#[case(180.5, -179.5)]
	#[case(-180.5, 179.5)]
	#[case(360.0, 0.0)]
	#[case(-360.0, 0.0)]
	#[case(540.0, 180.0)]
	#[case(-540.0, -180.0)]
	#[case(725.0, 5.0)]
	#[case(-1085.0, -5.0)]
	fn wrapped_lng(#[case] lng: f64, #[case] expected: f64) {
		assert_eq!(GeoPoint::new(0.0, lng).wrapped_lng(), expected);
	}

	#[test]
	fn wrapped_lng_keeps_non_finite() {
		assert!(GeoPoint::new(0.0, f64::NAN).wrapped_lng().is_nan());
		assert_eq!(GeoPoint::new(0.0, f64::INFINITY).wrapped_lng(), f64::INFINITY);
	}

	#[rstest]
	#[case(0.0, 0.0, true)]
	#[case(90.0, 720.0, true)]
	#[case(-90.0, -180.0, true)]
	#[case(90.1, 0.0, false)]
	#[case(-90.1, 0.0, false)]
	#[case(0.0, f64::INFINITY, false)]
	#[case(0.0, f64::NAN, false)]
	fn check(#[case] lat: f64, #[case] lng: f64, #[case] ok: bool) {
		assert_eq!(GeoPoint::new(lat, lng).check().is_ok(), ok);
	}

	#[rstest]
	#[case("52.52,13.40", Some([52.52, 13.40]))]
	#[case(" -33.86 , 151.21 ", Some([-33.86, 151.21]))]
	#[case("0,-90", Some([0.0, -90.0]))]
	#[case("1,2,3", None)]
	#[case("1", None)]
	#[case("north,east", None)]
	#[case("", None)]
	fn from_str(#[case] input: &str, #[case] expected: Option<[f64; 2]>) {
		assert_eq!(input.parse::<GeoPoint>().ok().map(|p| p.as_array()), expected);
	}

	#[test]
	fn try_from_vec() -> Result<()> {
		assert_eq!(GeoPoint::try_from(vec![1.0, 2.0])?, GeoPoint::new(1.0, 2.0));
		assert!(GeoPoint::try_from(vec![1.0]).is_err());
		Ok(())
	}

	#[test]
	fn from_array() {
		let point = GeoPoint::from([48.5, -3.25]);
		assert_eq!(point, GeoPoint::new(48.5, -3.25));
		assert_eq!(point.as_array(), [48.5, -3.25]);
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", GeoPoint::new(-5.5, 10.0)), "GeoPoint(-5.5, 10)");
	}
}
