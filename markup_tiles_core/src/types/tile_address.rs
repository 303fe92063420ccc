//! Grid addresses of tiles in a slippy-map pyramid
//!
//! This module provides the [`TileAddress`] type. The projection accepts raw indices and never
//! validates them; `TileAddress` is the place where callers check them before building one.
//!
//! # Examples
//!
//! ```
//! use markup_tiles_core::{GeoPoint, TileAddress};
//!
//! let address = TileAddress::new(5, 6, 7).unwrap();
//! assert_eq!(address.num_tiles(), 32);
//!
//! // Berlin at zoom 10
//! let berlin = TileAddress::from_geo(10, &GeoPoint::new(52.520008, 13.404954)).unwrap();
//! assert_eq!(berlin.as_path(), "10/550/335");
//! ```

use crate::{
	GeoPoint,
	constants::{MAX_LEVEL, MAX_MERCATOR_LAT},
	types::wrap_lng,
};
use anyhow::{Result, ensure};
use std::{
	f64::consts::PI,
	fmt::{self, Debug},
};

/// Address of a tile in the power-of-two grid of zoom `level`, `x` counted from the
/// antimeridian eastward and `y` counted from the north edge southward.
#[derive(Eq, PartialEq, Clone, Hash, Copy)]
pub struct TileAddress {
	/// The zoom level of the tile.
	pub level: u8,
	/// The x index of the tile.
	pub x: u32,
	/// The y index of the tile.
	pub y: u32,
}

impl TileAddress {
	/// Create a new `TileAddress` at the given zoom `level` and tile indices `x`, `y`.
	///
	/// # Errors
	/// Returns an error if `level` > 30 or if `x` or `y` lie outside the grid of that level.
	pub fn new(level: u8, x: u32, y: u32) -> Result<TileAddress> {
		ensure!(level <= MAX_LEVEL, "level ({level}) must be <= {MAX_LEVEL}");
		let max = 1u32 << level;
		ensure!(x < max, "x ({x}) out of bounds for level {level}");
		ensure!(y < max, "y ({y}) out of bounds for level {level}");
		Ok(TileAddress { level, x, y })
	}

	/// Returns the address of the tile containing `point` at zoom `level`.
	///
	/// Longitude is wrapped into `[-180, 180]`, latitude beyond the Web Mercator limit lands
	/// in the first or last row.
	///
	/// # Errors
	///
	/// Returns an error if `level` > 30 or the point fails [`GeoPoint::check`].
	pub fn from_geo(level: u8, point: &GeoPoint) -> Result<TileAddress> {
		ensure!(level <= MAX_LEVEL, "level ({level}) must be <= {MAX_LEVEL}");
		point.check()?;

		let lng = wrap_lng(point.lng);
		let lat = point.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);

		let zoom = f64::from(1u32 << level);
		let x = zoom * (lng / 360.0 + 0.5);
		let y = zoom * (0.5 - 0.5 * (lat * PI / 360.0 + PI / 4.0).tan().ln() / PI);

		let address = TileAddress::new(
			level,
			x.min(zoom - 1.0).max(0.0).floor() as u32,
			y.min(zoom - 1.0).max(0.0).floor() as u32,
		)?;
		log::trace!("{point:?} lies in {address:?}");
		Ok(address)
	}

	/// Number of tiles along one axis, `2^level`.
	pub fn num_tiles(&self) -> u64 {
		1u64 << self.level
	}

	/// Largest valid x or y index at this level, `2^level - 1`.
	pub fn max_index(&self) -> u32 {
		((1u64 << self.level) - 1) as u32
	}

	/// Formats the address as `level/x/y`, the order used in tile URLs.
	#[must_use]
	pub fn as_path(&self) -> String {
		format!("{}/{}/{}", self.level, self.x, self.y)
	}
}

/// Custom `Debug` format as `TileAddress(level, [x, y])` for readability.
impl Debug for TileAddress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_fmt(format_args!("TileAddress({}, [{}, {}])", &self.level, &self.x, &self.y))
	}
}
