//! Projection between geographic coordinates and the pixels of one map tile.
//!
//! Three pixel planes are involved:
//! - *world pixels*: the whole map at zoom 0, a square of `tile_size` pixels
//! - *map pixels*: the whole map at the tile's zoom, `tile_size * 2^zoom` pixels wide
//! - *tile-local pixels*: map pixels relative to the tile's top-left corner
//!
//! [`TileProjection::project`] goes geo → world → map → tile-local, [`TileProjection::unproject`]
//! walks the same chain backwards. Both are pure arithmetic: no validation, no allocation,
//! no failure. Latitude is clamped through [`SIN_LAT_LIMIT`] so the result stays finite at the
//! poles.

use crate::{
	GeoBounds, GeoPoint, PixelPoint, TileAddress, TileSize, constants::SIN_LAT_LIMIT,
	types::wrap_lng,
};
use std::{
	f64::consts::{FRAC_PI_2, PI},
	fmt::{self, Debug},
};

/// Projection for a single tile `(x, y, zoom)` of `tile_size` pixels.
///
/// Built once per tile and never mutated; a different tile or zoom needs a new projection.
/// The type is `Copy`, `Send` and `Sync`, so a single instance can serve any number of threads.
///
/// # Examples
/// ```
/// use markup_tiles_core::{GeoPoint, TileProjection};
///
/// let projection = TileProjection::new(768, 0, 1, 1);
/// let pixel = projection.project(&GeoPoint::new(0.0, -90.0));
/// assert!((pixel.x - 384.0).abs() < 1e-9);
/// assert!(pixel.y.abs() < 1e-9);
///
/// let bounds = projection.tile_bounds();
/// assert!((bounds.south() + 85.0511287798066).abs() < 1e-9);
/// assert!(bounds.north().abs() < 1e-9);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct TileProjection {
	x: u32,
	y: u32,
	zoom: u8,
	tile_size: f64,
	pixel_origin: PixelPoint,
	pixels_per_lon_degree: f64,
	pixels_per_lon_radian: f64,
}

impl TileProjection {
	/// Creates the projection for tile `(x, y)` at `zoom` with tiles of `tile_size` pixels.
	///
	/// Nothing is validated. Indices outside the grid of `zoom` still produce a projection,
	/// it just describes a tile that does not exist; use [`TileAddress::new`] and
	/// [`TileSize::new`] to check untrusted input first.
	pub fn new(tile_size: u32, x: u32, y: u32, zoom: u8) -> TileProjection {
		let tile_size = f64::from(tile_size);
		let origin = tile_size / 2.0;

		TileProjection {
			x,
			y,
			zoom,
			tile_size,
			pixel_origin: PixelPoint::new(origin, origin),
			pixels_per_lon_degree: tile_size / 360.0,
			pixels_per_lon_radian: tile_size / (2.0 * PI),
		}
	}

	/// Creates the projection for a validated tile address.
	pub fn for_tile(tile_size: TileSize, address: TileAddress) -> TileProjection {
		TileProjection::new(tile_size.size(), address.x, address.y, address.level)
	}

	pub fn zoom(&self) -> u8 {
		self.zoom
	}

	pub fn x(&self) -> u32 {
		self.x
	}

	pub fn y(&self) -> u32 {
		self.y
	}

	/// Tile edge length in pixels.
	pub fn tile_size(&self) -> f64 {
		self.tile_size
	}

	/// The geographic area covered by the tile.
	///
	/// The southwest corner is the tile's bottom-left pixel, the northeast corner its
	/// top-right pixel.
	pub fn tile_bounds(&self) -> GeoBounds {
		let (left, top) = self.tile_offset();

		let southwest = PixelPoint::new(left, top + self.tile_size);
		let northeast = PixelPoint::new(left + self.tile_size, top);

		GeoBounds::new(
			self.world_to_geo(self.pixel_to_world(southwest)),
			self.world_to_geo(self.pixel_to_world(northeast)),
		)
	}

	/// Pixel position of `point` relative to the tile's top-left corner.
	///
	/// The result may lie outside `[0, tile_size]` when the point is not on this tile.
	/// Longitudes are wrapped so that points near the antimeridian land on the side of the
	/// map this tile is on.
	pub fn project(&self, point: &GeoPoint) -> PixelPoint {
		let map = self.world_to_pixel(self.geo_to_world(point));
		let (left, top) = self.tile_offset();
		PixelPoint::new(map.x - left, map.y - top)
	}

	/// Geographic position of a tile-local pixel, the inverse of [`project`](Self::project)
	/// for points whose latitude is inside the clamped range.
	///
	/// Longitude is returned unwrapped, so a pixel left of a tile at the western map edge
	/// yields a longitude below -180.
	pub fn unproject(&self, pixel: &PixelPoint) -> GeoPoint {
		let (left, top) = self.tile_offset();
		let map = PixelPoint::new(pixel.x + left, pixel.y + top);
		self.world_to_geo(self.pixel_to_world(map))
	}

	/// Returns `true` if `point` projects onto this tile, allowing `margin` pixels of overhang.
	pub fn contains(&self, point: &GeoPoint, margin: f64) -> bool {
		self.project(point).is_inside_tile(self.tile_size as u32, margin)
	}

	/// Map pixel position of the tile's top-left corner.
	fn tile_offset(&self) -> (f64, f64) {
		(f64::from(self.x) * self.tile_size, f64::from(self.y) * self.tile_size)
	}

	/// Number of tiles along one axis at this zoom.
	fn num_tiles(&self) -> f64 {
		2.0f64.powi(i32::from(self.zoom))
	}

	/// Map pixels → world pixels.
	fn pixel_to_world(&self, pixel: PixelPoint) -> PixelPoint {
		let num_tiles = self.num_tiles();
		PixelPoint::new(pixel.x / num_tiles, pixel.y / num_tiles)
	}

	/// World pixels → map pixels.
	fn world_to_pixel(&self, world: PixelPoint) -> PixelPoint {
		let num_tiles = self.num_tiles();
		PixelPoint::new(world.x * num_tiles, world.y * num_tiles)
	}

	fn world_to_geo(&self, world: PixelPoint) -> GeoPoint {
		let origin = self.pixel_origin;
		let lng = (world.x - origin.x) / self.pixels_per_lon_degree;
		let lat_radians = (world.y - origin.y) / -self.pixels_per_lon_radian;
		let lat = (2.0 * lat_radians.exp().atan() - FRAC_PI_2).to_degrees();
		GeoPoint::new(lat, lng)
	}

	fn geo_to_world(&self, point: &GeoPoint) -> PixelPoint {
		let origin = self.pixel_origin;
		let lng = self.wrap_for_tile(wrap_lng(point.lng));

		let sin_lat = clamp_sin_lat(point.lat.to_radians().sin());
		PixelPoint::new(
			origin.x + lng * self.pixels_per_lon_degree,
			origin.y + 0.5 * ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() * -self.pixels_per_lon_radian,
		)
	}

	/// Moves a longitude by a full turn towards the half of the map this tile is on.
	///
	/// Tiles right of `2^zoom / 2 - 1` (integer division, so `-1` at zoom 0) see western
	/// longitudes shifted east by 360, the others see eastern longitudes shifted west by 360.
	fn wrap_for_tile(&self, lng: f64) -> f64 {
		let threshold = (self.num_tiles() / 2.0).floor() - 1.0;
		let right_half = f64::from(self.x) > threshold;

		if lng < 0.0 && right_half {
			lng + 360.0
		} else if lng > 0.0 && !right_half {
			lng - 360.0
		} else {
			lng
		}
	}
}

fn clamp_sin_lat(value: f64) -> f64 {
	value.clamp(-SIN_LAT_LIMIT, SIN_LAT_LIMIT)
}

impl Debug for TileProjection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"TileProjection({}, [{}, {}], size {})",
			self.zoom, self.x, self.y, self.tile_size
		)
	}
}
