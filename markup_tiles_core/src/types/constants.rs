//! Projection constants used across the markup tiles workspace.

/// Upper bound applied to `sin(latitude)` before the Mercator log transform.
///
/// Keeps `ln((1 + s) / (1 - s))` finite at the poles.
pub const SIN_LAT_LIMIT: f64 = 0.9999;

/// Latitude in degrees at which [`SIN_LAT_LIMIT`] takes effect, equals `asin(0.9999)`.
///
/// Points closer to a pole than this are projected as if they were on this parallel,
/// roughly a third of a tile past the edge of the world tile.
pub const CLAMPED_MAX_LAT: f64 = 89.189_708_562_934_36;

/// Maximum latitude in degrees covered by the square Web Mercator world (EPSG:3857).
///
/// Equals `atan(sinh(PI))` in degrees.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// Edge length in pixels of a markup overlay tile.
pub const DEFAULT_TILE_SIZE: u32 = 768;

/// Highest zoom level accepted by validated tile addresses.
pub const MAX_LEVEL: u8 = 30;
