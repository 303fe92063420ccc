//! Value types shared by the projection: tile addresses, tile sizes, geographic and pixel points.

pub mod constants;

mod geo_bounds;
pub use geo_bounds::*;

mod geo_point;
pub use geo_point::*;
pub(crate) use geo_point::wrap_lng;

mod pixel_point;
pub use pixel_point::*;

mod tile_address;
pub use tile_address::*;

mod tile_size;
pub use tile_size::*;
