//! Tile-space projection of geographic coordinates.

mod tile_projection;
pub use tile_projection::*;
