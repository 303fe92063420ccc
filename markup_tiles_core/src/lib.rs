//! Contains the value types (tile addresses, geographic points, pixel points, bounds) and the
//! tile-space projection used to place markup overlays on slippy-map tiles.

pub mod projection;
pub use projection::*;

pub mod types;
pub use types::*;
