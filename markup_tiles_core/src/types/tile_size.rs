use crate::constants::DEFAULT_TILE_SIZE;
use anyhow::{Context, Result, ensure};
use std::{
	fmt::{self, Debug, Display},
	str::FromStr,
};

/// Edge length of a square tile in pixels.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSize(u32);

impl TileSize {
	/// Creates a tile size, rejecting zero.
	///
	/// # Examples
	/// ```
	/// use markup_tiles_core::TileSize;
	///
	/// assert_eq!(TileSize::new(512).unwrap().size(), 512);
	/// assert!(TileSize::new(0).is_err());
	/// ```
	pub fn new(size: u32) -> Result<Self> {
		ensure!(size > 0, "Invalid tile size: {size}. Tile size must be positive.");
		Ok(Self(size))
	}

	/// Returns the size of the tile in pixels.
	pub fn size(&self) -> u32 {
		self.0
	}
}

impl Default for TileSize {
	fn default() -> Self {
		Self(DEFAULT_TILE_SIZE)
	}
}

impl Debug for TileSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileSize({})", self.0)
	}
}

impl Display for TileSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for TileSize {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		let size = s
			.trim()
			.parse::<u32>()
			.with_context(|| format!("tile size '{s}' is not a positive integer"))?;
		TileSize::new(size)
	}
}
