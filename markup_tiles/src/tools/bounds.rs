use anyhow::Result;
use markup_tiles_core::{TileAddress, TileProjection, TileSize};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Zoom level of the tile
	level: u8,

	/// Column of the tile, counted from the antimeridian eastward
	x: u32,

	/// Row of the tile, counted from the north edge southward
	y: u32,

	/// Tile edge length in pixels
	#[arg(long, short = 's', default_value_t = TileSize::default())]
	tile_size: TileSize,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let address = TileAddress::new(arguments.level, arguments.x, arguments.y)?;
	let projection = TileProjection::for_tile(arguments.tile_size, address);

	let bounds = projection.tile_bounds();
	log::debug!("{projection:?} covers {bounds:?}");

	println!("{}", bounds.as_string_json());
	Ok(())
}
