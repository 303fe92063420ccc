use anyhow::{Context, Result};
use markup_tiles_core::{GeoPoint, TileAddress, TileProjection, TileSize};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Zoom level of the tile
	level: u8,

	/// Column of the tile, counted from the antimeridian eastward
	x: u32,

	/// Row of the tile, counted from the north edge southward
	y: u32,

	/// Points formatted as "lat,lng"
	/// Prints one "x,y" line per point, in pixels from the tile's top-left corner.
	#[arg(required = true, value_name = "LAT,LNG", allow_hyphen_values = true, verbatim_doc_comment)]
	points: Vec<GeoPoint>,

	/// Tile edge length in pixels
	#[arg(long, short = 's', default_value_t = TileSize::default())]
	tile_size: TileSize,

	/// Pixels a marker may hang over the tile edge and still count as on the tile
	#[arg(long, short = 'm', default_value = "0")]
	margin: f64,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let address = TileAddress::new(arguments.level, arguments.x, arguments.y)?;
	let projection = TileProjection::for_tile(arguments.tile_size, address);
	log::debug!("projecting {} point(s) with {projection:?}", arguments.points.len());

	for point in &arguments.points {
		point.check().with_context(|| format!("invalid point {point:?}"))?;

		let pixel = projection.project(point);
		if !pixel.is_inside_tile(arguments.tile_size.size(), arguments.margin) {
			log::info!("{point:?} is outside of {address:?} at {pixel:?}");
		}
		println!("{},{}", pixel.x, pixel.y);
	}
	Ok(())
}
