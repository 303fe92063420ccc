use anyhow::Result;
use markup_tiles_core::{GeoPoint, TileAddress};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Zoom level of the tile grid
	level: u8,

	/// Point formatted as "lat,lng"
	#[arg(value_name = "LAT,LNG", allow_hyphen_values = true)]
	point: GeoPoint,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let address = TileAddress::from_geo(arguments.level, &arguments.point)?;
	log::debug!("{:?} is in {address:?}", arguments.point);

	println!("{}", address.as_path());
	Ok(())
}
