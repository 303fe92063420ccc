mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	name = "markup-tiles", // Match the binary name
	author, // Set the author
	version, // Set the version
	about, // Set a short description
	long_about = None, // Disable long description
	propagate_version = true, // Enable version flag for subcommands
	disable_help_subcommand = true, // Disable help subcommand
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Print the geographic bounds of a tile
	Bounds(tools::bounds::Subcommand),

	/// Project geographic points into the pixels of a tile
	Project(tools::project::Subcommand),

	/// Find the tile containing a geographic point
	Locate(tools::locate::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	// Initialize logger and set log level based on verbosity flag
	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Bounds(arguments) => tools::bounds::run(arguments),
		Commands::Project(arguments) => tools::project::run(arguments),
		Commands::Locate(arguments) => tools::locate::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{:?}", cli);
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["markup-tiles"]).unwrap_err().to_string();
		assert!(err.starts_with("Projection of geographic markup onto slippy-map tiles."));
		assert!(err.contains("\nUsage: markup-tiles [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["markup-tiles", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("markup-tiles "));
	}

	#[test]
	fn bounds_subcommand() {
		let output = run_command(vec!["markup-tiles", "bounds"]).unwrap_err().to_string();
		assert!(output.starts_with("Print the geographic bounds of a tile"));
	}

	#[test]
	fn project_subcommand() {
		let output = run_command(vec!["markup-tiles", "project"]).unwrap_err().to_string();
		assert!(output.starts_with("Project geographic points into the pixels of a tile"));
	}

	#[test]
	fn locate_subcommand() {
		let output = run_command(vec!["markup-tiles", "locate"]).unwrap_err().to_string();
		assert!(output.starts_with("Find the tile containing a geographic point"));
	}
}
