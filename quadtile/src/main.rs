mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Find the tile containing a point
	Point(tools::point::Subcommand),

	/// Encode a tile as a quadkey
	Quadkey(tools::quadkey::Subcommand),

	/// Decode a quadkey into a tile
	Tile(tools::tile::Subcommand),

	/// Show the geographic extent of a tile
	Bbox(tools::bbox::Subcommand),

	/// Find the smallest tile covering a bounding box
	Cover(tools::cover::Subcommand),

	/// List the parent, children, siblings or neighbors of a tile
	Family(tools::family::Subcommand),

	/// Write tiles as a GeoJSON FeatureCollection
	Features(tools::features::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	log::debug!("running {:?}", cli.command);
	match &cli.command {
		Commands::Point(arguments) => tools::point::run(arguments),
		Commands::Quadkey(arguments) => tools::quadkey::run(arguments),
		Commands::Tile(arguments) => tools::tile::run(arguments),
		Commands::Bbox(arguments) => tools::bbox::run(arguments),
		Commands::Cover(arguments) => tools::cover::run(arguments),
		Commands::Family(arguments) => tools::family::run(arguments),
		Commands::Features(arguments) => tools::features::run(arguments),
	}
}
