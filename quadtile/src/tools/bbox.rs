use anyhow::Result;
use clap::Args;
use quadtile_core::{Tile, tile_to_bbox, tile_to_geojson};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// tile written as z/x/y
	#[arg(required = true)]
	tile: Tile,

	/// print the tile outline as a GeoJSON polygon instead of [west, south, east, north]
	#[arg(long, short)]
	geojson: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	if arguments.geojson {
		println!("{}", tile_to_geojson(&arguments.tile).to_json()?);
	} else {
		println!("{}", tile_to_bbox(&arguments.tile));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn bbox() {
		run_command(vec!["quadtile", "bbox", "10/5/10"]).unwrap();
		run_command(vec!["quadtile", "bbox", "--geojson", "0/0/0"]).unwrap();
	}
}
