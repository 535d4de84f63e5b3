use anyhow::Result;
use clap::Args;
use quadtile_core::{point_to_tile, point_to_tile_fraction};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, allow_negative_numbers = true)]
pub struct Subcommand {
	/// longitude in degrees, wraps around the antimeridian
	#[arg(required = true)]
	lon: f64,

	/// latitude in degrees
	#[arg(required = true)]
	lat: f64,

	/// zoom level
	#[arg(required = true, value_parser = clap::value_parser!(u8).range(0..=32))]
	zoom: u8,

	/// print the exact position inside the tile grid instead of the tile
	#[arg(long, short)]
	fraction: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	if arguments.fraction {
		let fraction = point_to_tile_fraction(arguments.lon, arguments.lat, arguments.zoom);
		println!("{}/{}/{}", fraction.z, fraction.x, fraction.y);
	} else {
		let tile = point_to_tile(arguments.lon, arguments.lat, arguments.zoom);
		if !tile.is_valid() {
			log::warn!("point ({}, {}) lies outside the tile grid", arguments.lon, arguments.lat);
		}
		println!("{tile}");
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn point() {
		run_command(vec!["quadtile", "point", "-77.03239381313323", "38.91326516559442", "10"]).unwrap();
		run_command(vec!["quadtile", "point", "--fraction", "-95.9", "41.2", "9"]).unwrap();
	}

	#[test]
	fn zoom_out_of_range() {
		assert!(run_command(vec!["quadtile", "point", "0", "0", "33"]).is_err());
	}
}
