use anyhow::Result;
use clap::Args;
use quadtile_core::{Tile, tile_to_quadkey};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// tile written as z/x/y
	#[arg(required = true)]
	tile: Tile,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let tile = Tile::checked(arguments.tile.x, arguments.tile.y, arguments.tile.z)?;
	println!("{}", tile_to_quadkey(&tile));
	Ok(())
}
