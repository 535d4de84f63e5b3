use anyhow::Result;
use clap::Args;
use quadtile_core::{Tile, tiles_to_feature_collection};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// tiles written as z/x/y
	#[arg(required = true, num_args = 1..)]
	tiles: Vec<Tile>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	log::debug!("writing {} tiles", arguments.tiles.len());
	println!("{}", tiles_to_feature_collection(&arguments.tiles).to_json()?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn features() {
		run_command(vec!["quadtile", "features", "5/0/0", "5/0/1", "5/1/1", "5/1/0"]).unwrap();
	}
}
