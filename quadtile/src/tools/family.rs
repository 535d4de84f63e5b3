use anyhow::Result;
use clap::{Args, ValueEnum};
use quadtile_core::{Tile, children, neighbors, parent, siblings};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// tile written as z/x/y
	#[arg(required = true)]
	tile: Tile,

	/// which related tiles to list
	#[arg(required = true, value_enum)]
	relation: Relation,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Relation {
	Parent,
	Children,
	Siblings,
	Neighbors,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let tile = &arguments.tile;
	let tiles: Vec<Tile> = match arguments.relation {
		Relation::Parent => vec![parent(tile)?],
		Relation::Children => children(tile).to_vec(),
		Relation::Siblings => siblings(tile)?.to_vec(),
		Relation::Neighbors => neighbors(tile),
	};
	for tile in tiles {
		println!("{tile}");
	}
	Ok(())
}
