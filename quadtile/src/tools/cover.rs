use anyhow::Result;
use clap::Args;
use quadtile_core::{BBox, bbox_to_tile};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, allow_negative_numbers = true)]
pub struct Subcommand {
	/// western longitude
	#[arg(required = true)]
	west: f64,

	/// southern latitude
	#[arg(required = true)]
	south: f64,

	/// eastern longitude
	#[arg(required = true)]
	east: f64,

	/// northern latitude
	#[arg(required = true)]
	north: f64,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let bbox = BBox::new(arguments.west, arguments.south, arguments.east, arguments.north);
	if !bbox.is_well_formed() {
		log::warn!("bbox {bbox} has no area or is inverted");
	}
	println!("{}", bbox_to_tile(&bbox));
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn cover() {
		run_command(vec!["quadtile", "cover", "-10", "-10", "10", "10"]).unwrap();
		run_command(vec!["quadtile", "cover", "-84", "11", "-84", "11"]).unwrap();
	}

	#[test]
	fn missing_values() {
		assert!(run_command(vec!["quadtile", "cover", "-10", "-10", "10"]).is_err());
	}
}
