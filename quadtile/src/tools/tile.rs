use anyhow::Result;
use clap::Args;
use quadtile_core::quadkey_to_tile;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// quadkey made of the digits 0 to 3
	#[arg(required = true)]
	quadkey: String,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	println!("{}", quadkey_to_tile(&arguments.quadkey)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn tile() {
		run_command(vec!["quadtile", "tile", "00001033"]).unwrap();
	}

	#[test]
	fn malformed() {
		let err = run_command(vec!["quadtile", "tile", "0041"]).unwrap_err();
		assert_eq!(err.to_string(), "invalid character '4' at position 2 of quadkey \"0041\"");
	}
}
