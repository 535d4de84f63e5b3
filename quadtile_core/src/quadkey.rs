//! Quadkeys: base-4 strings spelling out a tile's path from the root of the tree.
//!
//! Each digit picks one quadrant per zoom level, root first:
//!
//! | digit | x bit | y bit |
//! |-------|-------|-------|
//! | `0`   | 0     | 0     |
//! | `1`   | 1     | 0     |
//! | `2`   | 0     | 1     |
//! | `3`   | 1     | 1     |
//!
//! # Examples
//!
//! ```
//! use quadtile_core::{Tile, quadkey_to_tile, tile_to_quadkey};
//!
//! assert_eq!(tile_to_quadkey(&Tile::new(11, 3, 8)), "00001033");
//! assert_eq!(quadkey_to_tile("00001033").unwrap(), Tile::new(11, 3, 8));
//! assert!(quadkey_to_tile("0041").is_err());
//! ```

use crate::{MAX_ZOOM, Tile};
use anyhow::{Result, bail, ensure};

/// Bit `level - 1` of a coordinate. Bits beyond the width of `i64` read as 0.
fn bit(value: i64, level: u8) -> bool {
	value.checked_shr(u32::from(level) - 1).is_some_and(|v| v & 1 == 1)
}

fn digit(x_bit: bool, y_bit: bool) -> char {
	match (x_bit, y_bit) {
		(false, false) => '0',
		(true, false) => '1',
		(false, true) => '2',
		(true, true) => '3',
	}
}

/// The quadkey of a tile: `z` digits, root quadrant first. Zoom 0 gives the empty key.
pub fn tile_to_quadkey(tile: &Tile) -> String {
	(1..=tile.z)
		.rev()
		.map(|level| digit(bit(tile.x, level), bit(tile.y, level)))
		.collect()
}

/// The tile a quadkey points to. The empty key is the root tile `0/0/0`.
///
/// # Errors
/// Returns an error if the key contains anything but the digits `0` to `3`, or if it is
/// longer than 32 digits.
pub fn quadkey_to_tile(quadkey: &str) -> Result<Tile> {
	ensure!(
		quadkey.len() <= usize::from(MAX_ZOOM),
		"quadkey {quadkey:?} is longer than {MAX_ZOOM} digits"
	);

	let z = quadkey.len() as u8;
	let (mut x, mut y) = (0i64, 0i64);
	for (index, c) in quadkey.chars().enumerate() {
		let mask = 1i64 << (usize::from(z) - index - 1);
		match c {
			'0' => {}
			'1' => x |= mask,
			'2' => y |= mask,
			'3' => {
				x |= mask;
				y |= mask;
			}
			_ => {
				log::debug!("rejecting quadkey {quadkey:?}");
				bail!("invalid character {c:?} at position {index} of quadkey {quadkey:?}")
			}
		}
	}
	Ok(Tile::new(x, y, z))
}
