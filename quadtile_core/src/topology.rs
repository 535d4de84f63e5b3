//! Parent, child, sibling and neighbour relations in the tile quadtree.
//!
//! These functions work on tile indices alone and never touch the projection.
//!
//! # Examples
//!
//! ```
//! use quadtile_core::{Tile, children, parent};
//!
//! let tile = Tile::new(5, 10, 10);
//! let up = parent(&tile).unwrap();
//! assert_eq!(up, Tile::new(2, 5, 9));
//! assert!(children(&up).contains(&tile));
//! ```

use crate::{MAX_ZOOM, Tile};
use anyhow::{Result, ensure};

/// The four tiles one zoom level deeper, in the order top-left, top-right,
/// bottom-right, bottom-left.
///
/// The order matches the quadkey digits 0, 1, 3, 2.
///
/// Index arithmetic wraps on overflow, so sentinel rows such as `i64::MIN` give
/// meaningless but well-defined children. The zoom saturates at `u8::MAX`.
pub fn children(tile: &Tile) -> [Tile; 4] {
	let (x, y) = (tile.x.wrapping_mul(2), tile.y.wrapping_mul(2));
	let (x1, y1) = (x.wrapping_add(1), y.wrapping_add(1));
	let z = tile.z.saturating_add(1);
	[Tile::new(x, y, z), Tile::new(x1, y, z), Tile::new(x1, y1, z), Tile::new(x, y1, z)]
}

/// The tile one zoom level up that contains `tile`.
///
/// # Errors
/// Returns an error for a zoom 0 tile, which is the root of the tree.
pub fn parent(tile: &Tile) -> Result<Tile> {
	ensure!(tile.z > 0, "tile {tile} at zoom 0 has no parent");
	Ok(Tile::new(tile.x >> 1, tile.y >> 1, tile.z - 1))
}

/// All four children of this tile's parent, the tile itself included.
///
/// # Errors
/// Returns an error for a zoom 0 tile.
pub fn siblings(tile: &Tile) -> Result<[Tile; 4]> {
	Ok(children(&parent(tile)?))
}

/// Structural equality of two tiles.
pub fn tiles_equal(a: &Tile, b: &Tile) -> bool {
	a.x == b.x && a.y == b.y && a.z == b.z
}

/// Whether `tiles` contains a tile equal to `tile`. Linear scan, no ordering assumed.
pub fn has_tile(tiles: &[Tile], tile: &Tile) -> bool {
	tiles.iter().any(|t| tiles_equal(t, tile))
}

/// Whether every sibling of `tile` (itself included) is present in `tiles`.
///
/// # Errors
/// Returns an error for a zoom 0 tile.
pub fn has_siblings(tile: &Tile, tiles: &[Tile]) -> Result<bool> {
	Ok(siblings(tile)?.iter().all(|sibling| has_tile(tiles, sibling)))
}

/// The tiles around `tile` at the same zoom level, row by row from the north-west.
///
/// Columns wrap around the antimeridian. Rows above the first or below the last row of
/// the grid are left out, so tiles on the top or bottom edge have five neighbours.
/// Wrapped duplicates at zoom 0 and 1 appear once, and the tile itself never does.
/// Zoom levels above [`MAX_ZOOM`] have no grid to wrap around and give no neighbours.
pub fn neighbors(tile: &Tile) -> Vec<Tile> {
	if tile.z > MAX_ZOOM {
		log::debug!("tile {tile} is deeper than zoom {MAX_ZOOM} and has no neighbors");
		return Vec::new();
	}
	let size = Tile::grid_size(tile.z);
	let x = tile.x.rem_euclid(size);
	let mut result = Vec::with_capacity(8);
	for dy in -1..=1 {
		let Some(y) = tile.y.checked_add(dy) else {
			continue;
		};
		if !(0..size).contains(&y) {
			continue;
		}
		for dx in -1..=1 {
			let neighbor = Tile::new((x + dx).rem_euclid(size), y, tile.z);
			if !tiles_equal(&neighbor, tile) && !has_tile(&result, &neighbor) {
				result.push(neighbor);
			}
		}
	}
	result
}
