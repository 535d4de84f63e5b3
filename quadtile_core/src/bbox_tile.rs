//! Smallest tile enclosing a bounding box.
//!
//! Both corners of the box are projected to zoom 32, where a tile coordinate is a 32-bit
//! word. The enclosing tile is the one addressed by the longest common bit prefix of the
//! corners' x words and y words.

use crate::{BBox, Tile, point_to_tile_fraction};

/// Corners are compared at this zoom, one bit per level.
const WORD_ZOOM: u8 = 32;
/// Deepest zoom `bbox_to_tile` will descend to.
pub const MAX_BBOX_ZOOM: u8 = 28;

/// Two's-complement low 32 bits of a floored tile coordinate. Non-finite values give 0.
fn to_word(coordinate: f64) -> u32 {
	if coordinate.is_finite() {
		coordinate.floor().rem_euclid(4_294_967_296.0) as u32
	} else {
		0
	}
}

/// Number of leading bits shared by both the x words and the y words of two corners,
/// capped at [`MAX_BBOX_ZOOM`].
pub fn bbox_zoom(min: [u32; 2], max: [u32; 2]) -> u8 {
	for z in 0..MAX_BBOX_ZOOM {
		let mask = 1u32 << (31 - z);
		if (min[0] & mask) != (max[0] & mask) || (min[1] & mask) != (max[1] & mask) {
			return z;
		}
	}
	MAX_BBOX_ZOOM
}

/// The lowest-zoom tile that fully contains `bbox`.
///
/// Degenerate boxes are not special-cased: a zero-area box yields a tile at zoom 28,
/// and a box whose corners straddle a top-level split yields the root tile.
///
/// # Examples
/// ```
/// use quadtile_core::{BBox, Tile, bbox_to_tile};
///
/// assert_eq!(bbox_to_tile(&BBox::new(-10.0, -10.0, 10.0, 10.0)), Tile::new(0, 0, 0));
/// assert_eq!(bbox_to_tile(&BBox::new(-84.0, 11.0, -84.0, 11.0)), Tile::new(71582788, 125964677, 28));
/// ```
pub fn bbox_to_tile(bbox: &BBox) -> Tile {
	let min = point_to_tile_fraction(bbox.west, bbox.south, WORD_ZOOM);
	let max = point_to_tile_fraction(bbox.east, bbox.north, WORD_ZOOM);
	let min = [to_word(min.x), to_word(min.y)];
	let max = [to_word(max.x), to_word(max.y)];

	let z = bbox_zoom(min, max);
	log::trace!("bbox {bbox} encloses in a tile at zoom {z}");
	if z == 0 {
		return Tile::new(0, 0, 0);
	}

	let shift = u32::from(WORD_ZOOM - z);
	Tile::new(i64::from(min[0] >> shift), i64::from(min[1] >> shift), z)
}
