//! Spherical Web Mercator projection between longitude/latitude and tile space.
//!
//! Tile space at zoom `z` is the square `[0, 2^z) × [0, 2^z)`, with `x` growing
//! eastwards from the antimeridian and `y` growing southwards from the north edge.
//!
//! # Examples
//!
//! ```
//! use quadtile_core::{Tile, point_to_tile_fraction, tile_to_bbox};
//!
//! let fraction = point_to_tile_fraction(0.0, 0.0, 1);
//! assert_eq!((fraction.x, fraction.y), (1.0, 1.0));
//!
//! let bbox = tile_to_bbox(&Tile::new(0, 0, 0));
//! assert_eq!(bbox.west, -180.0);
//! assert_eq!(bbox.east, 180.0);
//! ```

use crate::{BBox, Tile, TileFraction};
use std::f64::consts::PI;

const D2R: f64 = PI / 180.0;
const R2D: f64 = 180.0 / PI;

/// Number of tiles along one side of the grid, as a float.
fn grid_size(z: u8) -> f64 {
	2.0f64.powi(i32::from(z))
}

/// Project a point to its exact position in tile space at zoom `z`.
///
/// `x` is wrapped into `[0, 2^z)`, so longitudes past ±180° continue on the other side
/// of the antimeridian. `y` is not wrapped or clamped: latitudes beyond the Mercator
/// limit land outside `[0, 2^z)`, and ±90° give infinities.
pub fn point_to_tile_fraction(lon: f64, lat: f64, z: u8) -> TileFraction {
	let sin = (lat * D2R).sin();
	let z2 = grid_size(z);
	let mut x = z2 * (lon / 360.0 + 0.5);
	let y = z2 * (0.5 - (0.25 * ((1.0 + sin) / (1.0 - sin)).ln()) / PI);

	x %= z2;
	if x < 0.0 {
		x += z2;
	}
	TileFraction::new(x, y, z)
}

/// Longitude of the western edge of column `x` at zoom `z`.
///
/// `x` is a float so that the edge past the last column of an `i64` index can still be
/// computed.
pub fn tile_to_lon(x: f64, z: u8) -> f64 {
	(x / grid_size(z)) * 360.0 - 180.0
}

/// Latitude of the northern edge of row `y` at zoom `z`.
pub fn tile_to_lat(y: f64, z: u8) -> f64 {
	let n = PI - (2.0 * PI * y) / grid_size(z);
	R2D * (0.5 * (n.exp() - (-n).exp())).atan()
}

/// Geographic extent of a tile.
///
/// The north edge comes from row `y` and the south edge from row `y + 1`, because rows
/// are counted from the north. Out-of-range rows, such as the sentinels produced for
/// the poles, give latitudes clamped to ±90° instead of failing.
pub fn tile_to_bbox(tile: &Tile) -> BBox {
	let (x, y) = (tile.x as f64, tile.y as f64);
	BBox::new(
		tile_to_lon(x, tile.z),
		tile_to_lat(y + 1.0, tile.z),
		tile_to_lon(x + 1.0, tile.z),
		tile_to_lat(y, tile.z),
	)
}
