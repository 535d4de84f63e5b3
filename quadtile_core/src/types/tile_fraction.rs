use super::Tile;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Exact position of a point in tile-grid units at zoom level `z`.
///
/// Produced by [`point_to_tile_fraction`](crate::point_to_tile_fraction); [`floor`](Self::floor)
/// turns it into the [`Tile`] that contains the point.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileFraction {
	pub x: f64,
	pub y: f64,
	pub z: u8,
}

impl TileFraction {
	pub const fn new(x: f64, y: f64, z: u8) -> TileFraction {
		TileFraction { x, y, z }
	}

	/// Floor both coordinates toward negative infinity.
	///
	/// NaN becomes 0 and infinities saturate at the `i64` limits.
	pub fn floor(&self) -> Tile {
		Tile::new(self.x.floor() as i64, self.y.floor() as i64, self.z)
	}
}

impl Debug for TileFraction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_fmt(format_args!("TileFraction({}, [{}, {}])", &self.z, &self.x, &self.y))
	}
}
