//! Tile indices in a quadtree tile pyramid
//!
//! A [`Tile`] addresses one cell of the `2^z × 2^z` grid that covers the world at zoom
//! level `z`. Rows are counted from the north, so `y = 0` is the top row.
//!
//! # Examples
//!
//! ```
//! use quadtile_core::Tile;
//!
//! let tile: Tile = "10/292/391".parse().unwrap();
//! assert_eq!(tile, Tile::new(292, 391, 10));
//! assert_eq!(tile.to_string(), "10/292/391");
//! assert!(tile.is_valid());
//! ```

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
	cmp::Ordering,
	fmt::{self, Debug, Display},
	str::FromStr,
};

/// Highest zoom level a tile can have while its x and y still fit into 32 bits.
pub const MAX_ZOOM: u8 = 32;

/// A tile index `(x, y, z)` in the quadtree pyramid.
///
/// The components are signed: projecting latitudes beyond the poles produces rows
/// outside `[0, 2^z)`, and those are handed back to the caller unchanged instead of
/// being clamped. Use [`Tile::checked`] or [`Tile::is_valid`] when a tile has to lie
/// inside the grid.
#[derive(Eq, PartialEq, Clone, Copy, Hash)]
pub struct Tile {
	/// Column, counted from the antimeridian eastwards.
	pub x: i64,
	/// Row, counted from the north edge southwards.
	pub y: i64,
	/// Zoom level.
	pub z: u8,
}

impl Tile {
	/// Create a tile without any range checks.
	pub const fn new(x: i64, y: i64, z: u8) -> Tile {
		Tile { x, y, z }
	}

	/// Create a tile, rejecting components that do not address a cell of the grid.
	///
	/// # Errors
	/// Returns an error if `z` > 32 or if `x`/`y` are outside `[0, 2^z)`.
	pub fn checked(x: i64, y: i64, z: u8) -> Result<Tile> {
		ensure!(z <= MAX_ZOOM, "z ({z}) must be <= {MAX_ZOOM}");
		let size = Tile::grid_size(z);
		ensure!((0..size).contains(&x), "x ({x}) out of bounds for zoom {z}");
		ensure!((0..size).contains(&y), "y ({y}) out of bounds for zoom {z}");
		Ok(Tile { x, y, z })
	}

	/// Number of tiles along one side of the grid at zoom `z`.
	pub fn grid_size(z: u8) -> i64 {
		1i64 << z.min(MAX_ZOOM)
	}

	/// Whether this tile addresses an actual cell of its zoom level's grid.
	pub fn is_valid(&self) -> bool {
		if self.z > MAX_ZOOM {
			return false;
		}
		let size = Tile::grid_size(self.z);
		(0..size).contains(&self.x) && (0..size).contains(&self.y)
	}

	/// The components as `[x, y, z]`.
	pub fn as_array(&self) -> [i64; 3] {
		[self.x, self.y, i64::from(self.z)]
	}
}

/// Slippy-map path notation `z/x/y`.
impl Display for Tile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}/{}", self.z, self.x, self.y)
	}
}

impl Debug for Tile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_fmt(format_args!("Tile({}, [{}, {}])", &self.z, &self.x, &self.y))
	}
}

/// Parses `z/x/y`.
impl FromStr for Tile {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		let parts: Vec<&str> = s.trim().split('/').collect();
		ensure!(parts.len() == 3, "tile must be written as \"z/x/y\", got {s:?}");
		let z = parts[0].parse::<u8>().with_context(|| format!("invalid zoom {:?} in tile {s:?}", parts[0]))?;
		let x = parts[1].parse::<i64>().with_context(|| format!("invalid x {:?} in tile {s:?}", parts[1]))?;
		let y = parts[2].parse::<i64>().with_context(|| format!("invalid y {:?} in tile {s:?}", parts[2]))?;
		Ok(Tile { x, y, z })
	}
}

/// Ordering: first by zoom level `z`, then `y`, then `x`.
impl Ord for Tile {
	fn cmp(&self, other: &Self) -> Ordering {
		self.z
			.cmp(&other.z)
			.then_with(|| self.y.cmp(&other.y))
			.then_with(|| self.x.cmp(&other.x))
	}
}

impl PartialOrd for Tile {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// Serialized as the array `[x, y, z]`.
impl Serialize for Tile {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		(self.x, self.y, self.z).serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for Tile {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let (x, y, z) = <(i64, i64, u8)>::deserialize(deserializer)?;
		Ok(Tile { x, y, z })
	}
}
