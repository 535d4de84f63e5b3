//! Coordinate math for quadtree tile pyramids as used by slippy maps.
//!
//! Converts between four ways of naming a place on the map:
//! - longitude/latitude points ([`point_to_tile`], [`point_to_tile_fraction`]),
//! - tile indices `x/y/z` ([`Tile`]),
//! - quadkeys ([`tile_to_quadkey`], [`quadkey_to_tile`]),
//! - bounding boxes ([`tile_to_bbox`], [`bbox_to_tile`]).
//!
//! Everything here is a pure function of its arguments.
//!
//! ```
//! use quadtile_core::*;
//!
//! let tile = point_to_tile(-77.03239381313323, 38.91326516559442, 10);
//! assert_eq!(tile, Tile::new(292, 391, 10));
//! assert_eq!(tile_to_quadkey(&tile), "0320100322");
//! assert_eq!(parent(&tile).unwrap(), Tile::new(146, 195, 9));
//! ```

mod bbox_tile;
pub use bbox_tile::*;

mod indexing;
pub use indexing::*;

mod projection;
pub use projection::*;

mod quadkey;
pub use quadkey::*;

mod topology;
pub use topology::*;

pub mod types;
pub use types::*;
