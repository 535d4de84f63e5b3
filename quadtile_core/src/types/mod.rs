//! Value types shared by all coordinate families: tiles, fractional tiles, bounding boxes
//! and GeoJSON geometries.

mod bbox;
pub use bbox::*;

mod geometry;
pub use geometry::*;

mod tile;
pub use tile::*;

mod tile_fraction;
pub use tile_fraction::*;
