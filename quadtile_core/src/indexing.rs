//! Discrete tile indices for points, and tile footprints as GeoJSON.

use crate::{Feature, FeatureCollection, Geometry, Tile, point_to_tile_fraction, tile_to_bbox, tile_to_quadkey};

/// The tile containing a point at zoom `z`.
///
/// Both coordinates of the fractional position are floored toward negative infinity.
///
/// # Examples
/// ```
/// use quadtile_core::{Tile, point_to_tile};
///
/// assert_eq!(point_to_tile(-77.03239381313323, 38.91326516559442, 10), Tile::new(292, 391, 10));
/// ```
pub fn point_to_tile(lon: f64, lat: f64, z: u8) -> Tile {
	point_to_tile_fraction(lon, lat, z).floor()
}

/// The footprint of a tile as a closed polygon.
///
/// The ring starts at the north-west corner and runs counter-clockwise:
/// north-west, south-west, south-east, north-east, north-west.
pub fn tile_to_geojson(tile: &Tile) -> Geometry {
	let bbox = tile_to_bbox(tile);
	Geometry::polygon(vec![
		[bbox.west, bbox.north],
		[bbox.west, bbox.south],
		[bbox.east, bbox.south],
		[bbox.east, bbox.north],
		[bbox.west, bbox.north],
	])
}

/// One polygon feature per tile, in input order.
pub fn tiles_to_feature_collection(tiles: &[Tile]) -> FeatureCollection {
	FeatureCollection::from(
		tiles
			.iter()
			.map(|tile| {
				let mut feature = Feature::new(tile_to_geojson(tile));
				feature.set_tile_properties(tile, tile_to_quadkey(tile));
				feature
			})
			.collect::<Vec<_>>(),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use rstest::rstest;

	#[rstest]
	#[case(0.0, 0.0, 10, Tile::new(512, 512, 10))]
	#[case(-77.03239381313323, 38.91326516559442, 10, Tile::new(292, 391, 10))]
	#[case(-180.0, 0.0, 0, Tile::new(0, 0, 0))]
	#[case(-180.0, 85.0, 2, Tile::new(0, 0, 2))]
	#[case(180.0, 85.0, 2, Tile::new(0, 0, 2))]
	#[case(-185.0, 85.0, 2, Tile::new(3, 0, 2))]
	#[case(185.0, 85.0, 2, Tile::new(0, 0, 2))]
	#[case(-175.0, -95.0, 2, Tile::new(0, 3, 2))]
	#[case(-175.0, 95.0, 2, Tile::new(0, 0, 2))]
	fn point_to_tile_cases(#[case] lon: f64, #[case] lat: f64, #[case] z: u8, #[case] expected: Tile) {
		assert_eq!(point_to_tile(lon, lat, z), expected);
	}

	#[test]
	fn point_past_the_pole_is_out_of_range() {
		let tile = point_to_tile(0.0, 89.0, 2);
		assert_eq!(tile.y, -2);
		assert!(!tile.is_valid());

		let tile = point_to_tile(0.0, 90.0, 3);
		assert_eq!(tile.y, i64::MIN);
	}

	#[test]
	fn pole_tiles_still_have_features() {
		let tiles = [point_to_tile(0.0, -90.0, 3), point_to_tile(0.0, 90.0, 3)];
		assert_eq!(tiles[0].y, i64::MAX);
		let collection = tiles_to_feature_collection(&tiles);
		assert_eq!(collection.features.len(), 2);
		assert_eq!(collection.features[0].geometry.exterior().len(), 5);
	}

	#[test]
	fn geojson_ring() {
		let geometry = tile_to_geojson(&Tile::new(5, 10, 10));
		let ring = geometry.exterior();
		assert_eq!(ring.len(), 5);
		assert_eq!(ring[0], ring[4]);

		let expected = [
			[-178.2421875, 84.73838712095339],
			[-178.2421875, 84.7060489350415],
			[-177.890625, 84.7060489350415],
			[-177.890625, 84.73838712095339],
			[-178.2421875, 84.73838712095339],
		];
		for (position, expected) in ring.iter().zip(expected) {
			assert_eq!(position[0], expected[0]);
			assert_relative_eq!(position[1], expected[1], epsilon = 1e-10);
		}
	}

	#[test]
	fn geojson_json_shape() {
		let json = tile_to_geojson(&Tile::new(0, 0, 0)).to_json().unwrap();
		assert!(json.starts_with(r#"{"type":"Polygon","coordinates":[[[-180.0,85.0511287798"#));
	}

	#[test]
	fn feature_collection() {
		let tiles = [Tile::new(0, 0, 1), Tile::new(1, 1, 1)];
		let collection = tiles_to_feature_collection(&tiles);
		assert_eq!(collection.features.len(), 2);
		assert_eq!(collection.features[0].geometry, tile_to_geojson(&tiles[0]));
		assert_eq!(collection.features[1].properties["quadkey"], "3");
		assert_eq!(collection.features[1].properties["z"], 1);

		assert!(tiles_to_feature_collection(&[]).features.is_empty());
	}
}
