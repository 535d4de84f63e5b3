//! Minimal GeoJSON structures for tile footprints.

use super::Tile;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A `[longitude, latitude]` position.
pub type Position = [f64; 2];

/// A GeoJSON geometry. Tile footprints only ever need a single-ring polygon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
	Polygon { coordinates: Vec<Vec<Position>> },
}

impl Geometry {
	/// A polygon with a single outer ring.
	pub fn polygon(ring: Vec<Position>) -> Geometry {
		Geometry::Polygon {
			coordinates: vec![ring],
		}
	}

	/// The outer ring of the polygon.
	pub fn exterior(&self) -> &[Position] {
		match self {
			Geometry::Polygon { coordinates } => coordinates.first().map(Vec::as_slice).unwrap_or_default(),
		}
	}

	pub fn to_json(&self) -> Result<String> {
		serde_json::to_string(self).context("serializing geometry")
	}
}

/// A GeoJSON feature describing one tile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
	pub geometry: Geometry,
	pub properties: Map<String, Value>,
}

impl Feature {
	pub fn new(geometry: Geometry) -> Self {
		Self {
			geometry,
			properties: Map::new(),
		}
	}

	pub fn set_property<T>(&mut self, key: &str, value: T)
	where
		Value: From<T>,
	{
		self.properties.insert(key.to_string(), Value::from(value));
	}

	/// Properties `x`, `y`, `z` and `quadkey` of the tile this feature outlines.
	pub fn set_tile_properties(&mut self, tile: &Tile, quadkey: String) {
		self.set_property("x", tile.x);
		self.set_property("y", tile.y);
		self.set_property("z", tile.z);
		self.set_property("quadkey", quadkey);
	}
}

/// A GeoJSON feature collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
	pub features: Vec<Feature>,
}

impl FeatureCollection {
	pub fn to_json(&self) -> Result<String> {
		serde_json::to_string(self).context("serializing feature collection")
	}
}

impl From<Vec<Feature>> for FeatureCollection {
	fn from(features: Vec<Feature>) -> Self {
		Self { features }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn unit_square() -> Geometry {
		Geometry::polygon(vec![[0.0, 1.0], [0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])
	}

	#[test]
	fn polygon_json() {
		assert_eq!(
			unit_square().to_json().unwrap(),
			r#"{"type":"Polygon","coordinates":[[[0.0,1.0],[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,1.0]]]}"#
		);
	}

	#[test]
	fn polygon_from_json() {
		let json = r#"{"type":"Polygon","coordinates":[[[0,1],[0,0],[1,0],[1,1],[0,1]]]}"#;
		let geometry: Geometry = serde_json::from_str(json).unwrap();
		assert_eq!(geometry, unit_square());
		assert_eq!(geometry.exterior().len(), 5);
	}

	#[test]
	fn feature_collection_json() {
		let mut feature = Feature::new(unit_square());
		feature.set_tile_properties(&Tile::new(1, 0, 1), "1".to_string());
		let collection: FeatureCollection = vec![feature].into();
		let value: Value = serde_json::from_str(&collection.to_json().unwrap()).unwrap();
		assert_eq!(value["type"], "FeatureCollection");
		assert_eq!(value["features"][0]["type"], "Feature");
		assert_eq!(value["features"][0]["geometry"]["type"], "Polygon");
		assert_eq!(value["features"][0]["properties"]["x"], 1);
		assert_eq!(value["features"][0]["properties"]["y"], 0);
		assert_eq!(value["features"][0]["properties"]["z"], 1);
		assert_eq!(value["features"][0]["properties"]["quadkey"], "1");
	}

	#[test]
	fn empty_collection() {
		assert_eq!(
			FeatureCollection::default().to_json().unwrap(),
			r#"{"type":"FeatureCollection","features":[]}"#
		);
	}
}
