use anyhow::{Error, Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Debug, Display};

/// A geographic bounding box in degrees, ordered `west, south, east, north`.
///
/// A well-formed box has `west < east` and `south < north`. A box crossing the
/// antimeridian has `west > east`; callers have to split or normalize such boxes
/// themselves, nothing here does it for them.
///
/// # Examples
/// ```
/// use quadtile_core::BBox;
///
/// let bbox = BBox::try_from(vec![-10.0, -5.0, 10.0, 5.0]).unwrap();
/// assert_eq!(bbox.as_array(), [-10.0, -5.0, 10.0, 5.0]);
/// assert_eq!(bbox.to_string(), "[-10, -5, 10, 5]");
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct BBox {
	pub west: f64,
	pub south: f64,
	pub east: f64,
	pub north: f64,
}

impl BBox {
	pub const fn new(west: f64, south: f64, east: f64, north: f64) -> BBox {
		BBox {
			west,
			south,
			east,
			north,
		}
	}

	/// Returns `[west, south, east, north]`.
	pub fn as_array(&self) -> [f64; 4] {
		[self.west, self.south, self.east, self.north]
	}

	/// Whether the box spans a positive area without wrapping.
	pub fn is_well_formed(&self) -> bool {
		self.west < self.east && self.south < self.north
	}
}

impl TryFrom<&[f64]> for BBox {
	type Error = Error;

	fn try_from(input: &[f64]) -> Result<Self> {
		ensure!(input.len() == 4, "bbox must have exactly 4 values, got {}", input.len());
		Ok(BBox::new(input[0], input[1], input[2], input[3]))
	}
}

impl TryFrom<Vec<f64>> for BBox {
	type Error = Error;

	fn try_from(input: Vec<f64>) -> Result<Self> {
		BBox::try_from(input.as_slice())
	}
}

impl From<[f64; 4]> for BBox {
	fn from(input: [f64; 4]) -> Self {
		BBox::new(input[0], input[1], input[2], input[3])
	}
}

impl Display for BBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {}, {}, {}]", self.west, self.south, self.east, self.north)
	}
}

impl Debug for BBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "BBox{self}")
	}
}

impl Serialize for BBox {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.as_array().serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for BBox {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Ok(BBox::from(<[f64; 4]>::deserialize(deserializer)?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn try_from_slice() {
		let bbox = BBox::try_from(&[1.0, 2.0, 3.0, 4.0][..]).unwrap();
		assert_eq!(bbox, BBox::new(1.0, 2.0, 3.0, 4.0));
		assert_eq!(bbox.west, 1.0);
		assert_eq!(bbox.south, 2.0);
		assert_eq!(bbox.east, 3.0);
		assert_eq!(bbox.north, 4.0);
	}

	#[test]
	fn try_from_wrong_length() {
		let err = BBox::try_from(vec![1.0, 2.0, 3.0]).unwrap_err();
		assert_eq!(err.to_string(), "bbox must have exactly 4 values, got 3");
		assert!(BBox::try_from(vec![0.0; 5]).is_err());
	}

	#[test]
	fn well_formed() {
		assert!(BBox::new(-10.0, -10.0, 10.0, 10.0).is_well_formed());
		assert!(!BBox::new(-84.0, 11.0, -84.0, 11.0).is_well_formed());
		assert!(!BBox::new(170.0, 0.0, -170.0, 10.0).is_well_formed());
	}

	#[test]
	fn formatting() {
		let bbox = BBox::new(-178.2421875, 84.7, -177.890625, 84.8);
		assert_eq!(bbox.to_string(), "[-178.2421875, 84.7, -177.890625, 84.8]");
		assert_eq!(format!("{bbox:?}"), "BBox[-178.2421875, 84.7, -177.890625, 84.8]");
	}

	#[test]
	fn serde_as_array() {
		let bbox = BBox::new(-10.0, -5.5, 10.0, 5.5);
		let json = serde_json::to_string(&bbox).unwrap();
		assert_eq!(json, "[-10.0,-5.5,10.0,5.5]");
		assert_eq!(serde_json::from_str::<BBox>(&json).unwrap(), bbox);
	}
}
