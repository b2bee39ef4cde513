//! Planar geometry used for delivery-range checks.

use serde::{Deserialize, Serialize};

/// A 2D coordinate on the marketplace's delivery plane.
///
/// Serialized as a two-element array `[x, y]`, which is the shape both the
/// TOML catalog format and the surrounding application's JSON use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location(pub f64, pub f64);

impl Location {
	/// Euclidean distance to another location, in the same units as
	/// [`Supplier::delivery_radius`](crate::Supplier::delivery_radius).
	pub fn distance_to(&self, other: &Location) -> f64 {
		((self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)).sqrt()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_distance_is_euclidean() {
		let a = Location(0.0, 0.0);
		let b = Location(3.0, 4.0);
		assert_eq!(a.distance_to(&b), 5.0);
		assert_eq!(b.distance_to(&a), 5.0);
	}

	#[test]
	fn test_distance_to_self_is_zero() {
		let a = Location(7.5, -2.0);
		assert_eq!(a.distance_to(&a), 0.0);
	}

	#[test]
	fn test_serializes_as_pair() {
		let loc = Location(10.0, 10.0);
		let json = serde_json::to_string(&loc).unwrap();
		assert_eq!(json, "[10.0,10.0]");

		let back: Location = serde_json::from_str(&json).unwrap();
		assert_eq!(back, loc);
	}
}
