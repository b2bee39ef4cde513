//! Buyer order types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::Location;

/// A buyer's procurement request: the items and quantities wanted, and
/// where they must be delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
	/// Required quantity per item name. Quantities are expected positive.
	pub items: HashMap<String, u32>,
	/// Delivery destination, checked against each supplier's radius.
	pub vendor_location: Location,
}
