//! Supplier catalog types.
//!
//! A supplier advertises a base price list, an optional ladder of bulk
//! discounts, and delivery constraints. Suppliers are registered with the
//! selection engine and scored against buyer orders.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::Location;

/// One step of a bulk-discount ladder.
///
/// Tiers form a step function over order quantity: the highest tier whose
/// `min_qty` the quantity meets or exceeds applies, and tiers never stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulkTier {
	/// Minimum quantity at which this tier activates.
	pub min_qty: u32,
	/// Discount fraction in `[0, 1)` applied to the unit price.
	pub discount: f64,
}

/// A registered offer source in the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
	/// Unique identifier; the stable key bids and results refer to.
	pub id: String,
	/// Display label.
	pub name: String,
	/// Unit price per item name. Items absent here (and not overridden by
	/// a bid) are not offered by this supplier.
	pub base_prices: HashMap<String, f64>,
	/// Default bulk-discount ladder, kept sorted ascending by `min_qty`
	/// once registered with the engine.
	#[serde(default)]
	pub bulk_tiers: Vec<BulkTier>,
	/// Quality rating, expected range 0-10.
	pub quality_score: f64,
	/// Maximum distance from `location` this supplier will deliver to.
	pub delivery_radius: f64,
	/// Minimum total order value (in currency) the supplier accepts.
	///
	/// The original data model called this `min_order_qty`, but it has
	/// always been compared against the order's computed value, not its
	/// physical quantity. The old name is accepted as a serde alias so
	/// existing fixtures load unchanged.
	#[serde(alias = "min_order_qty", default)]
	pub min_order_value: f64,
	/// Warehouse coordinate deliveries originate from.
	pub location: Location,
	/// Reliability rating. Carried in the model but not consulted by the
	/// current scoring formula.
	#[serde(default)]
	pub reliability_score: f64,
	/// Optional avatar shown by the surrounding UI.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub avatar: Option<String>,
	/// Optional bidding-strategy label used by the demo's bot suppliers.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub strategy: Option<String>,
}

impl Supplier {
	/// Sorts the bulk-discount ladder ascending by `min_qty`.
	///
	/// The sort is stable, so tiers sharing a threshold keep their
	/// relative order and the later one wins during resolution.
	pub fn normalize_tiers(&mut self) {
		self.bulk_tiers.sort_by_key(|tier| tier.min_qty);
	}
}
