//! Bid types.
//!
//! A bid is a per-supplier pricing override submitted during an auction
//! round. Prices are sparse overrides over the supplier's base list; a
//! non-empty tier set fully replaces the supplier's default ladder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::BulkTier;

/// A pricing override for one supplier. At most one bid per supplier id is
/// retained; resubmitting replaces the previous bid wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
	/// Id of the supplier this bid overrides. The supplier does not need
	/// to be registered yet; the bid simply has no effect until it is.
	pub supplier_id: String,
	/// Sparse per-item price overrides. Items not listed fall back to the
	/// supplier's base prices.
	#[serde(default)]
	pub custom_prices: HashMap<String, f64>,
	/// Replacement discount ladder. Empty means "keep the supplier's own
	/// tiers"; non-empty replaces them entirely, never merges.
	#[serde(default)]
	pub custom_bulk_tiers: Vec<BulkTier>,
	/// When the bid was submitted. Informational only; ranking ignores it.
	pub timestamp: DateTime<Utc>,
}

impl Bid {
	/// Creates a bid stamped with the current time.
	pub fn new(
		supplier_id: impl Into<String>,
		custom_prices: HashMap<String, f64>,
		custom_bulk_tiers: Vec<BulkTier>,
	) -> Self {
		Self {
			supplier_id: supplier_id.into(),
			custom_prices,
			custom_bulk_tiers,
			timestamp: Utc::now(),
		}
	}
}
