//! Catalog file format.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use selector_types::{BulkTier, Order, Supplier};

/// A complete catalog file: service settings, the suppliers to register,
/// bids to pre-submit, and optionally the order to rank.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Catalog {
	/// Service-level settings.
	#[serde(default)]
	pub settings: Settings,
	/// Suppliers, registered in file order.
	pub suppliers: Vec<Supplier>,
	/// Bids submitted after registration, in file order. Later entries
	/// for the same supplier id replace earlier ones.
	#[serde(default)]
	pub bids: Vec<BidTemplate>,
	/// The order to rank. Optional so a catalog can be validated on its
	/// own; `rank` requires it.
	#[serde(default)]
	pub order: Option<Order>,
}

/// Service identity and logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
	/// Name used in log output.
	#[serde(default = "default_name")]
	pub name: String,
	/// Default log level, overridable via the env prefix.
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			name: default_name(),
			log_level: default_log_level(),
		}
	}
}

fn default_name() -> String {
	"selector".to_string()
}

fn default_log_level() -> String {
	"info".to_string()
}

/// A bid as written in the catalog. Timestamps are assigned when the bid
/// is actually submitted to the engine, so the file format carries none.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BidTemplate {
	/// Id of the supplier the bid overrides.
	pub supplier_id: String,
	/// Sparse per-item price overrides.
	#[serde(default)]
	pub custom_prices: HashMap<String, f64>,
	/// Replacement discount ladder; empty keeps the supplier's own.
	#[serde(default)]
	pub custom_bulk_tiers: Vec<BulkTier>,
}
