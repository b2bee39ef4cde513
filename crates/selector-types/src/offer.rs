//! Computed result types returned by the selection engine.
//!
//! None of these are stored; they are derived per call from the engine's
//! current supplier and bid registries.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::Supplier;

/// Per-item discounted unit prices and the resulting order total for one
/// supplier. Items the supplier does not offer are absent from
/// `final_prices` and contribute nothing to `total_cost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
	/// Unit price per item after the applicable bulk discount.
	pub final_prices: HashMap<String, f64>,
	/// Sum of `final_price * quantity` over the priced items.
	pub total_cost: f64,
}

/// Composite ranking score for one supplier against one order.
///
/// A supplier outside its delivery radius carries the sentinel pair
/// `final_score = -inf`, `total_cost = +inf` and an empty price map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreData {
	/// Composite score, scaled by 10 and rounded to two decimal places.
	pub final_score: f64,
	/// Order total used by the cost term of the score.
	pub total_cost: f64,
	/// Discounted unit prices backing `total_cost`.
	pub final_prices: HashMap<String, f64>,
}

/// One ranked entry in the engine's answer to "who should fill this
/// order": the supplier together with its score and cost breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierOffer {
	/// The supplier as registered (including any duplicate-id entries).
	pub supplier: Supplier,
	/// Composite score details.
	pub score_data: ScoreData,
	/// Full cost breakdown for the order.
	pub cost_breakdown: CostBreakdown,
}
