//! Composite supplier scoring.
//!
//! The score blends order cost, supplier quality, and delivery proximity
//! with fixed weights. `reliability_score` exists on the supplier record
//! but is not part of the formula.

use selector_types::{Bid, Order, ScoreData, Supplier};

use crate::pricing;

/// Weight of the inverse-cost term. Lower cost, higher score.
pub const COST_WEIGHT: f64 = 0.5;
/// Weight of the quality term, normalized out of 10.
pub const QUALITY_WEIGHT: f64 = 0.3;
/// Weight of the inverse-distance term.
pub const DISTANCE_WEIGHT: f64 = 0.2;

/// Scales the raw composite score by 10 and rounds to two decimals.
fn round_score(score: f64) -> f64 {
	(score * 10.0 * 100.0).round() / 100.0
}

/// Scores one supplier against one order.
///
/// A supplier whose distance to the delivery location exceeds its
/// `delivery_radius` is disqualified with the sentinel pair
/// (`-inf` score, `+inf` cost, empty prices); the sentinel is what the
/// ranking step filters on. Otherwise the score is
///
/// ```text
/// 0.5 / (total_cost + 1) + 0.3 * quality / 10 + 0.2 / (distance + 1)
/// ```
///
/// scaled by 10 and rounded to two decimal places.
pub fn selection_score(supplier: &Supplier, bid: Option<&Bid>, order: &Order) -> ScoreData {
	let distance = supplier.location.distance_to(&order.vendor_location);
	if distance > supplier.delivery_radius {
		return ScoreData {
			final_score: f64::NEG_INFINITY,
			total_cost: f64::INFINITY,
			final_prices: Default::default(),
		};
	}

	let breakdown = pricing::cost_breakdown(supplier, bid, order);
	let score = (1.0 / (breakdown.total_cost + 1.0)) * COST_WEIGHT
		+ (supplier.quality_score / 10.0) * QUALITY_WEIGHT
		+ (1.0 / (distance + 1.0)) * DISTANCE_WEIGHT;

	ScoreData {
		final_score: round_score(score),
		total_cost: breakdown.total_cost,
		final_prices: breakdown.final_prices,
	}
}
