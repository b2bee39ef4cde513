//! Price resolution: bid overrides, base prices, and bulk-discount tiers.
//!
//! These are free functions over borrowed data so the engine can apply
//! them per supplier with whatever bid (if any) is on file for that
//! supplier's id.

use std::collections::HashMap;

use selector_types::{Bid, BulkTier, CostBreakdown, Order, Supplier};

/// Returns the discount of the highest tier whose `min_qty` the quantity
/// meets or exceeds, or `0.0` when no tier qualifies.
///
/// Tiers are a step function: only the best qualifying threshold applies,
/// discounts never stack. The input does not need to be sorted; among
/// tiers sharing a threshold the last one listed wins, matching the
/// behavior of resolving over an ascending-sorted ladder.
pub fn applicable_discount(tiers: &[BulkTier], quantity: u32) -> f64 {
	tiers
		.iter()
		.filter(|tier| quantity >= tier.min_qty)
		.max_by_key(|tier| tier.min_qty)
		.map(|tier| tier.discount)
		.unwrap_or(0.0)
}

/// The tier ladder in force for a supplier: the bid's replacement ladder
/// when one is present and non-empty, otherwise the supplier's own.
pub fn active_tiers<'a>(supplier: &'a Supplier, bid: Option<&'a Bid>) -> &'a [BulkTier] {
	match bid {
		Some(bid) if !bid.custom_bulk_tiers.is_empty() => &bid.custom_bulk_tiers,
		_ => &supplier.bulk_tiers,
	}
}

/// Resolves the undiscounted unit price for one item: bid override first,
/// then the supplier's base list. `None` means the item is not offered.
pub fn unit_price(supplier: &Supplier, bid: Option<&Bid>, item: &str) -> Option<f64> {
	bid.and_then(|b| b.custom_prices.get(item).copied())
		.or_else(|| supplier.base_prices.get(item).copied())
}

/// Effective unit price for `quantity` units of `item`: the resolved unit
/// price with the applicable bulk discount taken off. `None` when the
/// supplier does not offer the item at all.
///
/// Out-of-range discounts are passed through unclamped; garbage in the
/// catalog propagates into costs rather than failing.
pub fn effective_price(
	supplier: &Supplier,
	bid: Option<&Bid>,
	item: &str,
	quantity: u32,
) -> Option<f64> {
	let price = unit_price(supplier, bid, item)?;
	let discount = applicable_discount(active_tiers(supplier, bid), quantity);
	Some(price * (1.0 - discount))
}

/// Prices a whole order against one supplier.
///
/// Each item's discount is computed against that item's own quantity, not
/// the order total. Items the supplier does not offer are silently
/// skipped; partial availability is the ranking layer's concern.
pub fn cost_breakdown(supplier: &Supplier, bid: Option<&Bid>, order: &Order) -> CostBreakdown {
	let mut final_prices = HashMap::new();
	let mut total_cost = 0.0;

	for (item, &quantity) in &order.items {
		if let Some(price) = effective_price(supplier, bid, item, quantity) {
			final_prices.insert(item.clone(), price);
			total_cost += price * f64::from(quantity);
		}
	}

	CostBreakdown {
		final_prices,
		total_cost,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use selector_types::Location;

	fn tiers() -> Vec<BulkTier> {
		vec![
			BulkTier {
				min_qty: 10,
				discount: 0.05,
			},
			BulkTier {
				min_qty: 50,
				discount: 0.10,
			},
			BulkTier {
				min_qty: 100,
				discount: 0.15,
			},
		]
	}

	fn supplier() -> Supplier {
		Supplier {
			id: "wholesaler-1".into(),
			name: "Wholesaler One".into(),
			base_prices: HashMap::from([("Onions".into(), 100.0), ("Rice".into(), 45.0)]),
			bulk_tiers: tiers(),
			quality_score: 8.0,
			delivery_radius: 100.0,
			min_order_value: 0.0,
			location: Location(0.0, 0.0),
			reliability_score: 8.0,
			avatar: None,
			strategy: None,
		}
	}

	#[test]
	fn test_tier_selection_is_step_function_not_additive() {
		// Quantity 60 qualifies for the 10 and 50 tiers; only the 50 tier
		// (0.10) applies, not 0.05 + 0.10.
		let price = effective_price(&supplier(), None, "Onions", 60).unwrap();
		assert_eq!(price, 90.0);
	}

	#[test]
	fn test_no_tier_qualifies_means_no_discount() {
		let price = effective_price(&supplier(), None, "Onions", 5).unwrap();
		assert_eq!(price, 100.0);
	}

	#[test]
	fn test_unsorted_tiers_resolve_identically() {
		let mut s = supplier();
		s.bulk_tiers.reverse();
		let price = effective_price(&s, None, "Onions", 60).unwrap();
		assert_eq!(price, 90.0);
	}

	#[test]
	fn test_unavailable_item_yields_none() {
		assert_eq!(effective_price(&supplier(), None, "Unobtainium", 5), None);
	}

	#[test]
	fn test_bid_price_override_takes_precedence() {
		let bid = Bid::new(
			"wholesaler-1",
			HashMap::from([("Onions".into(), 20.0)]),
			Vec::new(),
		);
		let price = effective_price(&supplier(), Some(&bid), "Onions", 1).unwrap();
		assert_eq!(price, 20.0);
	}

	#[test]
	fn test_empty_custom_tiers_fall_back_to_supplier_tiers() {
		let bid = Bid::new("wholesaler-1", HashMap::new(), Vec::new());
		let price = effective_price(&supplier(), Some(&bid), "Onions", 60).unwrap();
		assert_eq!(price, 90.0);
	}

	#[test]
	fn test_non_empty_custom_tiers_replace_not_merge() {
		let bid = Bid::new(
			"wholesaler-1",
			HashMap::new(),
			vec![BulkTier {
				min_qty: 5,
				discount: 0.50,
			}],
		);
		// The supplier's 0.10-at-50 tier must be ignored entirely.
		let price = effective_price(&supplier(), Some(&bid), "Onions", 60).unwrap();
		assert_eq!(price, 50.0);
	}

	#[test]
	fn test_breakdown_skips_unoffered_items() {
		let order = Order {
			items: HashMap::from([("Onions".into(), 5), ("Unobtainium".into(), 3)]),
			vendor_location: Location(0.0, 0.0),
		};

		let breakdown = cost_breakdown(&supplier(), None, &order);
		assert_eq!(breakdown.final_prices.len(), 1);
		assert_eq!(breakdown.final_prices["Onions"], 100.0);
		assert_eq!(breakdown.total_cost, 500.0);
	}

	#[test]
	fn test_breakdown_discounts_per_item_quantity() {
		// 60 onions hit the 0.10 tier, 5 rice hits none; discounts are
		// per item, never against the combined order size.
		let order = Order {
			items: HashMap::from([("Onions".into(), 60), ("Rice".into(), 5)]),
			vendor_location: Location(0.0, 0.0),
		};

		let breakdown = cost_breakdown(&supplier(), None, &order);
		assert_eq!(breakdown.final_prices["Onions"], 90.0);
		assert_eq!(breakdown.final_prices["Rice"], 45.0);
		assert_eq!(breakdown.total_cost, 90.0 * 60.0 + 45.0 * 5.0);
	}
}
