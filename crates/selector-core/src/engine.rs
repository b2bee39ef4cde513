//! The selection engine: supplier/bid registries plus ranking.

use std::collections::HashMap;

use selector_types::{Bid, BulkTier, CostBreakdown, Order, ScoreData, Supplier, SupplierOffer};
use tracing::{debug, info};

use crate::{pricing, scoring};

/// Holds the registered suppliers and the bids on file, and answers
/// pricing and ranking queries against that snapshot.
///
/// The engine is deliberately a plain value: construct one per auction
/// round (or per test) rather than sharing a process-wide instance. It
/// performs no internal locking; embedding it in a concurrent server
/// means wrapping it in a mutex or giving each request its own copy.
///
/// No operation here returns an error. Out-of-domain situations —
/// unavailable items, out-of-radius suppliers, unmet minimum spend —
/// are expressed as `None`, infinity sentinels, or omission from the
/// ranked results, never as panics.
#[derive(Debug, Default, Clone)]
pub struct SelectionEngine {
	/// Suppliers in registration order. Duplicate ids are permitted.
	suppliers: Vec<Supplier>,
	/// Latest bid per supplier id; resubmission replaces wholesale.
	bids: HashMap<String, Bid>,
}

impl SelectionEngine {
	/// Creates an empty engine.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a supplier, normalizing its discount ladder into
	/// ascending `min_qty` order.
	///
	/// No field validation and no duplicate-id check is performed: two
	/// suppliers may share an id, and a bid keyed by that id will apply
	/// to both during cost resolution.
	pub fn add_supplier(&mut self, mut supplier: Supplier) {
		supplier.normalize_tiers();
		debug!(id = %supplier.id, name = %supplier.name, "registering supplier");
		self.suppliers.push(supplier);
	}

	/// Stores or replaces the bid for `supplier_id`, stamped with the
	/// current time.
	///
	/// The id does not need to match a registered supplier; such a bid
	/// simply has no effect unless a matching supplier is added later.
	pub fn submit_bid(
		&mut self,
		supplier_id: impl Into<String>,
		custom_prices: HashMap<String, f64>,
		custom_bulk_tiers: Vec<BulkTier>,
	) {
		let supplier_id = supplier_id.into();
		debug!(
			id = %supplier_id,
			overrides = custom_prices.len(),
			tiers = custom_bulk_tiers.len(),
			"bid submitted"
		);
		self.bids.insert(
			supplier_id.clone(),
			Bid::new(supplier_id, custom_prices, custom_bulk_tiers),
		);
	}

	/// Empties the bid registry. Suppliers are untouched; pricing reverts
	/// to base prices and default tiers.
	pub fn clear_bids(&mut self) {
		debug!(cleared = self.bids.len(), "clearing bids");
		self.bids.clear();
	}

	/// Copy of the supplier registry, in registration order.
	pub fn suppliers(&self) -> Vec<Supplier> {
		self.suppliers.clone()
	}

	/// Copy of the bid registry, keyed by supplier id.
	pub fn bids(&self) -> HashMap<String, Bid> {
		self.bids.clone()
	}

	/// Effective unit price for `quantity` units of `item` from this
	/// supplier, honoring any bid on file for the supplier's id.
	/// `None` means the supplier does not offer the item.
	pub fn effective_price(&self, supplier: &Supplier, item: &str, quantity: u32) -> Option<f64> {
		pricing::effective_price(supplier, self.bids.get(&supplier.id), item, quantity)
	}

	/// Prices the whole order against one supplier. Unoffered items are
	/// skipped, not flagged.
	pub fn cost_breakdown(&self, supplier: &Supplier, order: &Order) -> CostBreakdown {
		pricing::cost_breakdown(supplier, self.bids.get(&supplier.id), order)
	}

	/// Composite score for one supplier against one order; see
	/// [`scoring::selection_score`] for the formula and the
	/// disqualification sentinels.
	pub fn selection_score(&self, supplier: &Supplier, order: &Order) -> ScoreData {
		scoring::selection_score(supplier, self.bids.get(&supplier.id), order)
	}

	/// Ranks every viable registered supplier for `order`, best first.
	///
	/// A supplier is dropped when any of three gates fails, in order:
	/// the order's total value with that supplier (unoffered items
	/// contributing zero) falls below its minimum order value; any
	/// ordered item is not offered at all; or the delivery location is
	/// outside its radius. Survivors are sorted descending by
	/// `final_score`; the sort is stable, so equal scores keep
	/// registration order (a convenience, not a contract).
	pub fn find_optimal_suppliers(&self, order: &Order) -> Vec<SupplierOffer> {
		let mut offers = Vec::new();

		for supplier in &self.suppliers {
			let bid = self.bids.get(&supplier.id);

			// Minimum-spend gate, evaluated before availability.
			let total_order_value: f64 = order
				.items
				.iter()
				.filter_map(|(item, &qty)| {
					pricing::effective_price(supplier, bid, item, qty)
						.map(|price| price * f64::from(qty))
				})
				.sum();

			if total_order_value < supplier.min_order_value {
				debug!(
					id = %supplier.id,
					total_order_value,
					min_order_value = supplier.min_order_value,
					"supplier below minimum order value"
				);
				continue;
			}

			// Every ordered item must be offered at some price. Quantity
			// 1 probes availability only, not the real quantity's tier.
			let fully_available = order
				.items
				.keys()
				.all(|item| pricing::effective_price(supplier, bid, item, 1).is_some());

			if !fully_available {
				debug!(id = %supplier.id, "supplier missing ordered items");
				continue;
			}

			let score_data = scoring::selection_score(supplier, bid, order);
			if score_data.final_score == f64::NEG_INFINITY {
				debug!(id = %supplier.id, "supplier outside delivery radius");
				continue;
			}

			offers.push(SupplierOffer {
				supplier: supplier.clone(),
				score_data,
				cost_breakdown: pricing::cost_breakdown(supplier, bid, order),
			});
		}

		// Stable descending sort; ties keep registration order.
		offers.sort_by(|a, b| b.score_data.final_score.total_cmp(&a.score_data.final_score));

		info!(
			candidates = self.suppliers.len(),
			ranked = offers.len(),
			"ranked suppliers for order"
		);
		offers
	}
}
