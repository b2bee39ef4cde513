//! Rendering of ranked offers for the terminal and for JSON consumers.

use anyhow::Result;
use selector_types::SupplierOffer;

/// Ranked offers as a plain text table, one supplier per row with its
/// per-item discounted prices listed underneath.
pub fn render_table(offers: &[SupplierOffer]) -> String {
	if offers.is_empty() {
		return "No valid bids for this order.\n".to_string();
	}

	let mut out = String::new();
	out.push_str(&format!(
		"{:<5} {:<24} {:>8} {:>12}\n",
		"Rank", "Supplier", "Score", "Total cost"
	));

	for (i, offer) in offers.iter().enumerate() {
		out.push_str(&format!(
			"{:<5} {:<24} {:>8.2} {:>12.2}\n",
			i + 1,
			offer.supplier.name,
			offer.score_data.final_score,
			offer.cost_breakdown.total_cost
		));

		let mut items: Vec<_> = offer.cost_breakdown.final_prices.iter().collect();
		items.sort_by(|a, b| a.0.cmp(b.0));
		for (item, price) in items {
			out.push_str(&format!("      - {item}: {price:.2}/unit\n"));
		}
	}

	out
}

/// Ranked offers as pretty-printed JSON, the shape the surrounding app's
/// bid cards consume.
pub fn render_json(offers: &[SupplierOffer]) -> Result<String> {
	Ok(serde_json::to_string_pretty(offers)?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use selector_types::{CostBreakdown, Location, ScoreData, Supplier};
	use std::collections::HashMap;

	fn offer(name: &str, score: f64, total: f64) -> SupplierOffer {
		SupplierOffer {
			supplier: Supplier {
				id: name.to_lowercase(),
				name: name.into(),
				base_prices: HashMap::new(),
				bulk_tiers: Vec::new(),
				quality_score: 8.0,
				delivery_radius: 10.0,
				min_order_value: 0.0,
				location: Location(0.0, 0.0),
				reliability_score: 8.0,
				avatar: None,
				strategy: None,
			},
			score_data: ScoreData {
				final_score: score,
				total_cost: total,
				final_prices: HashMap::from([("Rice".into(), 42.5)]),
			},
			cost_breakdown: CostBreakdown {
				final_prices: HashMap::from([("Rice".into(), 42.5)]),
				total_cost: total,
			},
		}
	}

	#[test]
	fn test_empty_results_say_no_valid_bids() {
		assert!(render_table(&[]).contains("No valid bids"));
	}

	#[test]
	fn test_table_lists_ranks_in_order() {
		let table = render_table(&[offer("Alpha", 2.9, 100.0), offer("Beta", 2.5, 120.0)]);
		let alpha = table.find("Alpha").unwrap();
		let beta = table.find("Beta").unwrap();
		assert!(alpha < beta);
		assert!(table.contains("Rice: 42.50/unit"));
	}

	#[test]
	fn test_json_is_an_array_of_offers() {
		let json = render_json(&[offer("Alpha", 2.9, 100.0)]).unwrap();
		let value: serde_json::Value = serde_json::from_str(&json).unwrap();
		assert_eq!(value[0]["supplier"]["name"], "Alpha");
	}
}
