use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use selector_config::{Catalog, CatalogLoader};
use selector_core::SelectionEngine;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod output;

#[derive(Parser)]
#[command(name = "selector")]
#[command(about = "Supplier selection service", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	#[arg(short, long, value_name = "FILE", default_value = "config/demo.toml")]
	config: PathBuf,

	#[arg(long, env = "SELECTOR_LOG_LEVEL", default_value = "info")]
	log_level: String,
}

#[derive(Subcommand)]
enum Commands {
	/// Rank suppliers for the order in the catalog
	Rank {
		/// Emit the ranked offers as JSON instead of a table
		#[arg(long)]
		json: bool,
	},
	/// Validate the catalog file
	Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	// Initialize tracing
	setup_tracing(&cli.log_level)?;

	// Handle commands
	match cli.command {
		Some(Commands::Rank { json }) => rank(cli.config, json).await,
		None => rank(cli.config, false).await,
		Some(Commands::Validate) => validate(cli.config).await,
	}
}

async fn rank(config: PathBuf, json: bool) -> Result<()> {
	info!("Loading catalog from: {:?}", config);

	let catalog = CatalogLoader::new()
		.with_file(&config)
		.load()
		.await
		.context("Failed to load catalog")?;

	info!("Catalog loaded successfully");
	info!("Market name: {}", catalog.settings.name);
	info!("Suppliers: {}", catalog.suppliers.len());
	info!("Pre-submitted bids: {}", catalog.bids.len());

	let order = catalog
		.order
		.clone()
		.context("Catalog has no [order] section to rank against")?;

	let engine = build_engine(catalog);
	let offers = engine.find_optimal_suppliers(&order);

	if json {
		println!("{}", output::render_json(&offers)?);
	} else {
		print!("{}", output::render_table(&offers));
	}

	Ok(())
}

async fn validate(config: PathBuf) -> Result<()> {
	info!("Validating catalog file: {:?}", config);

	let catalog = CatalogLoader::new()
		.with_file(&config)
		.load()
		.await
		.context("Failed to load catalog")?;

	info!("Catalog is valid");
	info!("Market name: {}", catalog.settings.name);
	for supplier in &catalog.suppliers {
		info!(
			"  Supplier: {} ({}, {} items priced)",
			supplier.id,
			supplier.name,
			supplier.base_prices.len()
		);
	}
	for bid in &catalog.bids {
		info!(
			"  Bid: {} ({} overrides, {} tiers)",
			bid.supplier_id,
			bid.custom_prices.len(),
			bid.custom_bulk_tiers.len()
		);
	}
	if catalog.order.is_none() {
		info!("  No [order] section; `rank` will refuse this catalog");
	}

	Ok(())
}

/// Feeds a loaded catalog into a fresh engine: suppliers first, then bids
/// in file order so later duplicates win, mirroring live submission.
fn build_engine(catalog: Catalog) -> SelectionEngine {
	let mut engine = SelectionEngine::new();
	for supplier in catalog.suppliers {
		engine.add_supplier(supplier);
	}
	for bid in catalog.bids {
		engine.submit_bid(bid.supplier_id, bid.custom_prices, bid.custom_bulk_tiers);
	}
	engine
}

fn setup_tracing(log_level: &str) -> Result<()> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	tracing_subscriber::registry()
		.with(env_filter)
		.with(tracing_subscriber::fmt::layer())
		.init();

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use selector_config::BidTemplate;
	use selector_types::{Location, Supplier};
	use std::collections::HashMap;

	#[test]
	fn test_build_engine_applies_bids_in_file_order() {
		let supplier = Supplier {
			id: "s".into(),
			name: "S".into(),
			base_prices: HashMap::from([("Rice".into(), 45.0)]),
			bulk_tiers: Vec::new(),
			quality_score: 5.0,
			delivery_radius: 10.0,
			min_order_value: 0.0,
			location: Location(0.0, 0.0),
			reliability_score: 5.0,
			avatar: None,
			strategy: None,
		};

		let catalog = Catalog {
			settings: Default::default(),
			suppliers: vec![supplier],
			bids: vec![
				BidTemplate {
					supplier_id: "s".into(),
					custom_prices: HashMap::from([("Rice".into(), 40.0)]),
					custom_bulk_tiers: Vec::new(),
				},
				BidTemplate {
					supplier_id: "s".into(),
					custom_prices: HashMap::from([("Rice".into(), 38.0)]),
					custom_bulk_tiers: Vec::new(),
				},
			],
			order: None,
		};

		let engine = build_engine(catalog);
		let suppliers = engine.suppliers();
		// Last bid in file order wins.
		assert_eq!(engine.effective_price(&suppliers[0], "Rice", 1), Some(38.0));
	}
}
