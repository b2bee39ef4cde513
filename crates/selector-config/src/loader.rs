//! Catalog loader with environment variable substitution.

use std::collections::HashSet;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::types::Catalog;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("File not found: {0}")]
	FileNotFound(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Environment variable not found: {0}")]
	EnvVarNotFound(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}

/// Catalog loader with environment variable substitution.
#[derive(Default)]
pub struct CatalogLoader {
	file_path: Option<String>,
	env_prefix: String,
}

impl CatalogLoader {
	pub fn new() -> Self {
		Self {
			file_path: None,
			env_prefix: "SELECTOR_".to_string(),
		}
	}

	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_string_lossy().to_string());
		self
	}

	pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.env_prefix = prefix.into();
		self
	}

	pub async fn load(&self) -> Result<Catalog, ConfigError> {
		// Load base catalog from file
		let mut catalog = if let Some(file_path) = &self.file_path {
			self.load_from_file(file_path).await?
		} else {
			return Err(ConfigError::FileNotFound(
				"No catalog file specified".to_string(),
			));
		};

		// Apply environment variable overrides
		self.apply_env_overrides(&mut catalog);

		// Validate catalog
		self.validate_catalog(&catalog)?;

		Ok(catalog)
	}

	async fn load_from_file(&self, file_path: &str) -> Result<Catalog, ConfigError> {
		let content = tokio::fs::read_to_string(file_path).await.map_err(|e| {
			if e.kind() == std::io::ErrorKind::NotFound {
				ConfigError::FileNotFound(file_path.to_string())
			} else {
				ConfigError::IoError(e)
			}
		})?;

		// Substitute environment variables
		let substituted_content = self.substitute_env_vars(&content)?;

		// Parse TOML
		let catalog: Catalog = toml::from_str(&substituted_content)
			.map_err(|e| ConfigError::ParseError(e.to_string()))?;

		Ok(catalog)
	}

	fn substitute_env_vars(&self, content: &str) -> Result<String, ConfigError> {
		let mut result = content.to_string();

		// Find and replace ${VAR_NAME} patterns
		let re = regex::Regex::new(r"\$\{([^}]+)\}").expect("static pattern");

		for cap in re.captures_iter(content) {
			let full_match = &cap[0];
			let var_name = &cap[1];

			let env_value = env::var(var_name)
				.map_err(|_| ConfigError::EnvVarNotFound(var_name.to_string()))?;

			result = result.replace(full_match, &env_value);
		}

		Ok(result)
	}

	fn apply_env_overrides(&self, catalog: &mut Catalog) {
		if let Ok(log_level) = env::var(format!("{}LOG_LEVEL", self.env_prefix)) {
			catalog.settings.log_level = log_level;
		}

		if let Ok(name) = env::var(format!("{}NAME", self.env_prefix)) {
			catalog.settings.name = name;
		}
	}

	/// Semantic checks beyond what the TOML shape enforces.
	///
	/// The engine itself accepts malformed data by contract, so this is
	/// the one place fixture mistakes get caught. Duplicate supplier ids
	/// are only warned about: the engine permits them deliberately.
	fn validate_catalog(&self, catalog: &Catalog) -> Result<(), ConfigError> {
		if catalog.suppliers.is_empty() {
			return Err(ConfigError::ValidationError(
				"Catalog must contain at least one supplier".to_string(),
			));
		}

		let mut seen = HashSet::new();
		for supplier in &catalog.suppliers {
			if supplier.id.is_empty() {
				return Err(ConfigError::ValidationError(format!(
					"Supplier {:?} has an empty id",
					supplier.name
				)));
			}

			if !seen.insert(supplier.id.as_str()) {
				warn!(id = %supplier.id, "duplicate supplier id; bids will apply to every holder");
			}

			for (item, price) in &supplier.base_prices {
				if *price < 0.0 {
					return Err(ConfigError::ValidationError(format!(
						"Supplier {:?}: negative base price for {:?}",
						supplier.id, item
					)));
				}
			}

			for tier in &supplier.bulk_tiers {
				if !(0.0..1.0).contains(&tier.discount) {
					return Err(ConfigError::ValidationError(format!(
						"Supplier {:?}: tier discount {} outside [0, 1)",
						supplier.id, tier.discount
					)));
				}
			}
		}

		for bid in &catalog.bids {
			for tier in &bid.custom_bulk_tiers {
				if !(0.0..1.0).contains(&tier.discount) {
					return Err(ConfigError::ValidationError(format!(
						"Bid for {:?}: tier discount {} outside [0, 1)",
						bid.supplier_id, tier.discount
					)));
				}
			}
		}

		if let Some(order) = &catalog.order {
			for (item, quantity) in &order.items {
				if *quantity == 0 {
					return Err(ConfigError::ValidationError(format!(
						"Order requests zero units of {:?}",
						item
					)));
				}
			}
		}

		Ok(())
	}
}
