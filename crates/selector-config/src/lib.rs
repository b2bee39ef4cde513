//! Catalog loading for the supplier selection service.
//!
//! A catalog is a TOML file carrying the suppliers to register, any
//! pre-submitted bids, and optionally the order to rank. The loader
//! supports `${VAR}` environment substitution and env-prefixed overrides,
//! and runs a semantic validation pass before handing the catalog over.

mod loader;
mod types;

pub use loader::{CatalogLoader, ConfigError};
pub use types::{BidTemplate, Catalog, Settings};
