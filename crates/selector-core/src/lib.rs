//! Supplier selection engine.
//!
//! This crate holds the one piece of the marketplace with real decision
//! logic: given a registry of suppliers (price lists, bulk-discount tiers,
//! delivery constraints, quality ratings) and a buyer's order, compute
//! per-supplier effective prices and a composite score, then rank the
//! viable suppliers.
//!
//! The engine is a plain value type with no interior locking and no I/O;
//! every operation runs to completion synchronously (see
//! [`SelectionEngine`] for the sharing caveats). Loading suppliers and
//! rendering results are the caller's business.

pub mod engine;
pub mod pricing;
pub mod scoring;

pub use engine::SelectionEngine;
