//! Shared types for the supplier selection system.
//!
//! This crate defines the data model exchanged between the catalog loader,
//! the selection engine, and the service layer: suppliers with their price
//! lists and bulk-discount tiers, bids that override supplier pricing,
//! buyer orders, and the computed offer types returned by ranking.

pub mod bid;
pub mod geo;
pub mod offer;
pub mod order;
pub mod supplier;

pub use bid::*;
pub use geo::*;
pub use offer::*;
pub use order::*;
pub use supplier::*;
