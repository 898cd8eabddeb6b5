//! Data models
//!
//! Shared between the pricing engine and the dashboard (via JSON).
//! Field names serialize in camelCase to match the dashboard's records.

pub mod dynamic_price;
pub mod offer;
pub mod pricing_rule;
pub mod segment;

// Re-exports
pub use dynamic_price::*;
pub use offer::*;
pub use pricing_rule::*;
pub use segment::*;
