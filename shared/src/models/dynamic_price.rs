//! Dynamic Price Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Personalized price quote for one customer and product
///
/// Computed on every request and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DynamicPrice {
    pub customer_id: String,
    pub product_id: String,
    pub base_price: f64,
    /// Price after strategy and constraints, rounded to cents
    pub adjusted_price: f64,
    /// Discount from the base price, rounded to cents
    pub discount: f64,
    /// Human-readable justification shown next to the price
    pub reason: String,
    pub segment_id: String,
    pub valid_until: DateTime<Utc>,
}
