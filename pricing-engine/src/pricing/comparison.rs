//! Cross-segment price comparison
//!
//! A simplified variant of the evaluator: multiplier, floor and cap only,
//! without strategy branches or time context.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::Segment;

use super::matcher::segment_rule;
use super::money::{percent_of, to_decimal, to_f64, validate_amount};
use crate::utils::AppResult;

/// Product id used when the caller does not name one
pub const DEFAULT_PRODUCT_ID: &str = "sample-product";

/// Price of one product as seen by one segment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SegmentPriceComparison {
    pub segment_name: String,
    pub segment_id: String,
    pub product_id: String,
    pub base_price: f64,
    pub adjusted_price: f64,
    pub discount: f64,
    /// `discount / base_price * 100`, 0 for a zero base
    pub discount_percentage: f64,
}

/// Compare the price of a product across segments, preserving input order
pub fn compare_prices_across_segments(
    base_price: f64,
    segments: &[Segment],
    product_id: Option<&str>,
) -> AppResult<Vec<SegmentPriceComparison>> {
    validate_amount(base_price, "basePrice")?;

    let product_id = product_id.unwrap_or(DEFAULT_PRODUCT_ID);
    let base = to_decimal(base_price);

    let mut rows = Vec::with_capacity(segments.len());
    for segment in segments {
        let mut adjusted = base;
        if let Some(rule) = segment_rule(segment)? {
            adjusted = base * to_decimal(rule.price_multiplier);

            let min_price = to_decimal(rule.min_price);
            if adjusted < min_price {
                adjusted = min_price;
            }

            let max_discount = base * to_decimal(rule.max_discount) / Decimal::ONE_HUNDRED;
            if base - adjusted > max_discount {
                adjusted = base - max_discount;
            }
        }

        let discount = base - adjusted;
        rows.push(SegmentPriceComparison {
            segment_name: segment.name.clone(),
            segment_id: segment.id.clone(),
            product_id: product_id.to_string(),
            base_price,
            adjusted_price: to_f64(adjusted),
            discount: to_f64(discount),
            discount_percentage: to_f64(percent_of(discount, base)),
        });
    }

    Ok(rows)
}
