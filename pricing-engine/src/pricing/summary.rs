//! Segment pricing summaries for the dashboard

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{PricingStrategy, Segment};

use super::money::{round_half_up, to_decimal};

/// Display-ready description of a segment's pricing rule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SegmentPricingSummary {
    pub strategy: String,
    pub description: String,
    /// "0%", "+N%" or "-N%"
    pub price_adjustment: String,
    pub max_discount: String,
    pub conditions: Vec<String>,
}

/// Summarize the pricing rule of a segment
pub fn segment_pricing_summary(segment: &Segment) -> SegmentPricingSummary {
    let Some(rule) = &segment.pricing_rule else {
        return SegmentPricingSummary {
            strategy: PricingStrategy::Standard.display_name().to_string(),
            description: "No special pricing rules".to_string(),
            price_adjustment: "0%".to_string(),
            max_discount: "0%".to_string(),
            conditions: Vec::new(),
        };
    };

    let mut conditions = Vec::new();
    if let Some(min) = rule.conditions.min_order_bound() {
        conditions.push(format!("Minimum order: ${}", min));
    }
    if let Some(max) = rule.conditions.max_order_bound() {
        conditions.push(format!("Maximum order: ${}", max));
    }
    if rule.conditions.time_based_adjustment {
        conditions.push("Time-based flash sales active".to_string());
    }
    if rule.conditions.inventory_based_adjustment {
        conditions.push("Inventory-based pricing".to_string());
    }

    SegmentPricingSummary {
        strategy: rule.strategy.display_name().to_string(),
        description: rule.description.clone(),
        price_adjustment: format_price_adjustment(rule.price_multiplier),
        max_discount: format!("{}%", rule.max_discount),
        conditions,
    }
}

/// Signed integer percentage of a multiplier ("+20%", "-15%")
fn format_price_adjustment(multiplier: f64) -> String {
    let delta = to_decimal(multiplier) - Decimal::ONE;
    let pct = round_half_up(delta.abs() * Decimal::ONE_HUNDRED, 0).normalize();
    if delta.is_zero() {
        "0%".to_string()
    } else if delta.is_sign_positive() {
        format!("+{}%", pct)
    } else {
        format!("-{}%", pct)
    }
}

/// Aggregate header of the dynamic pricing page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PricingOverview {
    pub total_segments: usize,
    /// Segments carrying a pricing rule
    pub active_strategies: usize,
    /// Mean `priceMultiplier - 1` over ruled segments, as an integer percent
    pub average_price_adjustment: i64,
    pub premium_segments: usize,
    pub discount_segments: usize,
}

pub fn pricing_overview(segments: &[Segment]) -> PricingOverview {
    let rules: Vec<_> = segments
        .iter()
        .filter_map(|s| s.pricing_rule.as_ref())
        .collect();

    let average_price_adjustment = if rules.is_empty() {
        0
    } else {
        let total: Decimal = rules
            .iter()
            .map(|r| to_decimal(r.price_multiplier) - Decimal::ONE)
            .sum();
        let mean = total / Decimal::from(rules.len()) * Decimal::ONE_HUNDRED;
        round_half_up(mean, 0).to_i64().unwrap_or_default()
    };

    let count = |strategy: PricingStrategy| rules.iter().filter(|r| r.strategy == strategy).count();

    PricingOverview {
        total_segments: segments.len(),
        active_strategies: rules.len(),
        average_price_adjustment,
        premium_segments: count(PricingStrategy::Premium),
        discount_segments: count(PricingStrategy::Discount),
    }
}
