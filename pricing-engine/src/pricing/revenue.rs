//! Revenue impact projection
//!
//! Linear approximation: the multiplier is applied to the whole revenue,
//! ignoring floor and cap clamps.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::Segment;

use super::matcher::segment_rule;
use super::money::{percent_of, to_decimal, to_f64, validate_order_value};
use crate::utils::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RevenueImpact {
    pub base_revenue: f64,
    pub adjusted_revenue: f64,
    pub revenue_change: f64,
    /// 0 when the base revenue is 0
    pub revenue_change_percentage: f64,
}

/// Project the revenue effect of a segment's pricing rule
pub fn calculate_revenue_impact(
    segment: &Segment,
    average_order_value: f64,
    estimated_orders: u32,
) -> AppResult<RevenueImpact> {
    validate_order_value(average_order_value, "averageOrderValue")?;

    let base = to_decimal(average_order_value) * Decimal::from(estimated_orders);
    let adjusted = match segment_rule(segment)? {
        Some(rule) => base * to_decimal(rule.price_multiplier),
        None => base,
    };
    let change = adjusted - base;

    let impact = RevenueImpact {
        base_revenue: to_f64(base),
        adjusted_revenue: to_f64(adjusted),
        revenue_change: to_f64(change),
        revenue_change_percentage: to_f64(percent_of(change, base)),
    };

    tracing::debug!(
        segment_id = %segment.id,
        base_revenue = impact.base_revenue,
        revenue_change = impact.revenue_change,
        "Revenue impact projected"
    );

    Ok(impact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{PricingRule, PricingStrategy};

    #[test]
    fn test_no_rule_keeps_revenue() {
        let impact = calculate_revenue_impact(&Segment::new("s", "s"), 200.0, 50).unwrap();
        assert_eq!(impact.base_revenue, 10000.0);
        assert_eq!(impact.adjusted_revenue, 10000.0);
        assert_eq!(impact.revenue_change, 0.0);
        assert_eq!(impact.revenue_change_percentage, 0.0);
    }

    #[test]
    fn test_multiplier_ignores_clamps() {
        // Floor and cap would change a per-order price, not the projection
        let rule = PricingRule::new(PricingStrategy::Discount, 0.85, 5.0, 500.0);
        let segment = Segment::new("s", "s").with_rule(rule);
        let impact = calculate_revenue_impact(&segment, 200.0, 50).unwrap();
        assert_eq!(impact.adjusted_revenue, 8500.0);
        assert_eq!(impact.revenue_change, -1500.0);
        assert_eq!(impact.revenue_change_percentage, -15.0);
    }

    #[test]
    fn test_premium_rounding() {
        let rule = PricingRule::new(PricingStrategy::Premium, 1.15, 0.0, 0.0);
        let segment = Segment::new("s", "s").with_rule(rule);
        let impact = calculate_revenue_impact(&segment, 33.33, 3).unwrap();
        assert_eq!(impact.base_revenue, 99.99);
        // 99.99 * 1.15 = 114.9885
        assert_eq!(impact.adjusted_revenue, 114.99);
        assert_eq!(impact.revenue_change, 15.0);
        assert_eq!(impact.revenue_change_percentage, 15.0);
    }

    #[test]
    fn test_zero_base_revenue() {
        let rule = PricingRule::new(PricingStrategy::Premium, 1.2, 0.0, 0.0);
        let segment = Segment::new("s", "s").with_rule(rule);
        let impact = calculate_revenue_impact(&segment, 200.0, 0).unwrap();
        assert_eq!(impact.base_revenue, 0.0);
        assert_eq!(impact.revenue_change_percentage, 0.0);
    }

    #[test]
    fn test_invalid_average_order_value() {
        let segment = Segment::new("s", "s");
        assert!(calculate_revenue_impact(&segment, f64::NAN, 10).is_err());
        assert!(calculate_revenue_impact(&segment, -10.0, 10).is_err());
    }

    #[test]
    fn test_invalid_rule_rejected() {
        let rule = PricingRule::new(PricingStrategy::Premium, f64::NAN, 0.0, 0.0);
        let segment = Segment::new("seg-x", "s").with_rule(rule);
        let err = calculate_revenue_impact(&segment, 200.0, 50).unwrap_err();
        assert_eq!(err.code, shared::ErrorCode::InvalidPricingRule);
        assert_eq!(err.details.unwrap().get("segmentId").unwrap(), "seg-x");
    }
}
