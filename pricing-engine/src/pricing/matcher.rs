//! Pricing Rule Matcher
//!
//! Time-window checks for dynamic pricing and order-value eligibility.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use shared::models::{Customer, PricingRule, Segment};

use super::money::validate_order_value;
use crate::utils::AppResult;
use crate::utils::time::local_hour;

/// Flash sale windows as half-open `[start, end)` hours of the local day
pub const FLASH_SALE_WINDOWS: [(u32, u32); 2] = [(10, 14), (18, 22)];

/// Extra reduction during a flash sale, as a percentage of the base price
pub const FLASH_SALE_PERCENT: u32 = 10;

/// Check if an hour of day (0-23) falls inside a flash sale window
pub fn is_flash_sale_hour(hour: u32) -> bool {
    FLASH_SALE_WINDOWS
        .iter()
        .any(|&(start, end)| hour >= start && hour < end)
}

/// Check if a flash sale is running at `now` in the business timezone
pub fn is_flash_sale_active(now: DateTime<Utc>, tz: Tz) -> bool {
    is_flash_sale_hour(local_hour(now, tz))
}

/// The segment's rule, checked before any pricing math reads it
pub(crate) fn segment_rule(segment: &Segment) -> AppResult<Option<&PricingRule>> {
    let Some(rule) = &segment.pricing_rule else {
        return Ok(None);
    };
    if let Err(e) = rule.validate() {
        tracing::warn!(segment_id = %segment.id, error = %e, "Invalid pricing rule");
        return Err(e.with_detail("segmentId", segment.id.clone()));
    }
    Ok(Some(rule))
}

/// Result of an order-value eligibility check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingEligibility {
    pub eligible: bool,
    pub reason: String,
}

impl PricingEligibility {
    fn eligible(reason: impl Into<String>) -> Self {
        Self {
            eligible: true,
            reason: reason.into(),
        }
    }

    fn rejected(reason: impl Into<String>) -> Self {
        Self {
            eligible: false,
            reason: reason.into(),
        }
    }
}

/// Check whether an order qualifies for the segment's pricing rule
///
/// Only the first violated bound is reported; the minimum is checked first.
pub fn validate_pricing_eligibility(
    customer: &Customer,
    segment: &Segment,
    order_value: f64,
) -> AppResult<PricingEligibility> {
    validate_order_value(order_value, "orderValue")?;

    let Some(rule) = segment_rule(segment)? else {
        return Ok(PricingEligibility::eligible("No pricing rules to validate"));
    };

    if let Some(min) = rule.conditions.min_order_bound()
        && order_value < min
    {
        tracing::debug!(
            customer_id = %customer.id,
            segment_id = %segment.id,
            order_value,
            min,
            "Order below segment minimum"
        );
        return Ok(PricingEligibility::rejected(format!(
            "Minimum order value of ${} required",
            min
        )));
    }

    if let Some(max) = rule.conditions.max_order_bound()
        && order_value > max
    {
        tracing::debug!(
            customer_id = %customer.id,
            segment_id = %segment.id,
            order_value,
            max,
            "Order above segment maximum"
        );
        return Ok(PricingEligibility::rejected(format!(
            "Maximum order value of ${} exceeded",
            max
        )));
    }

    Ok(PricingEligibility::eligible(
        "Customer qualifies for segment pricing",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::models::{PricingConditions, PricingRule, PricingStrategy};

    fn segment_with_bounds(min: Option<f64>, max: Option<f64>) -> Segment {
        let rule = PricingRule::new(PricingStrategy::Discount, 0.85, 20.0, 5.0).with_conditions(
            PricingConditions {
                min_order_value: min,
                max_order_value: max,
                ..Default::default()
            },
        );
        Segment::new("seg-2", "Price-Sensitive Anxious Buyers").with_rule(rule)
    }

    #[test]
    fn test_flash_sale_hours() {
        for hour in [10, 11, 13, 18, 21] {
            assert!(is_flash_sale_hour(hour), "hour {hour} should be in a window");
        }
        for hour in [0, 9, 14, 17, 22, 23] {
            assert!(!is_flash_sale_hour(hour), "hour {hour} should be outside");
        }
    }

    #[test]
    fn test_flash_sale_uses_business_timezone() {
        // 09:30 UTC is 11:30 in Madrid (CEST)
        let now = Utc.with_ymd_and_hms(2026, 7, 1, 9, 30, 0).unwrap();
        assert!(!is_flash_sale_active(now, chrono_tz::UTC));
        assert!(is_flash_sale_active(now, chrono_tz::Europe::Madrid));
    }

    #[test]
    fn test_no_rule_is_eligible() {
        let segment = Segment::new("seg-4", "Bargain Hunters");
        let result = validate_pricing_eligibility(&Customer::new("c1"), &segment, 1.0).unwrap();
        assert!(result.eligible);
        assert_eq!(result.reason, "No pricing rules to validate");
    }

    #[test]
    fn test_minimum_checked_first() {
        // Inverted bounds: both checks would fail for 100
        let segment = segment_with_bounds(Some(200.0), Some(50.0));
        let result =
            validate_pricing_eligibility(&Customer::new("c1"), &segment, 100.0).unwrap();
        assert!(!result.eligible);
        assert_eq!(result.reason, "Minimum order value of $200 required");
    }

    #[test]
    fn test_maximum_exceeded() {
        let segment = segment_with_bounds(Some(50.0), Some(499.99));
        let result =
            validate_pricing_eligibility(&Customer::new("c1"), &segment, 500.0).unwrap();
        assert!(!result.eligible);
        assert_eq!(result.reason, "Maximum order value of $499.99 exceeded");
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let segment = segment_with_bounds(Some(50.0), Some(500.0));
        let customer = Customer::new("c1");
        for value in [50.0, 120.0, 500.0] {
            let result = validate_pricing_eligibility(&customer, &segment, value).unwrap();
            assert!(result.eligible);
            assert_eq!(result.reason, "Customer qualifies for segment pricing");
        }
    }

    #[test]
    fn test_zero_bound_is_ignored() {
        let segment = segment_with_bounds(Some(0.0), None);
        let result = validate_pricing_eligibility(&Customer::new("c1"), &segment, 0.0).unwrap();
        assert!(result.eligible);
    }

    #[test]
    fn test_invalid_rule_rejected() {
        let mut segment = segment_with_bounds(Some(50.0), None);
        if let Some(rule) = segment.pricing_rule.as_mut() {
            rule.max_discount = 150.0;
        }
        let err =
            validate_pricing_eligibility(&Customer::new("c1"), &segment, 100.0).unwrap_err();
        assert_eq!(err.code, shared::ErrorCode::InvalidPricingRule);
        assert_eq!(err.details.unwrap().get("segmentId").unwrap(), "seg-2");
    }

    #[test]
    fn test_invalid_order_value_rejected() {
        let segment = segment_with_bounds(None, None);
        let customer = Customer::new("c1");
        assert!(validate_pricing_eligibility(&customer, &segment, f64::NAN).is_err());
        assert!(validate_pricing_eligibility(&customer, &segment, -5.0).is_err());
    }
}
