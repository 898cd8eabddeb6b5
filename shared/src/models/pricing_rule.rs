//! Pricing Rule Model

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Upper bound accepted for `price_multiplier`
pub const MAX_PRICE_MULTIPLIER: f64 = 10.0;

/// Largest accepted monetary amount (prices, order values, rule floors)
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Pricing strategy of a segment
///
/// Strategy strings the engine does not know deserialize into
/// [`PricingStrategy::Unrecognized`], which prices like `Standard`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PricingStrategy {
    Premium,
    Discount,
    Standard,
    Dynamic,
    Loyalty,
    #[serde(other)]
    Unrecognized,
}

impl PricingStrategy {
    /// Capitalized name shown in summaries
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Premium => "Premium",
            Self::Discount => "Discount",
            Self::Dynamic => "Dynamic",
            Self::Loyalty => "Loyalty",
            Self::Standard | Self::Unrecognized => "Standard",
        }
    }
}

/// Optional constraints attached to a rule
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_order_value: Option<f64>,
    #[serde(default)]
    pub time_based_adjustment: bool,
    #[serde(default)]
    pub inventory_based_adjustment: bool,
}

impl PricingConditions {
    /// Minimum order value, if one is set
    ///
    /// A zero (or NaN) bound counts as unset.
    pub fn min_order_bound(&self) -> Option<f64> {
        order_bound(self.min_order_value)
    }

    /// Maximum order value, if one is set
    ///
    /// A zero (or NaN) bound counts as unset.
    pub fn max_order_bound(&self) -> Option<f64> {
        order_bound(self.max_order_value)
    }
}

fn order_bound(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Pricing rule of a segment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingRule {
    pub strategy: PricingStrategy,
    /// Multiplier applied to the base price (1.2 = +20%)
    pub price_multiplier: f64,
    /// Maximum discount as a percentage of the base price (0-100)
    pub max_discount: f64,
    /// Floor for the adjusted price
    pub min_price: f64,
    #[serde(default)]
    pub conditions: PricingConditions,
    #[serde(default)]
    pub description: String,
}

impl PricingRule {
    /// Create a rule with no conditions
    pub fn new(
        strategy: PricingStrategy,
        price_multiplier: f64,
        max_discount: f64,
        min_price: f64,
    ) -> Self {
        Self {
            strategy,
            price_multiplier,
            max_discount,
            min_price,
            conditions: PricingConditions::default(),
            description: String::new(),
        }
    }

    /// Attach conditions to this rule
    pub fn with_conditions(mut self, conditions: PricingConditions) -> Self {
        self.conditions = conditions;
        self
    }

    /// Attach a description to this rule
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check the numeric parameters of the rule
    pub fn validate(&self) -> AppResult<()> {
        if !self.price_multiplier.is_finite()
            || self.price_multiplier <= 0.0
            || self.price_multiplier > MAX_PRICE_MULTIPLIER
        {
            return Err(AppError::invalid_rule(format!(
                "priceMultiplier must be in (0, {MAX_PRICE_MULTIPLIER}], got {}",
                self.price_multiplier
            ))
            .with_detail("field", "priceMultiplier"));
        }
        if !(0.0..=100.0).contains(&self.max_discount) {
            return Err(AppError::invalid_rule(format!(
                "maxDiscount must be between 0 and 100, got {}",
                self.max_discount
            ))
            .with_detail("field", "maxDiscount"));
        }
        if !self.min_price.is_finite() || !(0.0..=MAX_AMOUNT).contains(&self.min_price) {
            return Err(AppError::invalid_rule(format!(
                "minPrice must be between 0 and {MAX_AMOUNT}, got {}",
                self.min_price
            ))
            .with_detail("field", "minPrice"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_strategy_deserialize() {
        let s: PricingStrategy = serde_json::from_str("\"loyalty\"").unwrap();
        assert_eq!(s, PricingStrategy::Loyalty);

        let s: PricingStrategy = serde_json::from_str("\"clearance\"").unwrap();
        assert_eq!(s, PricingStrategy::Unrecognized);
        assert_eq!(s.display_name(), "Standard");
    }

    #[test]
    fn test_rule_deserialize_camel_case() {
        let json = r#"{
            "strategy": "dynamic",
            "priceMultiplier": 0.9,
            "maxDiscount": 25,
            "minPrice": 10,
            "conditions": { "minOrderValue": 50, "timeBasedAdjustment": true },
            "description": "Flash sales"
        }"#;
        let rule: PricingRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.strategy, PricingStrategy::Dynamic);
        assert_eq!(rule.price_multiplier, 0.9);
        assert_eq!(rule.conditions.min_order_value, Some(50.0));
        assert!(rule.conditions.time_based_adjustment);
        assert!(!rule.conditions.inventory_based_adjustment);
        assert!(rule.validate().is_ok());
    }

    #[test]
    fn test_conditions_default_when_missing() {
        let json = r#"{"strategy":"premium","priceMultiplier":1.2,"maxDiscount":0,"minPrice":0}"#;
        let rule: PricingRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.conditions, PricingConditions::default());
        assert!(rule.description.is_empty());
    }

    #[test]
    fn test_zero_order_bound_counts_as_unset() {
        let conditions = PricingConditions {
            min_order_value: Some(0.0),
            max_order_value: Some(500.0),
            ..Default::default()
        };
        assert_eq!(conditions.min_order_bound(), None);
        assert_eq!(conditions.max_order_bound(), Some(500.0));
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        let bad_multiplier = PricingRule::new(PricingStrategy::Discount, 0.0, 10.0, 0.0);
        let err = bad_multiplier.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPricingRule);

        let nan_multiplier = PricingRule::new(PricingStrategy::Discount, f64::NAN, 10.0, 0.0);
        assert!(nan_multiplier.validate().is_err());

        let bad_cap = PricingRule::new(PricingStrategy::Discount, 0.8, 120.0, 0.0);
        assert!(bad_cap.validate().is_err());

        let negative_floor = PricingRule::new(PricingStrategy::Discount, 0.8, 10.0, -1.0);
        assert!(negative_floor.validate().is_err());
    }

    #[test]
    fn test_validate_bounds_min_price() {
        let at_limit = PricingRule::new(PricingStrategy::Discount, 0.8, 10.0, MAX_AMOUNT);
        assert!(at_limit.validate().is_ok());

        let huge_floor = PricingRule::new(PricingStrategy::Discount, 0.8, 10.0, 1e30);
        let err = huge_floor.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPricingRule);
        assert_eq!(err.details.unwrap().get("field").unwrap(), "minPrice");
    }
}
