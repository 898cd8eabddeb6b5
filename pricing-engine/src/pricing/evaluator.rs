//! Pricing Rule Evaluator
//!
//! Computes a personalized price for a customer from the pricing rule of
//! their segment:
//! - Strategy adjustment (premium, discount, loyalty, dynamic, standard)
//! - Minimum price floor
//! - Maximum discount cap
//! - Non-negative guard
//!
//! Uses rust_decimal for precision calculations.

use std::sync::Arc;

use chrono::Duration;
use chrono_tz::Tz;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{Customer, DynamicPrice, PricingRule, PricingStrategy, Segment};

use super::matcher::{FLASH_SALE_PERCENT, is_flash_sale_active, segment_rule};
use super::money::{to_decimal, to_f64, validate_amount, whole_percent};
use crate::core::Config;
use crate::utils::{AppError, AppResult, Clock};

const NO_RULE_REASON: &str = "Standard pricing - no segment rule";
const MIN_PRICE_SUFFIX: &str = " (minimum price applied)";

/// One product line for bulk pricing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductPriceInput {
    pub id: String,
    pub base_price: f64,
}

impl ProductPriceInput {
    pub fn new(id: impl Into<String>, base_price: f64) -> Self {
        Self {
            id: id.into(),
            base_price,
        }
    }
}

/// Unrounded outcome of applying a rule
#[derive(Debug, Clone, PartialEq)]
struct Adjustment {
    adjusted: Decimal,
    discount: Decimal,
    reason: String,
}

/// Applies segment pricing rules to base prices
#[derive(Debug, Clone)]
pub struct PricingRuleEvaluator {
    clock: Arc<dyn Clock>,
    timezone: Tz,
    validity: Duration,
}

impl PricingRuleEvaluator {
    /// Evaluator with UTC flash windows and a 24 hour validity window
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            timezone: chrono_tz::UTC,
            validity: Duration::hours(24),
        }
    }

    pub fn from_config(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self::new(clock)
            .with_timezone(config.timezone)
            .with_validity(config.price_validity())
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_validity(mut self, validity: Duration) -> Self {
        self.validity = validity;
        self
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Calculate the personalized price of one product for a customer
    ///
    /// Errors when `base_price` is not a finite amount in range, or when the
    /// segment's rule has invalid parameters.
    pub fn calculate_price(
        &self,
        base_price: f64,
        customer: &Customer,
        segment: &Segment,
        product_id: &str,
    ) -> AppResult<DynamicPrice> {
        validate_amount(base_price, "basePrice")?;

        let now = self.clock.now();

        let valid_until = now.checked_add_signed(self.validity).ok_or_else(|| {
            AppError::config(format!("Price validity {} overflows the clock", self.validity))
        })?;

        // Without a rule the base price is returned as given
        let (adjusted_price, discount, reason) = match segment_rule(segment)? {
            None => (base_price, 0.0, NO_RULE_REASON.to_string()),
            Some(rule) => {
                let flash_sale = rule.strategy == PricingStrategy::Dynamic
                    && rule.conditions.time_based_adjustment
                    && is_flash_sale_active(now, self.timezone);
                let adjustment = apply_rule(to_decimal(base_price), rule, flash_sale);
                (
                    to_f64(adjustment.adjusted),
                    to_f64(adjustment.discount),
                    adjustment.reason,
                )
            }
        };

        let price = DynamicPrice {
            customer_id: customer.id.clone(),
            product_id: product_id.to_string(),
            base_price,
            adjusted_price,
            discount,
            reason,
            segment_id: segment.id.clone(),
            valid_until,
        };

        tracing::debug!(
            customer_id = %price.customer_id,
            segment_id = %price.segment_id,
            product_id = %price.product_id,
            base_price,
            adjusted_price = price.adjusted_price,
            discount = price.discount,
            "Price calculated"
        );

        Ok(price)
    }

    /// Price several products for one customer, preserving input order
    ///
    /// Fails on the first invalid product.
    pub fn calculate_bulk_prices(
        &self,
        products: &[ProductPriceInput],
        customer: &Customer,
        segment: &Segment,
    ) -> AppResult<Vec<DynamicPrice>> {
        products
            .iter()
            .map(|p| {
                self.calculate_price(p.base_price, customer, segment, &p.id)
                    .map_err(|e| e.with_detail("productId", p.id.clone()))
            })
            .collect()
    }
}

/// Apply strategy, floor, cap and non-negative guard, in that order
fn apply_rule(base: Decimal, rule: &PricingRule, flash_sale: bool) -> Adjustment {
    let mut adjusted = base * to_decimal(rule.price_multiplier);
    let mut discount = Decimal::ZERO;
    let mut reason = String::new();

    match rule.strategy {
        PricingStrategy::Premium => {
            reason.push_str("Premium pricing with exclusive benefits");
        }
        PricingStrategy::Discount => {
            discount = base - adjusted;
            reason = format!("{}% segment discount applied", whole_percent(discount, base));
        }
        PricingStrategy::Loyalty => {
            adjusted = base;
            reason.push_str("Loyalty member - earn 2x rewards points");
        }
        PricingStrategy::Dynamic => {
            // Without time-based adjustment the multiplier result stands, unexplained
            if rule.conditions.time_based_adjustment {
                if flash_sale {
                    adjusted -= base * Decimal::from(FLASH_SALE_PERCENT) / Decimal::ONE_HUNDRED;
                    discount = base - adjusted;
                    reason = format!("Flash sale active! {}% off", whole_percent(discount, base));
                } else {
                    discount = base - adjusted;
                    reason = format!("Dynamic pricing - {}% off", whole_percent(discount, base));
                }
            }
        }
        PricingStrategy::Standard | PricingStrategy::Unrecognized => {
            adjusted = base;
            reason.push_str("Standard pricing");
        }
    }

    let min_price = to_decimal(rule.min_price);
    if adjusted < min_price {
        tracing::debug!(%adjusted, %min_price, "Minimum price applied");
        adjusted = min_price;
        discount = base - adjusted;
        reason.push_str(MIN_PRICE_SUFFIX);
    }

    let max_discount = base * to_decimal(rule.max_discount) / Decimal::ONE_HUNDRED;
    if discount > max_discount {
        tracing::debug!(%discount, %max_discount, "Maximum discount applied");
        discount = max_discount;
        adjusted = base - discount;
        reason = format!("Maximum {}% discount applied", rule.max_discount);
    }

    if adjusted < Decimal::ZERO {
        adjusted = Decimal::ZERO;
        discount = base;
    }

    Adjustment {
        adjusted,
        discount,
        reason,
    }
}
