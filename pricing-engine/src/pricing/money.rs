//! Money helpers
//!
//! Calculations run on `rust_decimal::Decimal`; results are stored as `f64`
//! rounded to cents.

use rust_decimal::prelude::*;

use crate::utils::{AppError, AppResult, ErrorCode};

/// Monetary values are rounded to 2 decimal places
const DECIMAL_PLACES: u32 = 2;

pub use shared::models::MAX_AMOUNT;

/// Convert f64 to Decimal for calculation
#[inline]
pub(crate) fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Round half-up (towards +∞ on ties), matching `Math.round(x * 10^dp) / 10^dp`
pub(crate) fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    value.round_dp_with_strategy(dp, strategy)
}

/// Convert Decimal back to f64, rounded to cents
#[inline]
pub(crate) fn to_f64(value: Decimal) -> f64 {
    round_half_up(value, DECIMAL_PLACES)
        .to_f64()
        .unwrap_or_default()
}

/// `part / whole * 100`, or zero when `whole` is zero
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part / whole * Decimal::ONE_HUNDRED
}

/// Whole-number percentage for reason texts ("15% off")
pub(crate) fn whole_percent(part: Decimal, whole: Decimal) -> Decimal {
    round_half_up(percent_of(part, whole), 0).normalize()
}

/// Validate that an amount is finite, non-negative and within range
pub fn validate_amount(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 || value > MAX_AMOUNT {
        tracing::warn!(field, value, "Rejected amount");
        return Err(AppError::invalid_price(field, value));
    }
    Ok(())
}

/// Validate an order value used for eligibility and revenue projections
pub fn validate_order_value(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 || value > MAX_AMOUNT {
        tracing::warn!(field, value, "Rejected order value");
        return Err(AppError::with_message(
            ErrorCode::InvalidOrderValue,
            format!("{field} must be a finite, non-negative amount, got {value}"),
        )
        .with_detail("field", field)
        .with_detail("value", value.to_string()));
    }
    Ok(())
}
