//! Unified error codes for the pricing workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Pricing errors
//! - 5xxx: Offer errors
//! - 6xxx: Segment errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the dashboard can
/// switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,

    // ==================== 4xxx: Pricing ====================
    /// Base price is not a finite, non-negative amount
    InvalidPrice = 4001,
    /// Pricing rule parameters are out of range
    InvalidPricingRule = 4002,
    /// Order value is not a finite amount
    InvalidOrderValue = 4003,

    // ==================== 5xxx: Offer ====================
    /// Offer not found
    OfferNotFound = 5001,
    /// Offer is not in draft status
    OfferNotDraft = 5002,
    /// Offer validity window is inverted
    InvalidOfferWindow = 5003,
    /// Offer discount value is out of range
    InvalidOfferDiscount = 5004,

    // ==================== 6xxx: Segment ====================
    /// Segment not found
    SegmentNotFound = 6001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",

            // Pricing
            ErrorCode::InvalidPrice => "Price must be a finite, non-negative amount",
            ErrorCode::InvalidPricingRule => "Pricing rule is invalid",
            ErrorCode::InvalidOrderValue => "Order value must be a finite amount",

            // Offer
            ErrorCode::OfferNotFound => "Offer not found",
            ErrorCode::OfferNotDraft => "Only draft offers can be sent",
            ErrorCode::InvalidOfferWindow => "Offer must start before it ends",
            ErrorCode::InvalidOfferDiscount => "Offer discount value is out of range",

            // Segment
            ErrorCode::SegmentNotFound => "Segment not found",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),

            // Pricing
            4001 => Ok(ErrorCode::InvalidPrice),
            4002 => Ok(ErrorCode::InvalidPricingRule),
            4003 => Ok(ErrorCode::InvalidOrderValue),

            // Offer
            5001 => Ok(ErrorCode::OfferNotFound),
            5002 => Ok(ErrorCode::OfferNotDraft),
            5003 => Ok(ErrorCode::InvalidOfferWindow),
            5004 => Ok(ErrorCode::InvalidOfferDiscount),

            // Segment
            6001 => Ok(ErrorCode::SegmentNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
