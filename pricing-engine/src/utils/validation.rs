//! Input validation helpers
//!
//! Centralized text length constants and validation functions for
//! offer payloads.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Offer titles (dashboard cards truncate beyond this)
pub const MAX_TITLE_LEN: usize = 200;

/// Offer descriptions
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Segment ids referenced by an offer
pub const MAX_SEGMENT_ID_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    validate_text_len(value, field, max_len)
}

/// Validate that an optional string is within the length limit.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}
