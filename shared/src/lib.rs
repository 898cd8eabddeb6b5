//! Shared types for the segment pricing workspace
//!
//! Data models consumed by the pricing engine and the dashboard,
//! the unified error type, and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
