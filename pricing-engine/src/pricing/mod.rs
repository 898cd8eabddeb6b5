//! Segment Pricing Module
//!
//! Personalized prices from segment pricing rules, plus the pure
//! analytics the dashboard derives from them.

mod comparison;
mod evaluator;
pub mod matcher;
mod money;
mod revenue;
mod summary;

pub use comparison::*;
pub use evaluator::*;
pub use matcher::*;
pub use money::{MAX_AMOUNT, validate_amount, validate_order_value};
pub use revenue::*;
pub use summary::*;
