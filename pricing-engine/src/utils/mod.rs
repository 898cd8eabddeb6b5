//! 工具模块 - 通用工具函数和类型
//!
//! - [`AppError`] / [`AppResult`] - from shared::error
//! - [`Clock`] - 注入式时钟
//! - 日志、输入校验

pub mod logger;
pub mod time;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use time::{Clock, FixedClock, SystemClock};
