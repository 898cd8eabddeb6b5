//! Segment Pricing Engine - 客户分群动态定价
//!
//! # 架构概述
//!
//! Personalized pricing for the customer-analytics dashboard:
//!
//! - **定价** (`pricing`): rule evaluation, comparison, summaries, revenue impact
//! - **营销活动** (`offers`): offer store and the draft -> active workflow
//! - **配置** (`core`): environment-driven configuration
//! - **工具** (`utils`): logging, injected clock, input validation
//!
//! # 模块结构
//!
//! ```text
//! pricing-engine/src/
//! ├── core/          # 配置
//! ├── pricing/       # 定价规则与分析
//! ├── offers/        # 营销活动仓储与服务
//! ├── catalog.rs     # 示例分群
//! └── utils/         # 日志、时钟、校验
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pricing_engine::{PricingRuleEvaluator, SystemClock};
//! use shared::models::{Customer, PricingRule, PricingStrategy, Segment};
//!
//! let evaluator = PricingRuleEvaluator::new(Arc::new(SystemClock));
//! let segment = Segment::new("seg-2", "Price-Sensitive Anxious Buyers")
//!     .with_rule(PricingRule::new(PricingStrategy::Discount, 0.8, 50.0, 0.0));
//!
//! let price = evaluator
//!     .calculate_price(100.0, &Customer::new("cust-1"), &segment, "sku-1")
//!     .unwrap();
//! assert_eq!(price.adjusted_price, 80.0);
//! assert_eq!(price.reason, "20% segment discount applied");
//! ```

pub mod catalog;
pub mod core;
pub mod offers;
pub mod pricing;
pub mod utils;

// Re-export 公共类型
pub use crate::core::Config;
pub use offers::{InMemoryOfferRepository, OfferFilter, OfferRepository, OfferService};
pub use pricing::{
    PricingEligibility, PricingOverview, PricingRuleEvaluator, ProductPriceInput, RevenueImpact,
    SegmentPriceComparison, SegmentPricingSummary, calculate_revenue_impact,
    compare_prices_across_segments, pricing_overview, segment_pricing_summary,
    validate_pricing_eligibility,
};
pub use utils::{AppError, AppResult, Clock, FixedClock, SystemClock};

// Re-export unified error types from shared
pub use utils::{ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{apply_log_retention, cleanup_old_logs, init_logger, init_logger_with_file};

/// 设置环境: load `.env`, read [`Config`], install the logger, prune old logs
pub fn setup_environment() -> AppResult<Config> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    )?;
    apply_log_retention(config.log_dir.as_deref(), config.log_retention_days);
    Ok(config)
}
