use chrono_tz::Tz;

use crate::utils::time::parse_timezone;

/// Default quote validity window (hours)
const DEFAULT_VALIDITY_HOURS: i64 = 24;

/// Longest accepted quote validity window (one year)
pub const MAX_VALIDITY_HOURS: i64 = 24 * 365;

/// Default retention for rolled log files (days)
const DEFAULT_LOG_RETENTION_DAYS: u64 = 30;

/// 引擎配置 - pricing engine and preview settings
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (unset) | 日志目录 (daily rolling) |
/// | LOG_JSON | false | JSON 日志格式 |
/// | LOG_RETENTION_DAYS | 30 | 日志保留天数 (0 = keep all) |
/// | PRICING_TIMEZONE | UTC | Flash-sale windows are evaluated in this zone |
/// | PRICE_VALIDITY_HOURS | 24 | Quote validity window, 1..=8760 |
/// | PREVIEW_BASE_PRICE | 100 | Base price used by `pricing-preview` |
/// | PREVIEW_AVERAGE_ORDER_VALUE | 200 | Revenue projection input |
/// | PREVIEW_ESTIMATED_ORDERS | 50 | Revenue projection input |
///
/// # 示例
///
/// ```ignore
/// PRICING_TIMEZONE=Europe/Madrid PREVIEW_BASE_PRICE=250 cargo run --bin pricing-preview
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub log_json: bool,
    /// Rolled files older than this are removed at startup
    pub log_retention_days: u64,
    /// Business timezone for time-of-day pricing
    pub timezone: Tz,
    /// How long a computed price stays valid
    pub price_validity_hours: i64,
    pub preview_base_price: f64,
    pub preview_average_order_value: f64,
    pub preview_estimated_orders: u32,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let timezone = match lookup("PRICING_TIMEZONE") {
            Some(name) => parse_timezone(&name).unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to UTC", e);
                chrono_tz::UTC
            }),
            None => chrono_tz::UTC,
        };

        Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|d| !d.trim().is_empty()),
            log_json: lookup("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_retention_days: lookup("LOG_RETENTION_DAYS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LOG_RETENTION_DAYS),
            timezone,
            price_validity_hours: lookup("PRICE_VALIDITY_HOURS")
                .and_then(|v| v.parse().ok())
                .filter(|h: &i64| (1..=MAX_VALIDITY_HOURS).contains(h))
                .unwrap_or(DEFAULT_VALIDITY_HOURS),
            preview_base_price: lookup("PREVIEW_BASE_PRICE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(100.0),
            preview_average_order_value: lookup("PREVIEW_AVERAGE_ORDER_VALUE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(200.0),
            preview_estimated_orders: lookup("PREVIEW_ESTIMATED_ORDERS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
        }
    }

    /// Quote validity window, clamped to `1..=MAX_VALIDITY_HOURS`
    pub fn price_validity(&self) -> chrono::Duration {
        chrono::Duration::hours(self.price_validity_hours.clamp(1, MAX_VALIDITY_HOURS))
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.is_development());
        assert!(!config.is_production());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_dir, None);
        assert!(!config.log_json);
        assert_eq!(config.log_retention_days, 30);
        assert_eq!(config.timezone, chrono_tz::UTC);
        assert_eq!(config.price_validity(), chrono::Duration::hours(24));
        assert_eq!(config.preview_base_price, 100.0);
        assert_eq!(config.preview_average_order_value, 200.0);
        assert_eq!(config.preview_estimated_orders, 50);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("ENVIRONMENT", "production"),
            ("LOG_JSON", "true"),
            ("LOG_DIR", "/var/log/pricing"),
            ("LOG_RETENTION_DAYS", "7"),
            ("PRICING_TIMEZONE", "America/New_York"),
            ("PRICE_VALIDITY_HOURS", "48"),
            ("PREVIEW_BASE_PRICE", "249.99"),
            ("PREVIEW_ESTIMATED_ORDERS", "120"),
        ]);
        assert!(config.is_production());
        assert!(config.log_json);
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/pricing"));
        assert_eq!(config.log_retention_days, 7);
        assert_eq!(config.timezone, chrono_tz::America::New_York);
        assert_eq!(config.price_validity_hours, 48);
        assert_eq!(config.preview_base_price, 249.99);
        assert_eq!(config.preview_estimated_orders, 120);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("PRICING_TIMEZONE", "Nowhere/Special"),
            ("PRICE_VALIDITY_HOURS", "-3"),
            ("PREVIEW_BASE_PRICE", "abc"),
            ("LOG_DIR", "  "),
        ]);
        assert_eq!(config.timezone, chrono_tz::UTC);
        assert_eq!(config.price_validity_hours, 24);
        assert_eq!(config.preview_base_price, 100.0);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn test_validity_above_one_year_falls_back() {
        for hours in ["8761", "3000000000", "9223372036854775807"] {
            let config = config_from(&[("PRICE_VALIDITY_HOURS", hours)]);
            assert_eq!(config.price_validity_hours, 24, "{hours} should fall back");
        }
        let config = config_from(&[("PRICE_VALIDITY_HOURS", "8760")]);
        assert_eq!(config.price_validity(), chrono::Duration::hours(MAX_VALIDITY_HOURS));
    }

    #[test]
    fn test_price_validity_clamps_direct_assignment() {
        let config = Config {
            price_validity_hours: i64::MAX,
            ..Config::default()
        };
        assert_eq!(config.price_validity(), chrono::Duration::hours(MAX_VALIDITY_HOURS));
    }
}
