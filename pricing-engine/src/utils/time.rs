//! Clock abstraction and business-timezone helpers
//!
//! Pricing never reads the system time directly: the evaluator and the
//! offer store hold an injected [`Clock`], so tests can pin "now".

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use parking_lot::RwLock;

use super::{AppError, AppResult};

/// Source of the current time
pub trait Clock: Send + Sync + std::fmt::Debug {
    fn now(&self) -> DateTime<Utc>;

    /// Current time as Unix millis
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for tests and previews
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.write() = now;
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.write();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read()
    }
}

/// Parse an IANA timezone name (e.g. "Europe/Madrid")
pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AppError::config(format!("Invalid timezone: {}", name)))
}

/// Hour of day (0-23) of `now` in the business timezone
pub fn local_hour(now: DateTime<Utc>, tz: Tz) -> u32 {
    now.with_timezone(&tz).hour()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_set_and_advance() {
        let start = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
        let clock = FixedClock::new(start);
        assert_eq!(clock.now(), start);

        clock.advance(chrono::Duration::hours(2));
        assert_eq!(clock.now(), start + chrono::Duration::hours(2));

        let later = Utc.with_ymd_and_hms(2026, 12, 1, 0, 0, 0).unwrap();
        clock.set(later);
        assert_eq!(clock.now_millis(), later.timestamp_millis());
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("UTC").unwrap(), chrono_tz::UTC);
        assert_eq!(
            parse_timezone(" Europe/Madrid ").unwrap(),
            chrono_tz::Europe::Madrid
        );
        assert!(parse_timezone("Mars/Olympus").is_err());
    }

    #[test]
    fn test_local_hour_uses_business_timezone() {
        // 09:30 UTC is 11:30 in Madrid during summer time
        let now = Utc.with_ymd_and_hms(2026, 7, 1, 9, 30, 0).unwrap();
        assert_eq!(local_hour(now, chrono_tz::UTC), 9);
        assert_eq!(local_hour(now, chrono_tz::Europe::Madrid), 11);
    }
}
