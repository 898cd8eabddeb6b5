/// Current UTC timestamp (millis)
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Custom epoch for generated ids: 2024-01-01 00:00:00 UTC
const ID_EPOCH_MS: i64 = 1_704_067_200_000;

/// Generate a Snowflake-style i64 id stamped with the current time.
pub fn snowflake_id() -> i64 {
    snowflake_id_at(now_millis())
}

/// Generate a Snowflake-style i64 id for the given Unix millis.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC
///   - 12 bits: random
///
/// Timestamps before the epoch saturate to zero.
pub fn snowflake_id_at(millis: i64) -> i64 {
    use rand::Rng;
    let ts = (millis - ID_EPOCH_MS).max(0) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowflake_fits_js_safe_integer() {
        let id = snowflake_id();
        assert!(id > 0);
        assert!(id < (1_i64 << 53));
    }

    #[test]
    fn test_snowflake_orders_by_time() {
        let earlier = snowflake_id_at(ID_EPOCH_MS + 1_000);
        let later = snowflake_id_at(ID_EPOCH_MS + 2_000);
        assert!(earlier < later);
        assert_eq!(earlier >> 12, 1_000);
    }

    #[test]
    fn test_snowflake_before_epoch_saturates() {
        assert_eq!(snowflake_id_at(0) >> 12, 0);
    }
}
