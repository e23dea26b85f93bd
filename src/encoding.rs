//! Seed encoding: the arithmetic every provider reduces its payload with.
//!
//! All providers share one modulus. The formulas are pure functions of the
//! payload and an elapsed-time reading, which comes from a [`Clock`] so tests
//! can freeze it. The only exception is the news fallback, which mixes in a
//! fresh random value when the search returned no article.

use chrono::{DateTime, Utc};
use rand::RngCore;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::Seed;

/// Modulus every provider reduces its seed by.
pub const SEED_MODULUS: u64 = 1_000_000_007;

/// Multiplier applied to the time provider's timestamp.
pub const TIME_MULTIPLIER: u64 = 1_000_000_009;

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Source of the "elapsed time since the Unix epoch" reading.
pub trait Clock: Send + Sync + fmt::Debug {
    fn since_epoch(&self) -> Duration;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn since_epoch(&self) -> Duration {
        // A clock set before 1970 reads as zero
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Duration);

impl FixedClock {
    pub fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }
}

impl Clock for FixedClock {
    fn since_epoch(&self) -> Duration {
        self.0
    }
}

/// 64-bit FNV-1a hash.
///
/// Stable across processes and platforms, unlike the std `DefaultHasher`
/// whose keys are randomized per process.
pub fn stable_hash(text: &str) -> u64 {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for b in text.bytes() {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x0000_0100_0000_01b3);
    }
    h
}

/// `round(temperature * elapsed_secs) mod SEED_MODULUS`.
pub fn encode_weather(temperature: f64, elapsed: Duration) -> Seed {
    let product = (temperature * elapsed.as_secs_f64()).round();
    // `as` saturates on overflow and maps NaN to zero
    Seed::reduce(product as i128, SEED_MODULUS)
}

/// `round(timestamp * TIME_MULTIPLIER) mod SEED_MODULUS`.
///
/// The timestamp is taken in nanoseconds so the product is exact; rounding is
/// half up.
pub fn encode_time(instant: &DateTime<Utc>) -> Seed {
    let nanos = i128::from(instant.timestamp()) * NANOS_PER_SEC
        + i128::from(instant.timestamp_subsec_nanos());
    let scaled = nanos * i128::from(TIME_MULTIPLIER);
    let rounded = (scaled + NANOS_PER_SEC / 2).div_euclid(NANOS_PER_SEC);
    Seed::reduce(rounded, SEED_MODULUS)
}

/// `(stable_hash(title) * elapsed_ms) mod SEED_MODULUS`.
///
/// Without a title the hash is replaced by an unseeded random `u64`; that
/// branch is intentionally non-deterministic.
pub fn encode_news(title: Option<&str>, elapsed: Duration) -> Seed {
    let base = match title {
        Some(title) => stable_hash(title),
        None => rand::thread_rng().next_u64(),
    };
    encode_news_with_base(base, elapsed)
}

fn encode_news_with_base(base: u64, elapsed: Duration) -> Seed {
    Seed::reduce_unsigned(u128::from(base) * elapsed.as_millis(), SEED_MODULUS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn stable_hash_matches_reference_vectors() {
        assert_eq!(stable_hash(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(stable_hash("a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(stable_hash("foobar"), 0x8594_4171_f739_67e8);
    }

    #[test]
    fn weather_formula() {
        let t = 1_713_787_200u64;
        let seed = encode_weather(25.0, Duration::from_secs(t));
        assert_eq!(seed.value(), (25 * t) % SEED_MODULUS);
    }

    #[test]
    fn weather_negative_temperature_stays_in_range() {
        let seed = encode_weather(-12.3, Duration::from_secs(1_713_787_200));
        let expected = ((-12.3f64 * 1_713_787_200.0).round() as i128)
            .rem_euclid(SEED_MODULUS as i128) as u64;
        assert_eq!(seed.value(), expected);
        assert!(seed.value() < SEED_MODULUS);
    }

    #[test]
    fn weather_zero_temperature_is_zero() {
        assert_eq!(encode_weather(0.0, Duration::from_secs(5)).value(), 0);
    }

    #[test]
    fn time_formula_whole_seconds() {
        let instant = Utc.with_ymd_and_hms(2024, 4, 22, 12, 0, 0).unwrap();
        let t = instant.timestamp() as i128;
        let expected = (t * TIME_MULTIPLIER as i128).rem_euclid(SEED_MODULUS as i128) as u64;
        assert_eq!(encode_time(&instant).value(), expected);
    }

    #[test]
    fn time_formula_rounds_fractional_product() {
        // 0.5 s * 1_000_000_009 = 500_000_004.5, rounds up
        let instant = Utc.timestamp_opt(0, 500_000_000).unwrap();
        assert_eq!(encode_time(&instant).value(), 500_000_005);
    }

    #[test]
    fn time_before_epoch_is_non_negative() {
        let instant = Utc.with_ymd_and_hms(1960, 1, 1, 0, 0, 0).unwrap();
        assert!(encode_time(&instant).value() < SEED_MODULUS);
    }

    #[test]
    fn news_formula_with_title() {
        let elapsed = Duration::from_millis(1_713_787_200_123);
        let expected = (u128::from(stable_hash("Sample Article Title")) * elapsed.as_millis()
            % u128::from(SEED_MODULUS)) as u64;
        assert_eq!(
            encode_news(Some("Sample Article Title"), elapsed).value(),
            expected
        );
    }

    #[test]
    fn news_formula_is_deterministic_for_same_reading() {
        let elapsed = Duration::from_millis(42_000);
        assert_eq!(
            encode_news(Some("headline"), elapsed),
            encode_news(Some("headline"), elapsed)
        );
    }

    #[test]
    fn news_fallback_stays_bounded() {
        for _ in 0..64 {
            let seed = encode_news(None, Duration::from_millis(1_713_787_200_123));
            assert!(seed.value() < SEED_MODULUS);
        }
    }

    #[test]
    fn fixed_clock_reads_back() {
        assert_eq!(FixedClock::from_secs(3).since_epoch(), Duration::from_secs(3));
        assert_eq!(
            FixedClock::from_millis(1500).since_epoch(),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.since_epoch() > Duration::from_secs(1_577_836_800));
    }
}
