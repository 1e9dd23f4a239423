//! Cumulative Temperature-Exposure Guard
//!
//! The per-reading engine is stateless, but spoilage is cumulative: product
//! that spent hours above cold-chain temperature is unsafe even if the
//! sensors look acceptable right now. This module tracks total time spent
//! above each configured threshold across an ordered reading sequence and
//! raises a force-unsafe flag once any time budget is spent.
//!
//! The accumulator composes *alongside* the engine, never inside it: feed it
//! the same readings, then downgrade the engine's verdict with [`guard`]
//! when it reports a breach.
//!
//! Integration is sample-and-hold: the interval between two observations is
//! attributed to the earlier observation's temperature. Out-of-order
//! timestamps contribute zero (saturating delta); non-finite temperatures
//! are skipped without disturbing the held sample.

use heapless::Vec;

use crate::{
    errors::{ConfigError, ConfigResult},
    reading::Timestamp,
    verdict::Verdict,
};

/// Maximum number of exposure thresholds tracked at once
pub const MAX_EXPOSURE_LIMITS: usize = 4;

/// One exposure budget: time allowed above a temperature threshold
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExposureLimit {
    /// Exclusive temperature threshold in Celsius
    pub threshold_c: f32,
    /// Cumulative time budget above the threshold, in milliseconds
    pub max_ms: u64,
}

impl ExposureLimit {
    /// Shorthand constructor
    pub const fn new(threshold_c: f32, max_ms: u64) -> Self {
        Self { threshold_c, max_ms }
    }
}

#[derive(Debug, Clone, Copy)]
struct Bucket {
    limit: ExposureLimit,
    accumulated_ms: u64,
}

/// Stateful accumulator over an ordered temperature history
#[derive(Debug, Clone)]
pub struct ExposureAccumulator {
    buckets: Vec<Bucket, MAX_EXPOSURE_LIMITS>,
    held: Option<(f32, Timestamp)>,
}

impl ExposureAccumulator {
    /// Build an accumulator for the given limits
    ///
    /// Thresholds must be finite and budgets non-zero. An empty limit set is
    /// allowed and never breaches.
    pub fn new(limits: &[ExposureLimit]) -> ConfigResult<Self> {
        let mut buckets = Vec::new();
        for (index, limit) in limits.iter().enumerate() {
            if !limit.threshold_c.is_finite() || limit.max_ms == 0 {
                return Err(ConfigError::InvalidExposureLimit { index });
            }
            buckets
                .push(Bucket {
                    limit: *limit,
                    accumulated_ms: 0,
                })
                .map_err(|_| ConfigError::TableOverflow {
                    capacity: MAX_EXPOSURE_LIMITS,
                })?;
        }
        Ok(Self {
            buckets,
            held: None,
        })
    }

    /// Feed one temperature observation, in sequence order
    pub fn observe(&mut self, temperature: Option<f32>, timestamp: Timestamp) {
        let temp = match temperature {
            Some(t) if t.is_finite() => t,
            _ => return,
        };

        if let Some((held_temp, held_ts)) = self.held {
            let elapsed = timestamp.saturating_sub(held_ts);
            for bucket in self.buckets.iter_mut() {
                if held_temp > bucket.limit.threshold_c {
                    bucket.accumulated_ms = bucket.accumulated_ms.saturating_add(elapsed);
                }
            }
        }
        self.held = Some((temp, timestamp));
    }

    /// True once any threshold's time budget is spent
    pub fn breached(&self) -> bool {
        self.buckets
            .iter()
            .any(|b| b.accumulated_ms >= b.limit.max_ms)
    }

    /// Accumulated milliseconds above a configured threshold, if tracked
    pub fn accumulated_ms(&self, threshold_c: f32) -> Option<u64> {
        self.buckets
            .iter()
            .find(|b| b.limit.threshold_c == threshold_c)
            .map(|b| b.accumulated_ms)
    }

    /// Forget all accumulated exposure and the held sample
    pub fn reset(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.accumulated_ms = 0;
        }
        self.held = None;
    }

    /// Compose with a per-reading verdict: a breach forces `Unfit`
    pub fn guard(&self, verdict: Verdict) -> Verdict {
        if self.breached() {
            Verdict::Unfit
        } else {
            verdict
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR_MS: u64 = 60 * 60 * 1000;
    const TEN_MIN_MS: u64 = 10 * 60 * 1000;

    fn cold_chain() -> ExposureAccumulator {
        ExposureAccumulator::new(&[ExposureLimit::new(10.0, 2 * HOUR_MS)]).unwrap()
    }

    #[test]
    fn sustained_heat_breaches_after_budget() {
        let mut acc = cold_chain();

        // 12C every 10 minutes; the 13th sample closes the 12th interval
        for i in 0..13u64 {
            acc.observe(Some(12.0), i * TEN_MIN_MS);
        }

        assert_eq!(acc.accumulated_ms(10.0), Some(2 * HOUR_MS));
        assert!(acc.breached());
    }

    #[test]
    fn cool_intervals_do_not_count() {
        let mut acc = cold_chain();

        // Alternate warm and cold samples: only the warm-held intervals count
        for i in 0..25u64 {
            let temp = if i % 2 == 0 { 12.0 } else { 4.0 };
            acc.observe(Some(temp), i * TEN_MIN_MS);
        }

        assert_eq!(acc.accumulated_ms(10.0), Some(2 * HOUR_MS));
        // 12 warm-held intervals exactly spend the budget; one fewer does not
        let mut shorter = cold_chain();
        for i in 0..23u64 {
            let temp = if i % 2 == 0 { 12.0 } else { 4.0 };
            shorter.observe(Some(temp), i * TEN_MIN_MS);
        }
        assert!(!shorter.breached());
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut acc = cold_chain();
        for i in 0..20u64 {
            acc.observe(Some(10.0), i * HOUR_MS);
        }
        assert_eq!(acc.accumulated_ms(10.0), Some(0));
        assert!(!acc.breached());
    }

    #[test]
    fn missing_and_invalid_samples_are_skipped() {
        let mut acc = cold_chain();
        acc.observe(Some(12.0), 0);
        acc.observe(None, HOUR_MS);
        acc.observe(Some(f32::NAN), HOUR_MS);
        // Gap inherits the held 12C sample
        acc.observe(Some(12.0), 2 * HOUR_MS);

        assert_eq!(acc.accumulated_ms(10.0), Some(2 * HOUR_MS));
        assert!(acc.breached());
    }

    #[test]
    fn out_of_order_timestamps_contribute_zero() {
        let mut acc = cold_chain();
        acc.observe(Some(12.0), HOUR_MS);
        acc.observe(Some(12.0), 0);
        assert_eq!(acc.accumulated_ms(10.0), Some(0));
    }

    #[test]
    fn guard_downgrades_only_on_breach() {
        let mut acc = cold_chain();
        assert_eq!(acc.guard(Verdict::Safe), Verdict::Safe);

        acc.observe(Some(20.0), 0);
        acc.observe(Some(20.0), 3 * HOUR_MS);
        assert!(acc.breached());
        assert_eq!(acc.guard(Verdict::Safe), Verdict::Unfit);
    }

    #[test]
    fn reset_clears_history() {
        let mut acc = cold_chain();
        acc.observe(Some(20.0), 0);
        acc.observe(Some(20.0), 3 * HOUR_MS);
        assert!(acc.breached());

        acc.reset();
        assert!(!acc.breached());
        assert_eq!(acc.accumulated_ms(10.0), Some(0));
    }

    #[test]
    fn rejects_invalid_limits() {
        assert!(ExposureAccumulator::new(&[ExposureLimit::new(f32::NAN, 1000)]).is_err());
        assert!(ExposureAccumulator::new(&[ExposureLimit::new(10.0, 0)]).is_err());
        // Empty set is valid and never breaches
        assert!(!ExposureAccumulator::new(&[]).unwrap().breached());
    }
}
