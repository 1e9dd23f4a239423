//! Freshness classification engine for fish quality monitoring
//!
//! Maps raw sensor readings (a color/brightness proxy, a volatile-gas proxy,
//! and a monitoring-only temperature) to a continuous 0-100 health score, a
//! discrete four-level freshness label, a consumption verdict, and
//! plain-language guidance.
//!
//! Key properties:
//! - Pure and stateless: every evaluation is independent, idempotent, and
//!   safe to run concurrently without locking
//! - Total: missing inputs fall back to a caution default and extreme inputs
//!   saturate at the danger cap; evaluation never fails
//! - Configuration-driven: thresholds, blend coefficient, and verdict policy
//!   are data, so historical calibrations coexist as presets
//!
//! ```
//! use freshguard::{FreshnessEngine, SensorReading, Verdict};
//!
//! let engine = FreshnessEngine::latest();
//! let reading = SensorReading::new(1_000)
//!     .with_color(200.0)
//!     .with_gas(1000.0)
//!     .with_temperature(3.0);
//!
//! let assessment = engine.evaluate(&reading);
//! assert_eq!(assessment.verdict, Verdict::Safe);
//! assert!(assessment.overall_score >= 85.0);
//! ```
//!
//! Cumulative temperature exposure is tracked separately by
//! [`ExposureAccumulator`], which composes alongside the engine: feed it the
//! reading history and let a breach force the verdict to `Unfit`.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod blend;
pub mod curve;
pub mod engine;
pub mod errors;
pub mod exposure;
pub mod label;
pub mod presets;
pub mod reading;
pub mod temperature;
pub mod verdict;

// Public API
pub use curve::{Breakpoint, LabelBand, MetricCurve, NEUTRAL_SCORE};
pub use engine::{Assessment, EngineConfig, FreshnessEngine, MetricAssessment, NullObserver, ScoreObserver};
pub use errors::{ConfigError, ConfigResult};
pub use exposure::{ExposureAccumulator, ExposureLimit};
pub use label::FreshnessLabel;
pub use reading::{SensorReading, Timestamp};
pub use temperature::{TempBands, TempStatus};
pub use verdict::{Verdict, VerdictBands, VerdictPolicy};

#[cfg(feature = "log")]
pub use engine::LogObserver;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
