//! Error Types for Engine Configuration
//!
//! Evaluation itself is total: the engine always produces an assessment, and
//! missing or extreme inputs are absorbed by the neutral default and the
//! danger cap. The only fallible surface is configuration construction,
//! where a malformed threshold table or blend coefficient must be rejected
//! before the engine ever runs.
//!
//! Errors are kept small and `Copy` so they can be returned from constructors
//! and stored without allocation - no `String`, only `&'static str` and
//! inline numeric context.

use thiserror_no_std::Error;

/// Result type for configuration construction
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A scoring curve needs at least two breakpoints to form a segment
    #[error("Curve needs at least 2 breakpoints, got {count}")]
    EmptyCurve {
        /// Number of breakpoints supplied
        count: usize,
    },

    /// More entries than the fixed-capacity table can hold
    #[error("Table overflow: capacity {capacity}")]
    TableOverflow {
        /// Maximum number of entries the table accepts
        capacity: usize,
    },

    /// Breakpoint boundaries must be strictly increasing
    #[error("Breakpoint {index} is not strictly above its predecessor")]
    UnorderedBreakpoints {
        /// Index of the offending breakpoint
        index: usize,
    },

    /// Label band upper bounds must be strictly increasing
    #[error("Label band {index} is not strictly above its predecessor")]
    UnorderedBands {
        /// Index of the offending band
        index: usize,
    },

    /// A boundary, score, or pivot was NaN or infinite
    #[error("Configuration value is not a finite number")]
    NonFiniteValue,

    /// Sub-scores live on the 0-100 scale
    #[error("Score {score} outside [0, 100]")]
    ScoreOutOfRange {
        /// The offending score
        score: f32,
    },

    /// Blend coefficient must stay within [0, 1]
    #[error("Blend alpha {alpha} outside [0, 1]")]
    InvalidAlpha {
        /// The offending coefficient
        alpha: f32,
    },

    /// Verdict band cut points must be strictly decreasing from Safe down
    #[error("Verdict bands are not strictly ordered")]
    InvalidVerdictBands,

    /// Cold ceiling must sit below the hot floor
    #[error("Temperature bands overlap: cold_max {cold_max} >= hot_min {hot_min}")]
    InvalidTempBands {
        /// Upper bound of the cold zone
        cold_max: f32,
        /// Lower bound of the hot zone
        hot_min: f32,
    },

    /// An exposure limit had a non-finite threshold or zero time budget
    #[error("Exposure limit {index} is invalid")]
    InvalidExposureLimit {
        /// Index of the offending limit
        index: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::EmptyCurve { count } =>
                defmt::write!(fmt, "Curve needs >= 2 breakpoints, got {}", count),
            Self::TableOverflow { capacity } =>
                defmt::write!(fmt, "Table overflow: capacity {}", capacity),
            Self::UnorderedBreakpoints { index } =>
                defmt::write!(fmt, "Breakpoint {} unordered", index),
            Self::UnorderedBands { index } =>
                defmt::write!(fmt, "Label band {} unordered", index),
            Self::NonFiniteValue =>
                defmt::write!(fmt, "Non-finite configuration value"),
            Self::ScoreOutOfRange { score } =>
                defmt::write!(fmt, "Score {} outside [0, 100]", score),
            Self::InvalidAlpha { alpha } =>
                defmt::write!(fmt, "Alpha {} outside [0, 1]", alpha),
            Self::InvalidVerdictBands =>
                defmt::write!(fmt, "Verdict bands unordered"),
            Self::InvalidTempBands { cold_max, hot_min } =>
                defmt::write!(fmt, "Temp bands overlap: {} >= {}", cold_max, hot_min),
            Self::InvalidExposureLimit { index } =>
                defmt::write!(fmt, "Exposure limit {} invalid", index),
        }
    }
}
