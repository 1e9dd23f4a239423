//! Calibration Presets
//!
//! The scoring thresholds, blend coefficient, and verdict policy were
//! recalibrated repeatedly during field deployments, and the revisions are
//! mutually incompatible. Rather than merging them into one rule set, each
//! coherent revision is preserved here as a named configuration; the engine
//! reproduces any of them by swapping configuration, not code.
//!
//! [`latest`] is the default calibration. The older revisions remain
//! available for replaying archived datasets that were scored under them.

use crate::{
    blend::DEFAULT_ALPHA,
    curve::{Breakpoint, LabelBand, MetricCurve},
    engine::EngineConfig,
    exposure::ExposureLimit,
    label::FreshnessLabel,
    temperature::TempBands,
    verdict::{VerdictBands, VerdictPolicy},
};

// ===== COLOR (AVG-RGB PROXY) THRESHOLDS =====

/// Upper bound of the fresh color zone.
///
/// Brightness proxy readings at or below this classify as Fresh.
pub const COLOR_GOOD_MAX: f32 = 250.0;

/// Upper bound of the slightly-degraded color zone.
pub const COLOR_WARN_MAX: f32 = 400.0;

/// Upper bound of the not-fresh color zone; beyond it the product is Unfit.
pub const COLOR_BAD_MAX: f32 = 450.0;

/// Color danger cap: the score reaches 0 here and saturates beyond.
pub const COLOR_DANGER_CAP: f32 = 700.0;

// ===== GAS PROXY THRESHOLDS =====

/// Upper bound of the fresh gas zone.
///
/// Volatile-gas proxy readings at or below this classify as Fresh.
pub const GAS_GOOD_MAX: f32 = 2500.0;

/// Upper bound of the slightly-degraded gas zone.
pub const GAS_WARN_MAX: f32 = 3500.0;

/// Upper bound of the not-fresh gas zone; beyond it the product is Unfit.
pub const GAS_BAD_MAX: f32 = 4000.0;

/// Gas danger cap: the score reaches 0 here and saturates beyond.
pub const GAS_DANGER_CAP: f32 = 6000.0;

// ===== SCORE ANCHORS =====

/// Score at the origin of each curve.
pub const SCORE_BEST: f32 = 100.0;

/// Score where the fresh zone ends.
pub const SCORE_GOOD_EDGE: f32 = 88.0;

/// Score where the slightly-degraded zone ends.
pub const SCORE_WARN_EDGE: f32 = 65.0;

/// Score where the not-fresh zone ends.
pub const SCORE_BAD_EDGE: f32 = 35.0;

/// Score at and beyond the danger cap.
pub const SCORE_FLOOR: f32 = 0.0;

// ===== VERDICT BANDS =====

/// Minimum blended score for a Safe verdict.
pub const VERDICT_SAFE_MIN: f32 = 85.0;

/// Minimum blended score for ReheatRequired.
pub const VERDICT_REHEAT_MIN: f32 = 70.0;

/// Minimum blended score for NotRecommended; below is Unfit.
pub const VERDICT_NOT_RECOMMENDED_MIN: f32 = 50.0;

// ===== TEMPERATURE MONITORING =====

/// Ideal cold-storage ceiling in Celsius.
pub const TEMP_COLD_MAX: f32 = 4.0;

/// Elevated-temperature floor in Celsius.
pub const TEMP_HOT_MIN: f32 = 30.0;

// ===== CLOSED COLOR BAND (PIVOT REVISION) =====

/// Lower bound of the closed fresh color band.
pub const COLOR_BAND_LOW: f32 = 120.0;

/// Preferred point inside the closed fresh band.
pub const COLOR_BAND_PIVOT: f32 = 180.0;

/// Upper bound of the closed fresh color band.
pub const COLOR_BAND_HIGH: f32 = 300.0;

// ===== EXPOSURE BUDGETS =====

/// Milliseconds per hour, for exposure budget arithmetic.
const HOUR_MS: u64 = 60 * 60 * 1000;

/// Cold-chain breach: two cumulative hours above 10C.
pub const EXPOSURE_COLD_CHAIN: ExposureLimit = ExposureLimit::new(10.0, 2 * HOUR_MS);

/// Ambient breach: thirty cumulative minutes above 25C.
pub const EXPOSURE_AMBIENT: ExposureLimit = ExposureLimit::new(25.0, HOUR_MS / 2);

fn color_curve() -> MetricCurve {
    MetricCurve::new(
        "color",
        &[
            Breakpoint::new(0.0, SCORE_BEST),
            Breakpoint::new(COLOR_GOOD_MAX, SCORE_GOOD_EDGE),
            Breakpoint::new(COLOR_WARN_MAX, SCORE_WARN_EDGE),
            Breakpoint::new(COLOR_BAD_MAX, SCORE_BAD_EDGE),
            Breakpoint::new(COLOR_DANGER_CAP, SCORE_FLOOR),
        ],
        &[
            LabelBand::new(COLOR_GOOD_MAX, FreshnessLabel::Fresh),
            LabelBand::new(COLOR_WARN_MAX, FreshnessLabel::SlightlyDegraded),
            LabelBand::new(COLOR_BAD_MAX, FreshnessLabel::NotFresh),
        ],
        FreshnessLabel::Unfit,
    )
    .expect("color preset table is valid")
}

fn gas_curve() -> MetricCurve {
    MetricCurve::new(
        "gas",
        &[
            Breakpoint::new(0.0, SCORE_BEST),
            Breakpoint::new(GAS_GOOD_MAX, SCORE_GOOD_EDGE),
            Breakpoint::new(GAS_WARN_MAX, SCORE_WARN_EDGE),
            Breakpoint::new(GAS_BAD_MAX, SCORE_BAD_EDGE),
            Breakpoint::new(GAS_DANGER_CAP, SCORE_FLOOR),
        ],
        &[
            LabelBand::new(GAS_GOOD_MAX, FreshnessLabel::Fresh),
            LabelBand::new(GAS_WARN_MAX, FreshnessLabel::SlightlyDegraded),
            LabelBand::new(GAS_BAD_MAX, FreshnessLabel::NotFresh),
        ],
        FreshnessLabel::Unfit,
    )
    .expect("gas preset table is valid")
}

fn banded_color_curve() -> MetricCurve {
    MetricCurve::new(
        "color",
        &[
            Breakpoint::new(COLOR_BAND_LOW, 82.0),
            Breakpoint::new(COLOR_BAND_PIVOT, SCORE_BEST),
            Breakpoint::new(COLOR_BAND_HIGH, 92.0),
            Breakpoint::new(430.0, 60.0),
            Breakpoint::new(520.0, 30.0),
            Breakpoint::new(COLOR_DANGER_CAP, SCORE_FLOOR),
        ],
        &[
            LabelBand::new(COLOR_BAND_LOW, FreshnessLabel::SlightlyDegraded),
            LabelBand::new(COLOR_BAND_HIGH, FreshnessLabel::Fresh),
            LabelBand::new(430.0, FreshnessLabel::SlightlyDegraded),
            LabelBand::new(520.0, FreshnessLabel::NotFresh),
        ],
        FreshnessLabel::Unfit,
    )
    .expect("banded color preset table is valid")
    .with_pivot(COLOR_BAND_PIVOT)
    .expect("banded color pivot is valid")
}

fn verdict_bands() -> VerdictBands {
    VerdictBands::new(VERDICT_SAFE_MIN, VERDICT_REHEAT_MIN, VERDICT_NOT_RECOMMENDED_MIN)
        .expect("verdict band preset is valid")
}

fn temp_bands() -> TempBands {
    TempBands::new(TEMP_COLD_MAX, TEMP_HOT_MIN).expect("temperature band preset is valid")
}

/// Latest calibration: 4-level thresholds, soft-min blend, stricter policy
pub fn latest() -> EngineConfig {
    EngineConfig {
        color: color_curve(),
        gas: gas_curve(),
        blend_alpha: DEFAULT_ALPHA,
        verdict_bands: verdict_bands(),
        policy: VerdictPolicy::Stricter,
        temp_bands: temp_bands(),
    }
}

/// Early worst-case revision: the blend collapses to the strict minimum
pub fn strict_minimum() -> EngineConfig {
    EngineConfig {
        blend_alpha: 0.0,
        ..latest()
    }
}

/// Earliest revision: plain arithmetic average of the two sub-scores
pub fn average_blend() -> EngineConfig {
    EngineConfig {
        blend_alpha: 0.5,
        ..latest()
    }
}

/// Sheet-status revision: the worst discrete label alone forces the verdict
pub fn label_driven() -> EngineConfig {
    EngineConfig {
        policy: VerdictPolicy::WorstLabel,
        ..latest()
    }
}

/// Closed-band color revision: fresh is a band with an interior pivot
///
/// The only calibration whose scoring curve is intentionally non-monotonic:
/// the score peaks at the pivot and declines slightly toward the band's
/// upper bound, with brighter/darker handling notes on either side.
pub fn banded_color() -> EngineConfig {
    EngineConfig {
        color: banded_color_curve(),
        ..latest()
    }
}

/// Default exposure budgets for the cumulative temperature guard
pub fn exposure_limits() -> [ExposureLimit; 2] {
    [EXPOSURE_COLD_CHAIN, EXPOSURE_AMBIENT]
}
