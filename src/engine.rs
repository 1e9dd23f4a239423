//! Freshness Classification Engine
//!
//! Pure and stateless: one [`SensorReading`] in, one [`Assessment`] out.
//! Every call is independent - no hysteresis, no smoothing, no interior
//! mutable state - so the engine is idempotent and safe to share across
//! threads without locking.
//!
//! Evaluation steps:
//! 1. score and label each metric from its calibrated curve
//! 2. fold any externally supplied status label in by taking the worse of
//!    the value-derived and parsed labels - a bad signal is never diluted
//! 3. blend the two sub-scores with the worst-case-biased soft minimum
//! 4. derive the verdict under the configured policy and attach guidance
//!
//! Intermediate sub-scores can be reported to an injected [`ScoreObserver`];
//! there are no global debug flags.

use crate::{
    blend::{check_alpha, soft_min},
    curve::MetricCurve,
    errors::ConfigResult,
    label::FreshnessLabel,
    reading::SensorReading,
    temperature::{TempBands, TempStatus},
    verdict::{Verdict, VerdictBands, VerdictPolicy},
};

/// Observer for intermediate evaluation values
///
/// Injected per call; the engine never logs on its own.
pub trait ScoreObserver {
    /// One metric was scored
    fn sub_score(&mut self, metric: &'static str, raw: Option<f32>, score: f32);

    /// The two sub-scores were blended
    fn overall(&mut self, score: f32);
}

/// Observer that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ScoreObserver for NullObserver {
    fn sub_score(&mut self, _metric: &'static str, _raw: Option<f32>, _score: f32) {}
    fn overall(&mut self, _score: f32) {}
}

/// Observer that forwards intermediate values to the `log` crate
#[cfg(feature = "log")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

#[cfg(feature = "log")]
impl ScoreObserver for LogObserver {
    fn sub_score(&mut self, metric: &'static str, raw: Option<f32>, score: f32) {
        log::debug!("{}: raw {:?} -> sub-score {:.1}", metric, raw, score);
    }

    fn overall(&mut self, score: f32) {
        log::debug!("blended score {:.1}", score);
    }
}

/// Full calibration for one engine instance
///
/// Immutable once handed to [`FreshnessEngine::new`]; swap configurations to
/// reproduce any historical calibration revision (see [`crate::presets`]).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Scoring curve and label bands for the color/brightness proxy
    pub color: MetricCurve,
    /// Scoring curve and label bands for the volatile-gas proxy
    pub gas: MetricCurve,
    /// Soft-minimum blend coefficient, within [0, 1]
    pub blend_alpha: f32,
    /// Score cut points for the verdict bands
    pub verdict_bands: VerdictBands,
    /// Which derivation path governs the verdict
    pub policy: VerdictPolicy,
    /// Monitoring-only temperature display thresholds
    pub temp_bands: TempBands,
}

impl Default for EngineConfig {
    fn default() -> Self {
        crate::presets::latest()
    }
}

/// Assessment of one metric in the per-metric breakdown
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MetricAssessment {
    /// Discrete label, external status already folded in
    pub label: FreshnessLabel,
    /// Continuous 0-100 sub-score
    pub score: f32,
    /// Short handling note for this metric
    pub note: &'static str,
}

/// Engine output: one evaluation, created fresh per call, never mutated
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Assessment {
    /// Blended 0-100 score, rounded to one decimal
    pub overall_score: f32,
    /// Final consumption verdict
    pub verdict: Verdict,
    /// The more severe of the two metric labels
    pub worst_label: FreshnessLabel,
    /// Fixed recommendation text for the verdict
    pub guidance: &'static str,
    /// Color metric breakdown
    pub color: MetricAssessment,
    /// Gas metric breakdown
    pub gas: MetricAssessment,
    /// Monitoring-only temperature display state
    pub temperature: TempStatus,
}

/// The freshness classification engine
///
/// Holds a validated, immutable configuration. All evaluation methods take
/// `&self` and are pure.
#[derive(Debug, Clone)]
pub struct FreshnessEngine {
    config: EngineConfig,
}

impl FreshnessEngine {
    /// Build an engine from a configuration, validating the blend coefficient
    ///
    /// Curves and bands validate themselves at construction; this re-checks
    /// the pieces that arrive as plain numbers.
    pub fn new(config: EngineConfig) -> ConfigResult<Self> {
        check_alpha(config.blend_alpha)?;
        Ok(Self { config })
    }

    /// Engine with the latest shipped calibration
    pub fn latest() -> Self {
        Self {
            config: crate::presets::latest(),
        }
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate one reading
    pub fn evaluate(&self, reading: &SensorReading<'_>) -> Assessment {
        self.evaluate_observed(reading, &mut NullObserver)
    }

    /// Evaluate one reading, reporting intermediate values to an observer
    pub fn evaluate_observed(
        &self,
        reading: &SensorReading<'_>,
        observer: &mut dyn ScoreObserver,
    ) -> Assessment {
        let color = assess_metric(
            &self.config.color,
            reading.color_value,
            reading.color_label,
            observer,
        );
        let gas = assess_metric(
            &self.config.gas,
            reading.gas_value,
            reading.gas_label,
            observer,
        );

        let blended = soft_min(color.score, gas.score, self.config.blend_alpha);
        observer.overall(blended);

        let worst_label = FreshnessLabel::worse_of(color.label, gas.label);
        let verdict = self.config.policy.resolve(
            self.config.verdict_bands.classify(blended),
            Verdict::from_label(worst_label),
        );

        Assessment {
            overall_score: round_one_decimal(blended),
            verdict,
            worst_label,
            guidance: verdict.guidance(),
            color,
            gas,
            temperature: self.config.temp_bands.classify(reading.temperature),
        }
    }
}

impl Default for FreshnessEngine {
    fn default() -> Self {
        Self::latest()
    }
}

fn assess_metric(
    curve: &MetricCurve,
    raw: Option<f32>,
    external: Option<&str>,
    observer: &mut dyn ScoreObserver,
) -> MetricAssessment {
    let score = curve.score(raw);
    observer.sub_score(curve.name(), raw, score);

    let from_value = curve.label(raw);
    let label = match external.and_then(FreshnessLabel::parse) {
        Some(parsed) => FreshnessLabel::worse_of(from_value, parsed),
        None => from_value,
    };

    MetricAssessment {
        label,
        score,
        note: curve.note(raw, label),
    }
}

/// Round to one decimal of precision for display
fn round_one_decimal(score: f32) -> f32 {
    libm::roundf(score * 10.0) / 10.0
}
