//! Piecewise-Linear Metric Scoring
//!
//! Maps one raw sensor value to a continuous 0-100 sub-score and,
//! independently, to a discrete [`FreshnessLabel`]. The score comes from
//! linear interpolation over an ordered breakpoint table; the label comes
//! from a separately configured set of bands, so calibration can move the
//! two independently.
//!
//! Curve shape rules:
//! - values below the first boundary clamp to the first score
//! - inside a segment the score is `lerp(lo, hi, t)` with `t` clamped to [0, 1]
//! - the last breakpoint is the danger cap: beyond it the score saturates at
//!   the cap's score (0 in every shipped preset), never negative
//! - breakpoints need not be monotonic, which is how the closed fresh band
//!   with an interior pivot is expressed: the score rises toward the pivot,
//!   then declines toward the band's upper bound
//!
//! Missing or non-finite input is not an error: it scores the fixed neutral
//! 60 and labels `SlightlyDegraded` - "don't know, assume caution".

use heapless::Vec;

use crate::{
    errors::{ConfigError, ConfigResult},
    label::FreshnessLabel,
};

/// Maximum breakpoints per scoring curve
pub const MAX_BREAKPOINTS: usize = 8;

/// Maximum label bands per metric (plus the overflow label)
pub const MAX_LABEL_BANDS: usize = 6;

/// Sub-score substituted for a missing or non-finite reading
pub const NEUTRAL_SCORE: f32 = 60.0;

/// Linear interpolation between two scores
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp to the unit interval
pub(crate) fn clamp01(x: f32) -> f32 {
    x.max(0.0).min(1.0)
}

/// One point on a scoring curve: raw boundary and the score at that boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Raw metric value at this point
    pub boundary: f32,
    /// Sub-score (0-100) at this point
    pub score: f32,
}

impl Breakpoint {
    /// Shorthand constructor
    pub const fn new(boundary: f32, score: f32) -> Self {
        Self { boundary, score }
    }
}

/// One discrete label band: values at or below `upper` get `label`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBand {
    /// Inclusive upper bound of the band
    pub upper: f32,
    /// Label assigned within the band
    pub label: FreshnessLabel,
}

impl LabelBand {
    /// Shorthand constructor
    pub const fn new(upper: f32, label: FreshnessLabel) -> Self {
        Self { upper, label }
    }
}

/// Calibrated raw-to-score curve and label bands for one metric
///
/// Immutable after construction; all evaluation methods are pure.
#[derive(Debug, Clone)]
pub struct MetricCurve {
    name: &'static str,
    points: Vec<Breakpoint, MAX_BREAKPOINTS>,
    bands: Vec<LabelBand, MAX_LABEL_BANDS>,
    overflow: FreshnessLabel,
    pivot: Option<f32>,
}

impl MetricCurve {
    /// Build a curve, validating breakpoint and band ordering
    pub fn new(
        name: &'static str,
        points: &[Breakpoint],
        bands: &[LabelBand],
        overflow: FreshnessLabel,
    ) -> ConfigResult<Self> {
        if points.len() < 2 {
            return Err(ConfigError::EmptyCurve { count: points.len() });
        }

        for (i, point) in points.iter().enumerate() {
            if !point.boundary.is_finite() || !point.score.is_finite() {
                return Err(ConfigError::NonFiniteValue);
            }
            if !(0.0..=100.0).contains(&point.score) {
                return Err(ConfigError::ScoreOutOfRange { score: point.score });
            }
            if i > 0 && point.boundary <= points[i - 1].boundary {
                return Err(ConfigError::UnorderedBreakpoints { index: i });
            }
        }

        for (i, band) in bands.iter().enumerate() {
            if !band.upper.is_finite() {
                return Err(ConfigError::NonFiniteValue);
            }
            if i > 0 && band.upper <= bands[i - 1].upper {
                return Err(ConfigError::UnorderedBands { index: i });
            }
        }

        let points = Vec::from_slice(points)
            .map_err(|_| ConfigError::TableOverflow { capacity: MAX_BREAKPOINTS })?;
        let bands = Vec::from_slice(bands)
            .map_err(|_| ConfigError::TableOverflow { capacity: MAX_LABEL_BANDS })?;

        Ok(Self {
            name,
            points,
            bands,
            overflow,
            pivot: None,
        })
    }

    /// Mark the preferred point inside a closed fresh band
    ///
    /// Readings below the pivot classify as the "brighter" side, above as the
    /// "darker" side; the per-metric note reflects which side applies.
    pub fn with_pivot(mut self, pivot: f32) -> ConfigResult<Self> {
        if !pivot.is_finite() {
            return Err(ConfigError::NonFiniteValue);
        }
        self.pivot = Some(pivot);
        Ok(self)
    }

    /// Metric name, used in the per-metric breakdown and observer calls
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Continuous 0-100 sub-score for a raw value
    ///
    /// Missing or non-finite input returns [`NEUTRAL_SCORE`]. Values beyond
    /// the final breakpoint saturate at that breakpoint's score.
    pub fn score(&self, raw: Option<f32>) -> f32 {
        let x = match raw {
            Some(x) if x.is_finite() => x,
            _ => return NEUTRAL_SCORE,
        };

        let first = self.points[0];
        if x <= first.boundary {
            return first.score;
        }

        for pair in self.points.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if x <= hi.boundary {
                let t = clamp01((x - lo.boundary) / (hi.boundary - lo.boundary));
                return lerp(lo.score, hi.score, t);
            }
        }

        // Past the danger cap: saturate, never go negative or wrap
        self.points[self.points.len() - 1].score
    }

    /// Discrete label for a raw value
    ///
    /// Missing or non-finite input returns the caution default
    /// `SlightlyDegraded`. Values above every band get the overflow label.
    pub fn label(&self, raw: Option<f32>) -> FreshnessLabel {
        let x = match raw {
            Some(x) if x.is_finite() => x,
            _ => return FreshnessLabel::SlightlyDegraded,
        };

        for band in &self.bands {
            if x <= band.upper {
                return band.label;
            }
        }
        self.overflow
    }

    /// Descriptive note for the per-metric breakdown
    pub fn note(&self, raw: Option<f32>, label: FreshnessLabel) -> &'static str {
        let x = match raw {
            Some(x) if x.is_finite() => x,
            _ => return "no reading; caution default applied",
        };

        match label {
            FreshnessLabel::Fresh => match self.pivot {
                Some(pivot) if x < pivot => "fresh, brighter side of the ideal point; chill and use first",
                Some(_) => "fresh, darker side of the ideal point; inspect color before preparation",
                None => "within the fresh band",
            },
            FreshnessLabel::SlightlyDegraded => "early degradation; thorough reheating advised",
            FreshnessLabel::NotFresh => "degraded beyond the fresh range",
            FreshnessLabel::Unfit => "past the danger cap",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monotone_curve() -> MetricCurve {
        MetricCurve::new(
            "color",
            &[
                Breakpoint::new(0.0, 100.0),
                Breakpoint::new(250.0, 88.0),
                Breakpoint::new(400.0, 65.0),
                Breakpoint::new(450.0, 35.0),
                Breakpoint::new(700.0, 0.0),
            ],
            &[
                LabelBand::new(250.0, FreshnessLabel::Fresh),
                LabelBand::new(400.0, FreshnessLabel::SlightlyDegraded),
                LabelBand::new(450.0, FreshnessLabel::NotFresh),
            ],
            FreshnessLabel::Unfit,
        )
        .unwrap()
    }

    fn banded_curve() -> MetricCurve {
        MetricCurve::new(
            "color",
            &[
                Breakpoint::new(120.0, 82.0),
                Breakpoint::new(180.0, 100.0),
                Breakpoint::new(300.0, 92.0),
                Breakpoint::new(430.0, 60.0),
                Breakpoint::new(520.0, 30.0),
                Breakpoint::new(700.0, 0.0),
            ],
            &[
                LabelBand::new(120.0, FreshnessLabel::SlightlyDegraded),
                LabelBand::new(300.0, FreshnessLabel::Fresh),
                LabelBand::new(430.0, FreshnessLabel::SlightlyDegraded),
                LabelBand::new(520.0, FreshnessLabel::NotFresh),
            ],
            FreshnessLabel::Unfit,
        )
        .unwrap()
        .with_pivot(180.0)
        .unwrap()
    }

    #[test]
    fn interpolates_inside_segments() {
        let curve = monotone_curve();
        assert!((curve.score(Some(200.0)) - 90.4).abs() < 1e-4);
        assert!((curve.score(Some(420.0)) - 53.0).abs() < 1e-4);
    }

    #[test]
    fn boundary_scores_are_exact() {
        let curve = monotone_curve();
        assert_eq!(curve.score(Some(0.0)), 100.0);
        assert_eq!(curve.score(Some(250.0)), 88.0);
        assert_eq!(curve.score(Some(400.0)), 65.0);
        assert_eq!(curve.score(Some(450.0)), 35.0);
        assert_eq!(curve.score(Some(700.0)), 0.0);
    }

    #[test]
    fn saturates_past_danger_cap() {
        let curve = monotone_curve();
        assert_eq!(curve.score(Some(900.0)), 0.0);
        assert_eq!(curve.score(Some(1e9)), 0.0);
    }

    #[test]
    fn clamps_below_first_boundary() {
        let curve = monotone_curve();
        assert_eq!(curve.score(Some(-50.0)), 100.0);
    }

    #[test]
    fn missing_input_gets_caution_default() {
        let curve = monotone_curve();
        assert_eq!(curve.score(None), NEUTRAL_SCORE);
        assert_eq!(curve.score(Some(f32::NAN)), NEUTRAL_SCORE);
        assert_eq!(curve.score(Some(f32::INFINITY)), NEUTRAL_SCORE);
        assert_eq!(curve.label(None), FreshnessLabel::SlightlyDegraded);
        assert_eq!(curve.label(Some(f32::NAN)), FreshnessLabel::SlightlyDegraded);
    }

    #[test]
    fn labels_follow_bands() {
        let curve = monotone_curve();
        assert_eq!(curve.label(Some(200.0)), FreshnessLabel::Fresh);
        assert_eq!(curve.label(Some(250.0)), FreshnessLabel::Fresh);
        assert_eq!(curve.label(Some(420.0)), FreshnessLabel::NotFresh);
        assert_eq!(curve.label(Some(900.0)), FreshnessLabel::Unfit);
    }

    #[test]
    fn pivot_curve_peaks_inside_fresh_band() {
        let curve = banded_curve();

        // Rising toward the pivot, declining past it - one interior peak
        assert!(curve.score(Some(150.0)) < curve.score(Some(180.0)));
        assert!(curve.score(Some(240.0)) < curve.score(Some(180.0)));
        assert!(curve.score(Some(300.0)) < curve.score(Some(240.0)));
        assert_eq!(curve.score(Some(180.0)), 100.0);
    }

    #[test]
    fn pivot_sides_carry_different_notes() {
        let curve = banded_curve();
        let brighter = curve.note(Some(150.0), FreshnessLabel::Fresh);
        let darker = curve.note(Some(240.0), FreshnessLabel::Fresh);
        assert_ne!(brighter, darker);
    }

    #[test]
    fn monotone_curve_has_no_interior_peak() {
        let curve = monotone_curve();
        let mut prev = curve.score(Some(0.0));
        let mut x = 10.0;
        while x <= 900.0 {
            let next = curve.score(Some(x));
            assert!(next <= prev, "score rose from {} at raw {}", prev, x);
            prev = next;
            x += 10.0;
        }
    }

    #[test]
    fn rejects_malformed_tables() {
        let unordered = MetricCurve::new(
            "bad",
            &[Breakpoint::new(10.0, 50.0), Breakpoint::new(10.0, 40.0)],
            &[],
            FreshnessLabel::Unfit,
        );
        assert_eq!(unordered.unwrap_err(), ConfigError::UnorderedBreakpoints { index: 1 });

        let short = MetricCurve::new("bad", &[Breakpoint::new(0.0, 100.0)], &[], FreshnessLabel::Unfit);
        assert_eq!(short.unwrap_err(), ConfigError::EmptyCurve { count: 1 });

        let out_of_scale = MetricCurve::new(
            "bad",
            &[Breakpoint::new(0.0, 120.0), Breakpoint::new(10.0, 0.0)],
            &[],
            FreshnessLabel::Unfit,
        );
        assert_eq!(out_of_scale.unwrap_err(), ConfigError::ScoreOutOfRange { score: 120.0 });
    }
}
