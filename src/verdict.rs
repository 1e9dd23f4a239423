//! Consumption Verdicts and Guidance Text
//!
//! Four verdicts, totally ordered by severity. Two derivation paths exist in
//! the field calibrations: thresholding the blended score against bands, and
//! forcing the verdict from the worst discrete label. Both are exposed as
//! explicit policies and never silently merged; the default takes the more
//! severe of the two.
//!
//! Guidance text is a fixed lookup from verdict to recommendation string -
//! no computation, no formatting.

use crate::{
    errors::{ConfigError, ConfigResult},
    label::FreshnessLabel,
};

/// Consumption-safety verdict
///
/// Variant order is severity order, so the derived `Ord` makes `max` the
/// "stricter" operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Verdict {
    /// Safe to consume
    Safe = 0,
    /// Consumable after thorough reheating
    ReheatRequired = 1,
    /// Consumption not recommended
    NotRecommended = 2,
    /// Not fit for consumption
    Unfit = 3,
}

impl Verdict {
    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::ReheatRequired => "ReheatRequired",
            Self::NotRecommended => "NotRecommended",
            Self::Unfit => "Unfit",
        }
    }

    /// Fixed consumption guidance for this verdict
    pub const fn guidance(&self) -> &'static str {
        match self {
            Self::Safe => "Safe to consume. Store at 0-4C and use within 24-48 hours.",
            Self::ReheatRequired => {
                "Reheat to a core temperature above 70C before consumption. \
                 Discard if the odor is sharp or sour."
            }
            Self::NotRecommended => "Quality has degraded. Consumption is not recommended.",
            Self::Unfit => "Not fit for consumption. Discard the product according to procedure.",
        }
    }

    /// The stricter of two verdicts
    pub fn worse_of(a: Self, b: Self) -> Self {
        a.max(b)
    }

    /// Verdict forced directly from a discrete label
    pub const fn from_label(label: FreshnessLabel) -> Self {
        match label {
            FreshnessLabel::Fresh => Self::Safe,
            FreshnessLabel::SlightlyDegraded => Self::ReheatRequired,
            FreshnessLabel::NotFresh => Self::NotRecommended,
            FreshnessLabel::Unfit => Self::Unfit,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Verdict {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name());
    }
}

/// Score cut points for the four verdict bands
///
/// A score at or above `safe_min` is Safe, at or above `reheat_min` needs
/// reheating, at or above `not_recommended_min` is not recommended, and
/// anything below is Unfit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerdictBands {
    /// Minimum score for Safe
    pub safe_min: f32,
    /// Minimum score for ReheatRequired
    pub reheat_min: f32,
    /// Minimum score for NotRecommended
    pub not_recommended_min: f32,
}

impl VerdictBands {
    /// Build bands, requiring strictly decreasing finite cut points
    pub fn new(safe_min: f32, reheat_min: f32, not_recommended_min: f32) -> ConfigResult<Self> {
        let ordered = safe_min > reheat_min && reheat_min > not_recommended_min;
        let finite =
            safe_min.is_finite() && reheat_min.is_finite() && not_recommended_min.is_finite();
        if !ordered || !finite {
            return Err(ConfigError::InvalidVerdictBands);
        }
        Ok(Self {
            safe_min,
            reheat_min,
            not_recommended_min,
        })
    }

    /// Classify a blended score into a verdict
    pub fn classify(&self, score: f32) -> Verdict {
        if score >= self.safe_min {
            Verdict::Safe
        } else if score >= self.reheat_min {
            Verdict::ReheatRequired
        } else if score >= self.not_recommended_min {
            Verdict::NotRecommended
        } else {
            Verdict::Unfit
        }
    }
}

/// Which derivation path governs the final verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerdictPolicy {
    /// Threshold the blended score against the configured bands
    ScoreBands,
    /// Force the verdict from the worst discrete label
    WorstLabel,
    /// Take the more severe of the two paths
    #[default]
    Stricter,
}

impl VerdictPolicy {
    /// Resolve the two candidate verdicts under this policy
    pub fn resolve(&self, from_score: Verdict, from_label: Verdict) -> Verdict {
        match self {
            Self::ScoreBands => from_score,
            Self::WorstLabel => from_label,
            Self::Stricter => Verdict::worse_of(from_score, from_label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands() -> VerdictBands {
        VerdictBands::new(85.0, 70.0, 50.0).unwrap()
    }

    #[test]
    fn bands_classify_at_cut_points() {
        let bands = bands();
        assert_eq!(bands.classify(92.3), Verdict::Safe);
        assert_eq!(bands.classify(85.0), Verdict::Safe);
        assert_eq!(bands.classify(84.9), Verdict::ReheatRequired);
        assert_eq!(bands.classify(70.0), Verdict::ReheatRequired);
        assert_eq!(bands.classify(62.4), Verdict::NotRecommended);
        assert_eq!(bands.classify(50.0), Verdict::NotRecommended);
        assert_eq!(bands.classify(7.0), Verdict::Unfit);
    }

    #[test]
    fn bands_must_be_ordered() {
        assert!(VerdictBands::new(70.0, 85.0, 50.0).is_err());
        assert!(VerdictBands::new(85.0, 85.0, 50.0).is_err());
        assert!(VerdictBands::new(f32::NAN, 70.0, 50.0).is_err());
    }

    #[test]
    fn label_path_maps_one_to_one() {
        assert_eq!(Verdict::from_label(FreshnessLabel::Fresh), Verdict::Safe);
        assert_eq!(
            Verdict::from_label(FreshnessLabel::SlightlyDegraded),
            Verdict::ReheatRequired
        );
        assert_eq!(Verdict::from_label(FreshnessLabel::NotFresh), Verdict::NotRecommended);
        assert_eq!(Verdict::from_label(FreshnessLabel::Unfit), Verdict::Unfit);
    }

    #[test]
    fn stricter_policy_takes_the_worse_path() {
        let policy = VerdictPolicy::Stricter;
        assert_eq!(
            policy.resolve(Verdict::Safe, Verdict::NotRecommended),
            Verdict::NotRecommended
        );
        assert_eq!(
            policy.resolve(Verdict::Unfit, Verdict::ReheatRequired),
            Verdict::Unfit
        );
    }

    #[test]
    fn single_path_policies_ignore_the_other() {
        assert_eq!(
            VerdictPolicy::ScoreBands.resolve(Verdict::Safe, Verdict::Unfit),
            Verdict::Safe
        );
        assert_eq!(
            VerdictPolicy::WorstLabel.resolve(Verdict::Safe, Verdict::Unfit),
            Verdict::Unfit
        );
    }

    #[test]
    fn guidance_is_fixed_per_verdict() {
        assert!(Verdict::ReheatRequired.guidance().contains("70C"));
        assert!(Verdict::Unfit.guidance().contains("Discard"));
    }
}
