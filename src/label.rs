//! Discrete Freshness Labels
//!
//! Four ordinal levels, totally ordered by severity. The discrete label path
//! is deliberately conservative: wherever two labels compete (two metrics, or
//! a numeric reading against a human-entered status), the worse one wins -
//! the maximum, never an average - so a single bad signal cannot be diluted
//! by a good one.
//!
//! Labels also arrive as free text from the record source (spreadsheet
//! status columns filled in by hand). `parse` accepts the English names and
//! the Indonesian vocabulary the field deployments use; anything else is
//! simply unknown, never an error.

/// Discrete four-level freshness classification
///
/// Variant order is severity order: `Fresh` is best, `Unfit` is worst.
/// The derived `Ord` makes `max` the "more severe" operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FreshnessLabel {
    /// Within the calibrated fresh zone
    Fresh = 0,
    /// Early degradation; also the caution default for missing readings
    SlightlyDegraded = 1,
    /// Degraded beyond the fresh range
    NotFresh = 2,
    /// Past the danger cap; consumption unsafe
    Unfit = 3,
}

impl FreshnessLabel {
    /// Severity rank, 0 (best) to 3 (worst)
    pub const fn severity(&self) -> u8 {
        *self as u8
    }

    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fresh => "Fresh",
            Self::SlightlyDegraded => "Slightly Degraded",
            Self::NotFresh => "Not Fresh",
            Self::Unfit => "Unfit",
        }
    }

    /// The more severe of two labels
    pub fn worse_of(a: Self, b: Self) -> Self {
        a.max(b)
    }

    /// Parse an externally supplied status string
    ///
    /// Case-insensitive, whitespace-trimmed. Accepts the English label names
    /// and the spreadsheet vocabulary (`segar`, `kurang segar`, `tidak
    /// segar`, `tidak layak`). Unknown text yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let matches = |candidate: &str| text.eq_ignore_ascii_case(candidate);

        if matches("fresh") || matches("segar") {
            Some(Self::Fresh)
        } else if matches("slightly degraded") || matches("kurang segar") || matches("kurang") {
            Some(Self::SlightlyDegraded)
        } else if matches("not fresh") || matches("tidak segar") {
            Some(Self::NotFresh)
        } else if matches("unfit") || matches("tidak layak") || matches("busuk") {
            Some(Self::Unfit)
        } else {
            None
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FreshnessLabel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name());
    }
}
