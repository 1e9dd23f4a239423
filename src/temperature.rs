//! Temperature Monitoring Display
//!
//! Temperature never participates in the freshness score or verdict - it is
//! monitoring-only and maps to a three-state display independent of both.
//! Cold storage (at or below 4C) is the ideal zone; high readings (30C and
//! up) are flagged; everything between, and a missing reading, is neutral.

use crate::errors::{ConfigError, ConfigResult};

/// Three-state temperature display classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TempStatus {
    /// At or below the cold ceiling - ideal storage
    Cold,
    /// Between the cold ceiling and the hot floor, or no reading
    Neutral,
    /// At or above the hot floor
    Hot,
}

impl TempStatus {
    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cold => "Cold (ideal)",
            Self::Neutral => "Neutral",
            Self::Hot => "Hot (elevated)",
        }
    }
}

/// Thresholds for the monitoring display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempBands {
    /// Inclusive upper bound of the cold zone in Celsius
    pub cold_max: f32,
    /// Inclusive lower bound of the hot zone in Celsius
    pub hot_min: f32,
}

impl TempBands {
    /// Build bands; the cold ceiling must sit strictly below the hot floor
    pub fn new(cold_max: f32, hot_min: f32) -> ConfigResult<Self> {
        if !cold_max.is_finite() || !hot_min.is_finite() || cold_max >= hot_min {
            return Err(ConfigError::InvalidTempBands { cold_max, hot_min });
        }
        Ok(Self { cold_max, hot_min })
    }

    /// Classify a temperature reading for display
    pub fn classify(&self, celsius: Option<f32>) -> TempStatus {
        match celsius {
            Some(t) if t.is_finite() && t <= self.cold_max => TempStatus::Cold,
            Some(t) if t.is_finite() && t >= self.hot_min => TempStatus::Hot,
            _ => TempStatus::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands() -> TempBands {
        TempBands::new(4.0, 30.0).unwrap()
    }

    #[test]
    fn classifies_three_states() {
        let bands = bands();
        assert_eq!(bands.classify(Some(2.0)), TempStatus::Cold);
        assert_eq!(bands.classify(Some(4.0)), TempStatus::Cold);
        assert_eq!(bands.classify(Some(18.0)), TempStatus::Neutral);
        assert_eq!(bands.classify(Some(30.0)), TempStatus::Hot);
        assert_eq!(bands.classify(Some(42.0)), TempStatus::Hot);
    }

    #[test]
    fn missing_or_invalid_reading_is_neutral() {
        let bands = bands();
        assert_eq!(bands.classify(None), TempStatus::Neutral);
        assert_eq!(bands.classify(Some(f32::NAN)), TempStatus::Neutral);
    }

    #[test]
    fn rejects_inverted_bands() {
        assert!(TempBands::new(30.0, 4.0).is_err());
        assert!(TempBands::new(10.0, 10.0).is_err());
    }
}
