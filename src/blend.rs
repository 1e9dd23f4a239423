//! Worst-Case-Biased Score Blending
//!
//! Exactly two sub-scores are ever combined. A plain average lets one good
//! metric mask a bad one; a strict minimum ignores a recovering metric
//! entirely. The soft minimum sits between the two: the result lands `alpha`
//! of the way from the worse score toward the better one, so it is always at
//! least the minimum and never above the arithmetic mean (for `alpha <= 0.5`).

use crate::errors::{ConfigError, ConfigResult};

/// Default blend coefficient: 40% of the way from worse toward better
pub const DEFAULT_ALPHA: f32 = 0.40;

/// Soft minimum of two sub-scores
///
/// Commutative; result is always within `[min(a, b), max(a, b)]` and equals
/// the minimum when the inputs are equal.
pub fn soft_min(a: f32, b: f32, alpha: f32) -> f32 {
    let lo = a.min(b);
    let hi = a.max(b);
    lo + alpha * (hi - lo)
}

/// Validate a blend coefficient at configuration time
pub fn check_alpha(alpha: f32) -> ConfigResult<()> {
    if alpha.is_finite() && (0.0..=1.0).contains(&alpha) {
        Ok(())
    } else {
        Err(ConfigError::InvalidAlpha { alpha })
    }
}
