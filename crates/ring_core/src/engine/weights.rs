//! Scoring model constants.
//!
//! All model tunables live here so the two historical weight sets stay
//! side by side and nothing else in the engine hard-codes a coefficient.

use serde::{Deserialize, Serialize};

/// Minimum score gap below which a trial counts as a draw.
///
/// Tightened from 0.05 to 0.02 to cut the draw rate and force more decisive
/// trial outcomes; the old value is kept as [`LEGACY_DRAW_THRESHOLD`].
pub const DRAW_THRESHOLD: f64 = 0.02;

/// Pre-revision draw threshold, retained for comparison runs.
pub const LEGACY_DRAW_THRESHOLD: f64 = 0.05;

/// Height/reach advantage normalizer (cm).
pub const LENGTH_ADV_SCALE: f64 = 200.0;

/// Weight advantage normalizer (lbs). 460 spans the gap between the lightest
/// and heaviest sanctioned divisions with headroom.
pub const WEIGHT_ADV_SCALE: f64 = 460.0;

/// Standard deviation of the per-fighter unpredictability noise added to
/// every trial score.
pub const SCORE_NOISE_STD: f64 = 0.1;

/// Fixed sampling standard deviations for physical attributes.
pub const HEIGHT_STD_CM: f64 = 1.0;
pub const REACH_STD_CM: f64 = 1.0;
pub const WEIGHT_STD_LBS: f64 = 5.0;

/// Linear coefficients of the fight score.
///
/// The positive-side coefficients sum to 1.0 so scores stay comparable
/// across weight sets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub win_rate: f64,
    pub ko_rate: f64,
    pub height: f64,
    pub reach: f64,
    pub weight: f64,
}

impl ScoringWeights {
    /// Weight-class aware model (current default). A mass mismatch between
    /// divisions is encoded as an explicit linear term instead of being left
    /// implicit in the win rate.
    pub const fn weight_aware() -> Self {
        Self { win_rate: 0.37, ko_rate: 0.15, height: 0.08, reach: 0.05, weight: 0.35 }
    }

    /// Original record-only model with no mass term. Kept as a documented
    /// alternative configuration, not the default.
    pub const fn classic() -> Self {
        Self { win_rate: 0.50, ko_rate: 0.25, height: 0.125, reach: 0.125, weight: 0.0 }
    }

    pub fn sum(&self) -> f64 {
        self.win_rate + self.ko_rate + self.height + self.reach + self.weight
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::weight_aware()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_sets_sum_to_one() {
        assert!((ScoringWeights::weight_aware().sum() - 1.0).abs() < 1e-12);
        assert!((ScoringWeights::classic().sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_is_weight_aware() {
        assert_eq!(ScoringWeights::default(), ScoringWeights::weight_aware());
        assert!(ScoringWeights::default().weight > 0.0);
    }

    #[test]
    fn test_draw_threshold_is_stricter_than_legacy() {
        assert!(DRAW_THRESHOLD < LEGACY_DRAW_THRESHOLD);
    }
}
