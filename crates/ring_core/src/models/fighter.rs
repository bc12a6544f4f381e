//! Fighter profile and derived rate statistics.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Default body weight (lbs) when a data source carries no weight at all.
pub const DEFAULT_WEIGHT_LBS: f64 = 170.0;

/// Static input attributes for one fighter.
///
/// Constructed once from a data provider immediately before a simulation run
/// and never mutated during it. `total_bouts` must be at least 1; providers
/// are responsible for coercing a zero bout count before the profile reaches
/// the engine (see [`FighterProfile::validate`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterProfile {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub total_bouts: u32,
    pub ko_wins: u32,
    pub height_cm: f64,
    pub reach_cm: f64,
    #[serde(default = "default_weight")]
    pub weight_lbs: f64,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT_LBS
}

impl FighterProfile {
    /// Build a profile from raw record counts, deriving `total_bouts` from
    /// wins + losses + draws. A zero bout count is coerced to 1 so the rate
    /// math stays well-defined for debut fighters.
    #[allow(clippy::too_many_arguments)]
    pub fn from_record(
        name: impl Into<String>,
        wins: u32,
        losses: u32,
        draws: u32,
        ko_wins: u32,
        height_cm: f64,
        reach_cm: f64,
        weight_lbs: f64,
    ) -> Self {
        let total_bouts = (wins + losses + draws).max(1);
        Self {
            name: name.into(),
            wins,
            losses,
            draws,
            total_bouts,
            ko_wins,
            height_cm,
            reach_cm,
            weight_lbs,
        }
    }

    /// Reject profiles the engine must never see.
    ///
    /// `ko_wins <= wins` is expected but deliberately not enforced: some data
    /// sources report exhibition knockouts that never entered the official
    /// record, and the scoring model degrades gracefully on ko_rate > win_rate.
    pub fn validate(&self) -> Result<()> {
        if self.total_bouts == 0 {
            return Err(SimError::invalid_profile(
                &self.name,
                "total_bouts must be >= 1 (coerce a zero bout count before simulating)",
            ));
        }
        if self.wins + self.losses + self.draws > self.total_bouts {
            return Err(SimError::invalid_profile(
                &self.name,
                format!(
                    "record {}-{}-{} exceeds total_bouts {}",
                    self.wins, self.losses, self.draws, self.total_bouts
                ),
            ));
        }
        if !(self.height_cm > 0.0) || !(self.reach_cm > 0.0) {
            return Err(SimError::invalid_profile(
                &self.name,
                "height and reach must be positive",
            ));
        }
        if !(self.weight_lbs > 0.0) {
            return Err(SimError::invalid_profile(&self.name, "weight must be positive"));
        }
        Ok(())
    }
}

/// Point estimates and sampling uncertainty for one fighter's rates.
///
/// Uses the binomial-proportion variance model: for a rate `p` observed over
/// `n` bouts, `std = sqrt(p * (1 - p) / n)`. The KO rate is conditioned on
/// total bouts rather than on wins; dividing by wins overstates the power of
/// small-sample fighters (4 KOs in 4 fights is not the same evidence as 40
/// KOs in 45).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedRates {
    pub win_rate: f64,
    pub win_rate_std: f64,
    pub ko_rate: f64,
    pub ko_rate_std: f64,
}

impl DerivedRates {
    /// Compute rates from scratch. Callers guarantee `total_bouts >= 1`
    /// (checked by [`FighterProfile::validate`]).
    pub fn from_profile(profile: &FighterProfile) -> Self {
        let n = profile.total_bouts as f64;
        let win_rate = profile.wins as f64 / n;
        let ko_rate = profile.ko_wins as f64 / n;
        Self {
            win_rate,
            win_rate_std: binomial_std(win_rate, n),
            ko_rate,
            ko_rate_std: binomial_std(ko_rate, n),
        }
    }
}

#[inline]
fn binomial_std(rate: f64, n: f64) -> f64 {
    (rate * (1.0 - rate) / n).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fury() -> FighterProfile {
        FighterProfile::from_record("Tyson Fury", 34, 0, 1, 24, 206.0, 216.0, 270.0)
    }

    #[test]
    fn test_from_record_derives_total_bouts() {
        let f = fury();
        assert_eq!(f.total_bouts, 35);
        assert!(f.validate().is_ok());
    }

    #[test]
    fn test_zero_record_coerced_to_one_bout() {
        let debut = FighterProfile::from_record("Debut Kid", 0, 0, 0, 0, 180.0, 180.0, 160.0);
        assert_eq!(debut.total_bouts, 1);
        assert!(debut.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_bouts() {
        let mut f = fury();
        f.total_bouts = 0;
        f.wins = 0;
        f.draws = 0;
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inconsistent_record() {
        let mut f = fury();
        f.total_bouts = 10;
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nonpositive_measurements() {
        let mut f = fury();
        f.height_cm = 0.0;
        assert!(f.validate().is_err());
        let mut g = fury();
        g.weight_lbs = -5.0;
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_derived_rates_fury() {
        let rates = DerivedRates::from_profile(&fury());
        assert!((rates.win_rate - 34.0 / 35.0).abs() < 1e-12);
        assert!((rates.ko_rate - 24.0 / 35.0).abs() < 1e-12);
        let expected_std = (rates.win_rate * (1.0 - rates.win_rate) / 35.0_f64).sqrt();
        assert!((rates.win_rate_std - expected_std).abs() < 1e-12);
    }

    #[test]
    fn test_one_bout_zero_wins_is_well_defined() {
        // Must not divide by zero wins: KO rate conditions on total bouts.
        let f = FighterProfile::from_record("Winless", 0, 1, 0, 0, 175.0, 175.0, 150.0);
        let rates = DerivedRates::from_profile(&f);
        assert_eq!(rates.win_rate, 0.0);
        assert_eq!(rates.ko_rate, 0.0);
        assert_eq!(rates.win_rate_std, 0.0);
        assert_eq!(rates.ko_rate_std, 0.0);
    }

    #[test]
    fn test_std_is_zero_at_rate_endpoints() {
        let perfect = FighterProfile::from_record("Perfect", 50, 0, 0, 27, 173.0, 183.0, 147.0);
        let rates = DerivedRates::from_profile(&perfect);
        assert_eq!(rates.win_rate, 1.0);
        assert_eq!(rates.win_rate_std, 0.0);
    }

    #[test]
    fn test_default_weight_applied_on_deserialize() {
        let json = r#"{
            "name": "No Scale",
            "wins": 10, "losses": 2, "draws": 0,
            "total_bouts": 12, "ko_wins": 5,
            "height_cm": 180.0, "reach_cm": 182.0
        }"#;
        let f: FighterProfile = serde_json::from_str(json).unwrap();
        assert_eq!(f.weight_lbs, DEFAULT_WEIGHT_LBS);
    }
}
