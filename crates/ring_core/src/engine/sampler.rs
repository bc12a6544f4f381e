//! Per-trial attribute sampling.
//!
//! Each trial draws one noisy realization of a fighter's win rate, KO rate,
//! height, reach and weight from independent normal distributions centered
//! at the point estimates. Rate spreads come from the binomial model in
//! [`DerivedRates`]; physical spreads are fixed (see `weights`).

use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::weights::{HEIGHT_STD_CM, REACH_STD_CM, WEIGHT_STD_LBS};
use crate::error::{Result, SimError};
use crate::models::{DerivedRates, FighterProfile};

/// Point estimates and spreads for one fighter, frozen for a whole run.
#[derive(Debug, Clone, Copy)]
pub struct FighterPriors {
    pub win_rate: f64,
    pub win_rate_std: f64,
    pub ko_rate: f64,
    pub ko_rate_std: f64,
    pub height_cm: f64,
    pub reach_cm: f64,
    pub weight_lbs: f64,
}

impl FighterPriors {
    pub fn new(profile: &FighterProfile, rates: &DerivedRates) -> Self {
        Self {
            win_rate: rates.win_rate,
            win_rate_std: rates.win_rate_std,
            ko_rate: rates.ko_rate,
            ko_rate_std: rates.ko_rate_std,
            height_cm: profile.height_cm,
            reach_cm: profile.reach_cm,
            weight_lbs: profile.weight_lbs,
        }
    }
}

/// One noisy realization of a fighter's attributes. Never persisted.
#[derive(Debug, Clone, Copy)]
pub struct TrialSample {
    pub win_rate: f64,
    pub ko_rate: f64,
    pub height_cm: f64,
    pub reach_cm: f64,
    pub weight_lbs: f64,
}

/// Pre-built normal distributions for one fighter.
///
/// Building the distributions once per batch keeps the hot loop allocation
/// free; a zero spread is valid and collapses the draw to the mean.
#[derive(Debug, Clone, Copy)]
pub struct TrialSampler {
    win_rate: Normal<f64>,
    ko_rate: Normal<f64>,
    height: Normal<f64>,
    reach: Normal<f64>,
    weight: Normal<f64>,
}

impl TrialSampler {
    pub fn new(priors: &FighterPriors) -> Result<Self> {
        Ok(Self {
            win_rate: normal(priors.win_rate, priors.win_rate_std)?,
            ko_rate: normal(priors.ko_rate, priors.ko_rate_std)?,
            height: normal(priors.height_cm, HEIGHT_STD_CM)?,
            reach: normal(priors.reach_cm, REACH_STD_CM)?,
            weight: normal(priors.weight_lbs, WEIGHT_STD_LBS)?,
        })
    }

    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> TrialSample {
        TrialSample {
            win_rate: self.win_rate.sample(rng),
            ko_rate: self.ko_rate.sample(rng),
            height_cm: self.height.sample(rng),
            reach_cm: self.reach.sample(rng),
            weight_lbs: self.weight.sample(rng),
        }
    }
}

fn normal(mean: f64, std: f64) -> Result<Normal<f64>> {
    Normal::new(mean, std)
        .map_err(|e| SimError::WorkerFailed(format!("bad normal({mean}, {std}): {e}")))
}
