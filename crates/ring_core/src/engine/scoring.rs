//! Fight score computation and trial outcome classification.
//!
//! All functions are pure - they take sampled attributes as input and return
//! scores or outcomes. This allows unit testing without an RNG.

use super::sampler::TrialSample;
use super::weights::{ScoringWeights, LENGTH_ADV_SCALE, WEIGHT_ADV_SCALE};

/// Outcome of a single simulated trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialOutcome {
    WinA,
    WinB,
    Draw,
}

/// Compute both fighters' scores for one trial.
///
/// Advantage terms are antisymmetric: fighter A gets `+adv * w`, fighter B
/// gets `-adv * w`, so swapping the fighters mirrors the scores. The
/// per-fighter unpredictability noise is drawn by the caller and added on
/// top of these deterministic components.
pub fn score_pair(a: &TrialSample, b: &TrialSample, w: &ScoringWeights) -> (f64, f64) {
    let height_adv = (a.height_cm - b.height_cm) / LENGTH_ADV_SCALE;
    let reach_adv = (a.reach_cm - b.reach_cm) / LENGTH_ADV_SCALE;
    let weight_adv = (a.weight_lbs - b.weight_lbs) / WEIGHT_ADV_SCALE;

    let advantage =
        height_adv * w.height + reach_adv * w.reach + weight_adv * w.weight;

    let score_a = a.win_rate * w.win_rate + a.ko_rate * w.ko_rate + advantage;
    let score_b = b.win_rate * w.win_rate + b.ko_rate * w.ko_rate - advantage;

    (score_a, score_b)
}

/// Classify one trial. The real line is totally ordered, so exactly one of
/// the three outcomes holds.
#[inline]
pub fn classify(score_a: f64, score_b: f64, draw_threshold: f64) -> TrialOutcome {
    if (score_a - score_b).abs() < draw_threshold {
        TrialOutcome::Draw
    } else if score_a > score_b {
        TrialOutcome::WinA
    } else {
        TrialOutcome::WinB
    }
}
