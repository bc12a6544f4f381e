//! Sequential execution of one contiguous block of trials.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::sampler::{FighterPriors, TrialSampler};
use super::scoring::{classify, score_pair, TrialOutcome};
use super::weights::{ScoringWeights, DRAW_THRESHOLD, SCORE_NOISE_STD};
use crate::error::{Result, SimError};
use crate::models::BatchResult;

/// Run `trials` simulated fights sequentially, accumulating outcome counters.
///
/// Pure function of its inputs plus the RNG stream: no state is shared with
/// any other batch, so concurrent invocations with independent generators
/// compose by adding their counters.
pub fn run_batch<R: Rng + ?Sized>(
    trials: u64,
    a: &FighterPriors,
    b: &FighterPriors,
    weights: &ScoringWeights,
    rng: &mut R,
) -> Result<BatchResult> {
    let sampler_a = TrialSampler::new(a)?;
    let sampler_b = TrialSampler::new(b)?;
    let noise = Normal::new(0.0, SCORE_NOISE_STD)
        .map_err(|e| SimError::WorkerFailed(format!("bad noise distribution: {e}")))?;

    let mut counts = BatchResult::default();
    for _ in 0..trials {
        let sample_a = sampler_a.draw(rng);
        let sample_b = sampler_b.draw(rng);

        let (base_a, base_b) = score_pair(&sample_a, &sample_b, weights);
        let score_a = base_a + noise.sample(rng);
        let score_b = base_b + noise.sample(rng);

        match classify(score_a, score_b, DRAW_THRESHOLD) {
            TrialOutcome::WinA => counts.wins_a += 1,
            TrialOutcome::WinB => counts.wins_b += 1,
            TrialOutcome::Draw => counts.draws += 1,
        }
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DerivedRates, FighterProfile};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn priors_for(profile: &FighterProfile) -> FighterPriors {
        FighterPriors::new(profile, &DerivedRates::from_profile(profile))
    }

    fn fury() -> FighterPriors {
        priors_for(&FighterProfile::from_record(
            "Tyson Fury", 34, 0, 1, 24, 206.0, 216.0, 270.0,
        ))
    }

    fn canelo() -> FighterPriors {
        priors_for(&FighterProfile::from_record(
            "Canelo Alvarez", 62, 2, 2, 39, 173.0, 179.0, 168.0,
        ))
    }

    #[test]
    fn test_counters_conserve_trial_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let counts =
            run_batch(10_000, &fury(), &canelo(), &ScoringWeights::default(), &mut rng).unwrap();
        assert_eq!(counts.total(), 10_000);
    }

    #[test]
    fn test_zero_trials_yields_empty_counters() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let counts =
            run_batch(0, &fury(), &canelo(), &ScoringWeights::default(), &mut rng).unwrap();
        assert_eq!(counts, BatchResult::default());
    }

    #[test]
    fn test_same_seed_reproduces_counters() {
        let weights = ScoringWeights::default();
        let mut rng1 = ChaCha8Rng::seed_from_u64(1234);
        let mut rng2 = ChaCha8Rng::seed_from_u64(1234);
        let c1 = run_batch(5_000, &fury(), &canelo(), &weights, &mut rng1).unwrap();
        let c2 = run_batch(5_000, &fury(), &canelo(), &weights, &mut rng2).unwrap();
        assert_eq!(c1, c2);
    }

    #[test]
    fn test_mirrored_matchup_mirrors_win_shares() {
        // (A, B) and (B, A) estimate the same distribution with the roles
        // swapped; the shares agree within sampling noise.
        let weights = ScoringWeights::default();
        let n = 50_000;
        let mut rng1 = ChaCha8Rng::seed_from_u64(7);
        let mut rng2 = ChaCha8Rng::seed_from_u64(7);
        let ab = run_batch(n, &fury(), &canelo(), &weights, &mut rng1).unwrap();
        let ba = run_batch(n, &canelo(), &fury(), &weights, &mut rng2).unwrap();
        let share_ab = ab.wins_a as f64 / n as f64;
        let share_ba = ba.wins_b as f64 / n as f64;
        assert!(
            (share_ab - share_ba).abs() < 0.02,
            "mirror mismatch: {share_ab} vs {share_ba}"
        );
    }

    #[test]
    fn test_extra_weight_increases_win_share() {
        // Identical fighters except for body weight: the heavier one must
        // come out ahead under the weight-aware model.
        let light = priors_for(&FighterProfile::from_record(
            "Light", 20, 5, 0, 10, 180.0, 182.0, 168.0,
        ));
        let heavy = priors_for(&FighterProfile::from_record(
            "Heavy", 20, 5, 0, 10, 180.0, 182.0, 270.0,
        ));
        let weights = ScoringWeights::default();
        let n = 50_000;

        let mut rng1 = ChaCha8Rng::seed_from_u64(11);
        let baseline = run_batch(n, &light, &light, &weights, &mut rng1).unwrap();
        let mut rng2 = ChaCha8Rng::seed_from_u64(11);
        let heavier = run_batch(n, &heavy, &light, &weights, &mut rng2).unwrap();

        let base_share = baseline.wins_a as f64 / n as f64;
        let heavy_share = heavier.wins_a as f64 / n as f64;
        assert!(
            heavy_share > base_share + 0.05,
            "weight advantage too small: {base_share} -> {heavy_share}"
        );
    }
}
