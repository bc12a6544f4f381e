//! Batch-parallel trial execution.
//!
//! Embarrassingly parallel: the total trial count is split into near-equal
//! contiguous batches, each worker owns its own ChaCha generator seeded from
//! {master seed, batch index}, and the only synchronization point is the
//! final component-wise sum. A run is therefore reproducible given
//! {master seed, trial count, worker count}.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::thread;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::batch::run_batch;
use super::sampler::FighterPriors;
use super::weights::ScoringWeights;
use crate::error::Result;
use crate::models::BatchResult;

/// Split `n` trials into `workers` batches differing by at most one trial.
///
/// `base = n / workers`, and the first `n % workers` batches take one extra
/// trial, so the partition sums to `n` exactly.
pub fn partition_trials(n: u64, workers: usize) -> Vec<u64> {
    let w = workers.max(1) as u64;
    let base = n / w;
    let remainder = n % w;
    (0..w).map(|i| base + u64::from(i < remainder)).collect()
}

/// Derive a worker's sub-seed from the master seed and its batch index.
///
/// Hash-based so neighboring indices produce unrelated ChaCha key material.
pub fn derive_worker_seed(master_seed: u64, batch_index: usize) -> u64 {
    let mut hasher = DefaultHasher::new();
    master_seed.hash(&mut hasher);
    batch_index.hash(&mut hasher);
    hasher.finish()
}

/// Worker count for a run: bounded by the machine and by the trial count.
pub fn default_worker_count(n: u64) -> usize {
    let available = thread::available_parallelism().map(|p| p.get()).unwrap_or(1);
    available.min(n.max(1) as usize)
}

/// Run `n` trials across exactly `workers` concurrent batches and sum the
/// per-batch counters.
///
/// If any worker fails the whole aggregation fails; no partial totals are
/// ever returned.
pub fn run_partitioned(
    n: u64,
    a: &FighterPriors,
    b: &FighterPriors,
    weights: &ScoringWeights,
    master_seed: u64,
    workers: usize,
) -> Result<BatchResult> {
    let batch_sizes = partition_trials(n, workers);
    debug_assert_eq!(batch_sizes.iter().sum::<u64>(), n);
    log::debug!(
        "partitioned {} trials across {} workers (max batch {})",
        n,
        batch_sizes.len(),
        batch_sizes.first().copied().unwrap_or(0)
    );

    batch_sizes
        .into_par_iter()
        .enumerate()
        .map(|(index, trials)| {
            let mut rng = ChaCha8Rng::seed_from_u64(derive_worker_seed(master_seed, index));
            run_batch(trials, a, b, weights, &mut rng)
        })
        .try_reduce(BatchResult::default, |x, y| Ok(x.combine(y)))
}

/// Run `n` trials with the machine-derived worker count.
pub fn run_parallel(
    n: u64,
    a: &FighterPriors,
    b: &FighterPriors,
    weights: &ScoringWeights,
    master_seed: u64,
) -> Result<(BatchResult, usize)> {
    let workers = default_worker_count(n);
    let counts = run_partitioned(n, a, b, weights, master_seed, workers)?;
    Ok((counts, workers))
}

/// Run all `n` trials in a single batch seeded directly from the master seed.
pub fn run_sequential(
    n: u64,
    a: &FighterPriors,
    b: &FighterPriors,
    weights: &ScoringWeights,
    master_seed: u64,
) -> Result<BatchResult> {
    let mut rng = ChaCha8Rng::seed_from_u64(master_seed);
    run_batch(n, a, b, weights, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DerivedRates, FighterProfile};

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
    fn test_partition_sums_exactly_with_max_imbalance_one() {
        for &(n, w) in &[(100_000u64, 8usize), (7, 3), (1, 4), (5, 5), (10, 1)] {
            let sizes = partition_trials(n, w);
            assert_eq!(sizes.len(), w);
            assert_eq!(sizes.iter().sum::<u64>(), n);
            let max = *sizes.iter().max().unwrap();
            let min = *sizes.iter().min().unwrap();
            assert!(max - min <= 1, "imbalance for n={n} w={w}: {sizes:?}");
        }
    }

    #[test]
    fn test_worker_seeds_are_distinct_and_stable() {
        let s0 = derive_worker_seed(42, 0);
        let s1 = derive_worker_seed(42, 1);
        assert_ne!(s0, s1);
        assert_eq!(s0, derive_worker_seed(42, 0));
        assert_ne!(s0, derive_worker_seed(43, 0));
    }

    #[test]
    fn test_partitioned_run_is_reproducible() {
        let weights = ScoringWeights::default();
        let (a, b) = (fury(), canelo());
        let c1 = run_partitioned(20_000, &a, &b, &weights, 42, 4).unwrap();
        let c2 = run_partitioned(20_000, &a, &b, &weights, 42, 4).unwrap();
        assert_eq!(c1, c2);
        assert_eq!(c1.total(), 20_000);
    }

    #[test]
    fn test_sequential_run_is_reproducible() {
        let weights = ScoringWeights::default();
        let (a, b) = (fury(), canelo());
        let c1 = run_sequential(10_000, &a, &b, &weights, 42).unwrap();
        let c2 = run_sequential(10_000, &a, &b, &weights, 42).unwrap();
        assert_eq!(c1, c2);
    }

    #[test]
    fn test_win_share_is_invariant_to_worker_count() {
        // Distributional contract: only the random stream partition differs
        // with W, so the estimated win share agrees across worker counts.
        let weights = ScoringWeights::default();
        let (a, b) = (fury(), canelo());
        let n = 100_000u64;
        let shares: Vec<f64> = [1usize, 2, 4]
            .iter()
            .map(|&w| {
                let counts = run_partitioned(n, &a, &b, &weights, 42, w).unwrap();
                assert_eq!(counts.total(), n);
                counts.wins_a as f64 / n as f64
            })
            .collect();
        for pair in shares.windows(2) {
            assert!(
                (pair[0] - pair[1]).abs() < 0.01,
                "worker-count dependence: {shares:?}"
            );
        }
    }

    #[test]
    fn test_single_trial_run() {
        let weights = ScoringWeights::default();
        let (a, b) = (fury(), canelo());
        let counts = run_partitioned(1, &a, &b, &weights, 42, 8).unwrap();
        assert_eq!(counts.total(), 1);
    }
}
