//! Monte Carlo Simulation Engine
//!
//! Core simulation module. This module orchestrates a full prediction run:
//!
//! - Rate derivation (binomial point estimates + uncertainty)
//! - Per-trial attribute sampling (`sampler`)
//! - Weighted fight scoring and outcome classification (`scoring`)
//! - Sequential batch execution (`batch`)
//! - Batch-parallel aggregation with derived per-worker seeds (`parallel`)
//!
//! ## Data flow
//!
//! ```text
//! SimulationPlan { fighter_a, fighter_b, n_trials, seed, mode, weights }
//!        │
//!        ▼
//!   validate() ──► DerivedRates ──► FighterPriors (frozen for the run)
//!        │
//!        ▼
//!   parallel::run_parallel / run_sequential
//!        │     (per worker: TrialSampler → score_pair → classify)
//!        ▼
//!   BatchResult sum ──► SimulationResult { counters, elapsed, workers }
//! ```

pub mod batch;
pub mod parallel;
pub mod sampler;
pub mod scoring;
pub mod weights;

use std::time::Instant;

pub use sampler::{FighterPriors, TrialSample, TrialSampler};
pub use scoring::{classify, score_pair, TrialOutcome};
pub use weights::{ScoringWeights, DRAW_THRESHOLD};

use crate::error::{Result, SimError};
use crate::models::{DerivedRates, FighterProfile, SimulationResult};

/// Hard cap on the trial count, bounding request latency in interactive use.
pub const MAX_TRIALS: u64 = 200_000;

/// Master seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 42;

/// How to execute the trial batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One batch per available core, joined at the end.
    #[default]
    Parallel,
    /// A single batch on the calling thread. Bit-exact reproducible for a
    /// given master seed independent of the machine.
    Sequential,
}

/// Everything a run needs, validated up front.
#[derive(Debug, Clone)]
pub struct SimulationPlan {
    pub fighter_a: FighterProfile,
    pub fighter_b: FighterProfile,
    pub n_trials: u64,
    pub seed: u64,
    pub mode: ExecutionMode,
    pub weights: ScoringWeights,
}

impl SimulationPlan {
    pub fn new(fighter_a: FighterProfile, fighter_b: FighterProfile, n_trials: u64) -> Self {
        Self {
            fighter_a,
            fighter_b,
            n_trials,
            seed: DEFAULT_SEED,
            mode: ExecutionMode::default(),
            weights: ScoringWeights::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }
}

/// Run a full Monte Carlo prediction.
///
/// Rejects malformed input before any trial runs; a worker failure aborts
/// the whole run rather than returning partial totals.
pub fn simulate(plan: &SimulationPlan) -> Result<SimulationResult> {
    if plan.n_trials == 0 || plan.n_trials > MAX_TRIALS {
        return Err(SimError::InvalidTrialCount(plan.n_trials));
    }
    plan.fighter_a.validate()?;
    plan.fighter_b.validate()?;

    let rates_a = DerivedRates::from_profile(&plan.fighter_a);
    let rates_b = DerivedRates::from_profile(&plan.fighter_b);
    let priors_a = FighterPriors::new(&plan.fighter_a, &rates_a);
    let priors_b = FighterPriors::new(&plan.fighter_b, &rates_b);

    log::info!(
        "simulating {} vs {}: {} trials, seed {}, mode {:?}",
        plan.fighter_a.name,
        plan.fighter_b.name,
        plan.n_trials,
        plan.seed,
        plan.mode
    );
    log::debug!(
        "{}: win {:.3} ± {:.3}, ko {:.3} ± {:.3}",
        plan.fighter_a.name,
        rates_a.win_rate,
        rates_a.win_rate_std,
        rates_a.ko_rate,
        rates_a.ko_rate_std
    );
    log::debug!(
        "{}: win {:.3} ± {:.3}, ko {:.3} ± {:.3}",
        plan.fighter_b.name,
        rates_b.win_rate,
        rates_b.win_rate_std,
        rates_b.ko_rate,
        rates_b.ko_rate_std
    );

    let start = Instant::now();
    let (counts, workers) = match plan.mode {
        ExecutionMode::Parallel => {
            parallel::run_parallel(plan.n_trials, &priors_a, &priors_b, &plan.weights, plan.seed)?
        }
        ExecutionMode::Sequential => {
            let counts = parallel::run_sequential(
                plan.n_trials,
                &priors_a,
                &priors_b,
                &plan.weights,
                plan.seed,
            )?;
            (counts, 1)
        }
    };
    let elapsed = start.elapsed();

    let result = SimulationResult::new(counts, plan.n_trials, workers, elapsed);
    log::info!(
        "completed {} trials in {:.3}s ({:.0} trials/s)",
        result.n_trials,
        result.elapsed_secs,
        result.throughput()
    );
    Ok(result)
}
