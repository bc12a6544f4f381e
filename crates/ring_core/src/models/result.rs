//! Outcome counters for batches and whole runs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Win/loss/draw counters for one contiguous block of trials.
///
/// Combination is component-wise addition, so it is associative and
/// commutative: the batch partition is invisible in the final totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    pub wins_a: u64,
    pub wins_b: u64,
    pub draws: u64,
}

impl BatchResult {
    pub fn combine(self, other: BatchResult) -> BatchResult {
        BatchResult {
            wins_a: self.wins_a + other.wins_a,
            wins_b: self.wins_b + other.wins_b,
            draws: self.draws + other.draws,
        }
    }

    pub fn total(&self) -> u64 {
        self.wins_a + self.wins_b + self.draws
    }
}

/// Aggregate result of a full simulation run. Read-only, produced once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub wins_a: u64,
    pub wins_b: u64,
    pub draws: u64,
    pub n_trials: u64,
    /// Worker count actually used (1 for sequential runs).
    pub workers: usize,
    pub elapsed_secs: f64,
}

impl SimulationResult {
    pub fn new(counts: BatchResult, n_trials: u64, workers: usize, elapsed: Duration) -> Self {
        Self {
            wins_a: counts.wins_a,
            wins_b: counts.wins_b,
            draws: counts.draws,
            n_trials,
            workers,
            elapsed_secs: elapsed.as_secs_f64(),
        }
    }

    pub fn win_pct_a(&self) -> f64 {
        percentage(self.wins_a, self.n_trials)
    }

    pub fn win_pct_b(&self) -> f64 {
        percentage(self.wins_b, self.n_trials)
    }

    pub fn draw_pct(&self) -> f64 {
        percentage(self.draws, self.n_trials)
    }

    /// Trials per second. A zero elapsed time is a defined edge case
    /// (sub-resolution timer on a tiny run) and reports as infinite.
    pub fn throughput(&self) -> f64 {
        if self.elapsed_secs > 0.0 {
            self.n_trials as f64 / self.elapsed_secs
        } else {
            f64::INFINITY
        }
    }
}

#[inline]
fn percentage(count: u64, n: u64) -> f64 {
    if n == 0 {
        0.0
    } else {
        count as f64 / n as f64 * 100.0
    }
}
