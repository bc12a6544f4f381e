//! # ring_core - Deterministic Monte Carlo Boxing Match Prediction Engine
//!
//! This library predicts the probabilistic outcome of a boxing match by
//! running a large number of independent randomized trials over noisy
//! estimates of each fighter's record and physical attributes.
//!
//! ## Features
//! - 100% deterministic simulation (same seed + same worker count = same result)
//! - Binomial-proportion uncertainty model for win and KO rates
//! - Weight-class aware multi-factor scoring
//! - Batch-parallel execution via rayon with per-worker derived seeds
//! - JSON API for easy integration with web front-ends

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]

pub mod api;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;
pub mod summary;

// Re-export main API functions
pub use api::{simulate_json, ErrorResponse, SimulationRequest, SimulationResponse};
pub use error::{Result, SimError};

// Re-export core simulation types
pub use engine::{
    simulate, ExecutionMode, ScoringWeights, SimulationPlan, DEFAULT_SEED, MAX_TRIALS,
};
pub use models::{BatchResult, DerivedRates, FighterProfile, SimulationResult};

// Re-export data provider layer
pub use data::{
    embedded_roster, ChainedProvider, FighterProvider, RawFighterRecord, StaticTableProvider,
};
pub use summary::{summarize, FightSummary};
