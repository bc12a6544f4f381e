//! Data model for the prediction engine.
//!
//! - `FighterProfile`: immutable per-run input attributes
//! - `DerivedRates`: binomial point estimates + sampling uncertainty
//! - `BatchResult` / `SimulationResult`: per-batch and aggregate outcome counters

pub mod fighter;
pub mod result;

pub use fighter::{DerivedRates, FighterProfile};
pub use result::{BatchResult, SimulationResult};
