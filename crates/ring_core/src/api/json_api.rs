//! JSON simulation API.
//!
//! String-in/string-out so the caller (web handler, FFI shim, CLI `--json`
//! mode) never touches engine types. Errors come back as a structured
//! payload carrying the reason, a "did you mean" suggestion and the roster,
//! instead of a bare message.

use serde::{Deserialize, Serialize};

use crate::data::{resolve_fighter, FighterProvider};
use crate::engine::{simulate, ExecutionMode, ScoringWeights, SimulationPlan, DEFAULT_SEED};
use crate::error::SimError;
use crate::summary::{summarize, FightSummary};

/// Default trial count for API callers that do not specify one.
pub const DEFAULT_API_TRIALS: u64 = 100_000;

#[derive(Debug, Deserialize)]
pub struct SimulationRequest {
    pub fighter1: String,
    pub fighter2: String,
    #[serde(default)]
    pub n_simulations: Option<u64>,
    #[serde(default)]
    pub seed: Option<u64>,
    /// Defaults to parallel execution.
    #[serde(default)]
    pub sequential: bool,
    /// Use the record-only weight set instead of the weight-aware default.
    #[serde(default)]
    pub classic_weights: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub summary: FightSummary,
    pub seed: u64,
    pub workers: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub available_fighters: Vec<String>,
}

impl ErrorResponse {
    fn from_sim_error(err: SimError) -> Self {
        match err {
            SimError::FighterNotFound { name, suggestion, available } => Self {
                error: format!("Fighter not found: '{name}'"),
                suggestion: suggestion.map(|s| format!("Did you mean '{s}'?")),
                available_fighters: available,
            },
            other => Self {
                error: other.to_string(),
                suggestion: None,
                available_fighters: Vec::new(),
            },
        }
    }
}

/// Run a simulation from a JSON request string.
///
/// `Ok` carries the serialized [`SimulationResponse`]; `Err` carries a
/// serialized [`ErrorResponse`]. Both sides are valid JSON.
pub fn simulate_json(request_json: &str, provider: &dyn FighterProvider) -> Result<String, String> {
    let request: SimulationRequest = serde_json::from_str(request_json)
        .map_err(|e| error_json(format!("Invalid JSON request: {e}")))?;

    let fighter_a = resolve_fighter(provider, &request.fighter1)
        .map_err(|e| serialize_error(ErrorResponse::from_sim_error(e)))?;
    let fighter_b = resolve_fighter(provider, &request.fighter2)
        .map_err(|e| serialize_error(ErrorResponse::from_sim_error(e)))?;

    let seed = request.seed.unwrap_or(DEFAULT_SEED);
    let mode =
        if request.sequential { ExecutionMode::Sequential } else { ExecutionMode::Parallel };
    let weights = if request.classic_weights {
        ScoringWeights::classic()
    } else {
        ScoringWeights::weight_aware()
    };

    let plan = SimulationPlan::new(
        fighter_a.clone(),
        fighter_b.clone(),
        request.n_simulations.unwrap_or(DEFAULT_API_TRIALS),
    )
    .with_seed(seed)
    .with_mode(mode)
    .with_weights(weights);

    let result =
        simulate(&plan).map_err(|e| serialize_error(ErrorResponse::from_sim_error(e)))?;

    let response = SimulationResponse {
        summary: summarize(&result, &fighter_a, &fighter_b),
        seed,
        workers: result.workers,
    };
    serde_json::to_string(&response).map_err(|e| error_json(format!("Serialization error: {e}")))
}

fn serialize_error(response: ErrorResponse) -> String {
    serde_json::to_string(&response).unwrap_or_else(|_| error_json(response.error))
}

fn error_json(message: String) -> String {
    format!("{{\"error\":{}}}", serde_json::Value::String(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StaticTableProvider;

    fn provider() -> StaticTableProvider {
        StaticTableProvider::embedded()
    }

    #[test]
    fn test_valid_request_round_trip() {
        let request = r#"{
            "fighter1": "Tyson Fury",
            "fighter2": "Canelo Alvarez",
            "n_simulations": 5000,
            "seed": 42
        }"#;
        let payload = simulate_json(request, &provider()).expect("request should succeed");
        let response: SimulationResponse = serde_json::from_str(&payload).unwrap();
        assert_eq!(response.seed, 42);
        let s = &response.summary;
        assert_eq!(s.n_trials, 5000);
        assert_eq!(s.fighter_a.wins + s.fighter_b.wins + s.draws, 5000);
        // 102 lbs apart: the weight-class advisory must be present.
        assert_eq!(s.warnings.len(), 1);
    }

    #[test]
    fn test_misspelled_fighter_yields_suggestion_payload() {
        let request = r#"{"fighter1": "Tyson Furry", "fighter2": "Jake Paul"}"#;
        let err = simulate_json(request, &provider()).unwrap_err();
        let payload: ErrorResponse = serde_json::from_str(&err).unwrap();
        assert!(payload.error.contains("Tyson Furry"));
        assert_eq!(payload.suggestion.as_deref(), Some("Did you mean 'Tyson Fury'?"));
        assert_eq!(payload.available_fighters.len(), 6);
    }

    #[test]
    fn test_unknown_fighter_lists_roster() {
        let request = r#"{"fighter1": "Fake Fighter", "fighter2": "Jake Paul"}"#;
        let err = simulate_json(request, &provider()).unwrap_err();
        let payload: ErrorResponse = serde_json::from_str(&err).unwrap();
        assert!(payload.suggestion.is_none());
        assert!(payload.available_fighters.contains(&"Jake Paul".to_string()));
    }

    #[test]
    fn test_trial_cap_enforced() {
        let request = r#"{
            "fighter1": "Tyson Fury",
            "fighter2": "Jake Paul",
            "n_simulations": 500000
        }"#;
        let err = simulate_json(request, &provider()).unwrap_err();
        let payload: ErrorResponse = serde_json::from_str(&err).unwrap();
        assert!(payload.error.contains("trial count"), "got: {}", payload.error);
    }

    #[test]
    fn test_malformed_json_is_an_error_payload() {
        let err = simulate_json("{not json", &provider()).unwrap_err();
        assert!(err.contains("Invalid JSON request"));
        assert!(serde_json::from_str::<serde_json::Value>(&err).is_ok());
    }

    #[test]
    fn test_sequential_flag_is_reproducible() {
        let request = r#"{
            "fighter1": "Floyd Mayweather",
            "fighter2": "Mike Tyson",
            "n_simulations": 2000,
            "seed": 7,
            "sequential": true
        }"#;
        let p1 = simulate_json(request, &provider()).unwrap();
        let p2 = simulate_json(request, &provider()).unwrap();
        let r1: SimulationResponse = serde_json::from_str(&p1).unwrap();
        let r2: SimulationResponse = serde_json::from_str(&p2).unwrap();
        assert_eq!(r1.summary.fighter_a.wins, r2.summary.fighter_a.wins);
        assert_eq!(r1.summary.draws, r2.summary.draws);
        assert_eq!(r1.workers, 1);
    }
}
