//! JSON request/response surface for web front-ends.

pub mod json_api;

pub use json_api::{simulate_json, ErrorResponse, SimulationRequest, SimulationResponse};
