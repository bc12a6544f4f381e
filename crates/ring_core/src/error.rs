use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid fighter profile '{name}': {reason}")]
    InvalidProfile { name: String, reason: String },

    #[error("Fighter not found: '{name}'")]
    FighterNotFound {
        name: String,
        /// Closest roster entry by edit distance, when one is plausible.
        suggestion: Option<String>,
        /// Names the provider chain can resolve.
        available: Vec<String>,
    },

    #[error("Invalid trial count {0}: must be between 1 and {max}", max = crate::engine::MAX_TRIALS)]
    InvalidTrialCount(u64),

    #[error("Simulation worker failed: {0}")]
    WorkerFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SimError {
    pub fn invalid_profile(name: impl Into<String>, reason: impl Into<String>) -> Self {
        SimError::InvalidProfile { name: name.into(), reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
