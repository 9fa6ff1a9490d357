use crate::outcome::Outcome;
use thiserror::Error;

/// Rejected spin input. The engine never clamps; it refuses.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SpinError {
    #[error("probability {0} is outside [0, 1]")]
    ProbabilityOutOfRange(f64),
    #[error("unknown outcome {0:?}, expected \"yes\" or \"no\"")]
    UnknownOutcome(String),
    #[error("a spin is already in progress")]
    SpinInProgress,
    #[error("outcome {0} has an empty sector at this probability")]
    EmptySector(Outcome),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("stored value could not be decoded: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("storage backend failed: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("invalid oracle base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("Model API error: {0}")]
    Status(u16),
    #[error("malformed oracle response: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown theme {0:?}")]
pub struct UnknownTheme(pub String);
