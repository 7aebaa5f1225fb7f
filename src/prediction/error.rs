//! Error types for the crowd prediction upstream.

use thiserror::Error;

/// Ways the ML service can fail to answer. Never shown to API callers.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    Status(u16),

    #[error("Upstream response undecodable: {0}")]
    Decode(String),
}
