//! Core error types for segbar.

use thiserror::Error;

/// Core error type for segbar operations.
///
/// Missing provider data is never an error; it resolves to display
/// fallbacks. These variants cover malformed input at the boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Provider name not recognised.
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Input that cannot be turned into a domain value.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
