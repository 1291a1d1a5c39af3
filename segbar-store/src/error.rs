//! Store error types.

use segbar_core::ProviderKind;
use thiserror::Error;

/// Errors that can occur in the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A feed for this provider already exists.
    #[error("Provider already registered: {0}")]
    AlreadyRegistered(ProviderKind),

    /// Provider disabled in the configuration.
    #[error("Provider not enabled: {0}")]
    ProviderNotEnabled(ProviderKind),

    /// A feed was handed another provider's snapshot.
    #[error("Snapshot for {actual} emitted on the {expected} feed")]
    KindMismatch {
        /// The feed's provider.
        expected: ProviderKind,
        /// The snapshot's provider.
        actual: ProviderKind,
    },

    /// The aggregator task is already running.
    #[error("Aggregator already started")]
    AlreadyStarted,

    /// The aggregator has been torn down.
    #[error("Aggregator closed")]
    Closed,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Returns true if this is a transient error that might succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Io(_))
    }
}
