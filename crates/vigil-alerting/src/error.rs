//! Error types for the vigil-alerting crate.

use thiserror::Error;
use vigil_core::AlertKind;

/// Errors produced by the notification dispatch layer.
///
/// Every variant is recoverable: the decision engine absorbs these into
/// its state machine (a failed trigger stays untriggered and is retried on
/// the next qualifying cycle) and never surfaces them to its caller.
#[derive(Debug, Error)]
pub enum AlertingError {
    /// No provider is configured for the alert's backend kind.
    #[error("no alerting provider configured for '{kind}'")]
    ProviderNotConfigured {
        /// The backend kind with no matching provider.
        kind: AlertKind,
    },

    /// A provider exists for the kind but failed its validity check.
    #[error("alerting provider '{kind}' is misconfigured: {reason}")]
    InvalidProviderConfig {
        /// The backend kind whose provider is misconfigured.
        kind: AlertKind,
        /// Why the configuration is invalid.
        reason: String,
    },

    /// The provider attempted delivery and reported a failure.
    #[error("failed to send notification via '{kind}': {reason}")]
    SendFailed {
        /// The backend kind that failed to deliver.
        kind: AlertKind,
        /// The provider-reported failure.
        reason: String,
    },

    /// Payload serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AlertingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for alerting operations.
pub type Result<T> = std::result::Result<T, AlertingError>;
