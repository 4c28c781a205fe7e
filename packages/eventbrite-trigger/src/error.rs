//! Typed errors for the trigger library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so hosts can tell a
//! malformed callback apart from a remote failure.

use thiserror::Error;

/// Errors surfaced by the lifecycle manager and the inbound normalizer.
#[derive(Debug, Error)]
pub enum TriggerError {
    /// Inbound payload or node configuration is malformed
    #[error("validation failed: {reason}")]
    Validation { reason: String },

    /// Remote Eventbrite call failed
    #[error("remote request failed: {0}")]
    Remote(#[from] GatewayError),

    /// Persistent store failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// `delete` was called but no subscription id is stored
    #[error("no webhook subscription is stored for this node")]
    NoSubscription,

    /// Remote answered successfully but not with the expected shape
    #[error("invalid response from Eventbrite: {0}")]
    InvalidResponse(String),

    /// Request body could not be encoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TriggerError {
    pub fn validation(reason: impl Into<String>) -> Self {
        TriggerError::Validation {
            reason: reason.into(),
        }
    }
}

/// Errors reported by a [`Gateway`](crate::traits::gateway::Gateway).
///
/// `Clone` so scripted test gateways can replay the same failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The remote resource does not exist (HTTP 404)
    #[error("not found: {0}")]
    NotFound(String),

    /// Connection failed, timed out, or was reset
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx response other than 404
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body was not valid JSON
    #[error("parse error: {0}")]
    Parse(String),
}

/// Errors reported by a [`StaticDataStore`](crate::traits::store::StaticDataStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt store data: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for trigger operations.
pub type Result<T> = std::result::Result<T, TriggerError>;

/// Result type alias for gateway calls.
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
