//! Error types for the Eventbrite client.

use thiserror::Error;

/// Result type for Eventbrite client operations.
pub type Result<T> = std::result::Result<T, EventbriteError>;

/// Eventbrite client errors.
#[derive(Debug, Error)]
pub enum EventbriteError {
    /// Request could not be built (malformed base URL or absolute URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for EventbriteError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            EventbriteError::Config(e.to_string())
        } else if e.is_decode() {
            EventbriteError::Parse(e.to_string())
        } else {
            EventbriteError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for EventbriteError {
    fn from(e: serde_json::Error) -> Self {
        EventbriteError::Parse(e.to_string())
    }
}
