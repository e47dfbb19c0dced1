//! Error types for gateway calls

use thiserror::Error;

/// A failed call to the remote store.
///
/// Every variant is a transport failure from the caller's point of view: the
/// call did not produce a usable entity and local state must stay as it was.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Collection or resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Backend refused or could not take the call
    #[error("Gateway unavailable: {0}")]
    Unavailable(String),

    /// Client could not be configured
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;
