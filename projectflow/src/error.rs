//! Error types for store operations

use flow_gateway::GatewayError;
use flow_model::ValidationError;
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum FlowError {
    /// Input rejected before any network call
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The remote store call failed or answered something unusable
    #[error("Transport error: {0}")]
    Transport(#[from] GatewayError),

    /// A spawned load task panicked or was aborted
    #[error("Load task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl FlowError {
    /// Whether the operation was declined locally
    pub fn is_validation(&self) -> bool {
        matches!(self, FlowError::Validation(_))
    }

    /// Whether the remote store call failed
    pub fn is_transport(&self) -> bool {
        matches!(self, FlowError::Transport(_))
    }
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, FlowError>;
