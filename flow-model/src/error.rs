//! Validation errors for create requests

use thiserror::Error;

/// Input rejected locally, before any call to the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was missing or blank
    #[error("{0} is required")]
    Required(&'static str),

    /// A field held a value outside its fixed set
    #[error("invalid {field}: {value:?}")]
    Invalid { field: &'static str, value: String },
}

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ValidationError>;
