//! Error types for view helpers

use thiserror::Error;

/// Errors that can occur while preparing a control
#[derive(Debug, Error)]
pub enum HelperError {
    /// Field id cannot be used as an HTML id/name
    #[error("Invalid field id: {0:?}")]
    InvalidFieldId(String),

    /// Invalid helper configuration
    #[error("Invalid helper configuration: {0}")]
    InvalidConfig(String),

    /// Configuration document is not valid JSON
    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for view helper operations
pub type Result<T> = std::result::Result<T, HelperError>;
