//! Error types for embed resolution
//!
//! Resolution itself never fails. These errors surface from the per-provider
//! parsers (which the resolver downgrades to "no match") and from loading
//! configuration.

use thiserror::Error;

/// Errors that can occur during embed operations
#[derive(Debug, Error)]
pub enum EmbedError {
    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// URL belongs to a different provider
    #[error("URL host is not handled by {provider}: {url}")]
    HostMismatch {
        /// Provider that rejected the URL
        provider: &'static str,
        /// The rejected URL
        url: String,
    },

    /// Missing embed ID
    #[error("Missing embed ID from URL")]
    MissingId,

    /// Unknown provider name
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// Invalid embed configuration
    #[error("Invalid embed configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration document is not valid JSON
    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for embed operations
pub type Result<T> = std::result::Result<T, EmbedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_error_display() {
        let error = EmbedError::InvalidUrl("bad url".to_string());
        assert!(format!("{}", error).contains("Invalid URL"));

        let error = EmbedError::MissingId;
        assert!(format!("{}", error).contains("Missing embed ID"));

        let error = EmbedError::HostMismatch {
            provider: "vimeo",
            url: "https://example.com".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "URL host is not handled by vimeo: https://example.com"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err: EmbedError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, EmbedError::Json(_)));
    }
}
