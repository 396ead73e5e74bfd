//! Error types and error handling for docsift.
//!
//! This module defines the error types used throughout the
//! application. Every session-level error maps to a user-facing
//! status message; none of them leave the session unusable.

use thiserror::Error;

/// Result type alias for docsift operations
pub type Result<T> = std::result::Result<T, DocsiftError>;

/// Main error type for docsift
#[derive(Error, Debug)]
pub enum DocsiftError {
    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("No document loaded")]
    EmptyDocument,

    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DocsiftError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Status line shown to the user when this error ends an operation
    pub fn status_message(&self) -> String {
        match self {
            DocsiftError::Extraction(_) | DocsiftError::InvalidUrl(_) => {
                "Error loading the link. Check that the site allows being read.".to_string()
            }
            DocsiftError::EmptyDocument => "Load a valid link first.".to_string(),
            DocsiftError::EmptyQuery => "Enter a query.".to_string(),
            other => other.message(),
        }
    }

    /// Check if the session stays usable after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DocsiftError::Extraction(_)
                | DocsiftError::EmptyDocument
                | DocsiftError::EmptyQuery
                | DocsiftError::InvalidUrl(_)
                | DocsiftError::InvalidQuery(_)
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            DocsiftError::EmptyQuery
                | DocsiftError::InvalidUrl(_)
                | DocsiftError::InvalidQuery(_)
                | DocsiftError::ConfigError(_)
        )
    }
}
