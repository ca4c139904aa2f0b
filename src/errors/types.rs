//! Error type definitions for the sitemap generator
//!
//! This module defines all error types used throughout the application,
//! providing a hierarchical error system that makes debugging and error
//! handling more straightforward.

use thiserror::Error;

/// Top-level application error type
///
/// This enum represents all possible errors that can occur in the application.
/// It uses `thiserror` to provide automatic error trait implementations and
/// proper error chaining. Every variant is fatal: the batch either fully
/// succeeds or fully fails, and all errors bubble to the top-level handler.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors (missing or invalid settings)
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Document source errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// The remote store returned zero job documents; publishing an empty
    /// sitemap would silently drop live postings from search discovery
    #[error("Fetch returned zero job documents; refusing to publish an empty sitemap")]
    EmptyFetch,

    /// Filesystem errors while writing output artifacts
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Metadata serialization errors
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Create a configuration error from any message
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Document source specific errors
#[derive(Error, Debug)]
pub enum SourceError {
    /// Non-success responses from the remote store
    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    /// Network-level failures (connect, timeout, TLS)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Malformed page bodies that cannot be decoded
    #[error("Decode error: {message}")]
    Decode { message: String },
}

/// Convenience result type using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = AppError::configuration("missing required environment variable FOO");
        assert_eq!(
            err.to_string(),
            "Configuration error: missing required environment variable FOO"
        );
    }

    #[test]
    fn test_source_error_wraps_into_app_error() {
        let err: AppError = SourceError::Http {
            status: 503,
            message: "service unavailable".to_string(),
        }
        .into();
        assert!(err.to_string().contains("503"));
    }
}
