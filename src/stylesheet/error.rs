//! Error types for the stylesheet resolver
//!
//! Resolution itself never fails. Errors only come from building a
//! configuration or decoding requests.

use thiserror::Error;

/// Main error type for resolver setup
#[derive(Error, Debug)]
pub enum ResolverError {
    /// JSON parsing/serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO errors when reading requests
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Minimum fuzzy score outside of [0, 1]
    #[error("Minimum fuzzy score must be within [0, 1], got {score}")]
    InvalidMinScore { score: f64 },

    /// A default unit option is empty
    #[error("Option '{option}' must not be empty")]
    EmptyUnit { option: &'static str },

    /// Unit alias with an empty name or target
    #[error("Invalid unit alias '{alias}' -> '{unit}'")]
    InvalidUnitAlias { alias: String, unit: String },
}

/// Result type alias for resolver setup
pub type ResolverResult<T> = Result<T, ResolverError>;

impl From<serde_json::Error> for ResolverError {
    fn from(err: serde_json::Error) -> Self {
        ResolverError::Json {
            source: err,
            message: "JSON operation failed".to_string(),
        }
    }
}

/// Helper trait for converting JSON errors with context
pub trait JsonContext<T> {
    fn with_json_context(self, message: &str) -> ResolverResult<T>;
}

impl<T> JsonContext<T> for Result<T, serde_json::Error> {
    fn with_json_context(self, message: &str) -> ResolverResult<T> {
        self.map_err(|e| ResolverError::Json {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Helper trait for converting IO errors with context
pub trait IoContext<T> {
    fn with_io_context(self, message: &str) -> ResolverResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, message: &str) -> ResolverResult<T> {
        self.map_err(|e| ResolverError::Io {
            message: message.to_string(),
            source: e,
        })
    }
}
