//! Error types for the injector.

use thiserror::Error;

/// Errors that can occur while configuring the injector or adapting documents.
///
/// Resolution itself never fails: missing files and variables degrade to an
/// empty replacement.
#[derive(Debug, Error)]
pub enum InjectError {
    /// I/O error while loading configuration or resolving the working directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a JSON config file.
    #[error("failed to parse inject config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value was invalid.
    #[error("invalid inject config value: {0}")]
    InvalidValue(String),

    /// A streamed document reached the adapter.
    #[error("{plugin}: {message}")]
    StreamingNotSupported {
        /// Adapter that rejected the document.
        plugin: &'static str,
        /// Fixed description of the failure.
        message: &'static str,
    },
}

/// Result type for injector operations.
pub type Result<T> = std::result::Result<T, InjectError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
