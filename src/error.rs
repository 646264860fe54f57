//! Error types for the tasks backend
//!
//! Mirrors the taxonomy the server exposes: transport failures, API-level
//! rejections, malformed payloads, and missing credentials.

use thiserror::Error;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors from the remote tasks backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure (connection, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No access token configured
    #[error("no access token configured (set GTASKS_ACCESS_TOKEN)")]
    MissingAuth,

    /// Backend base URL is not a valid URL
    #[error("invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
