//! Error types for crewctl
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in crewctl
#[derive(Debug, Error)]
pub enum CrewError {
    /// The research service could not be reached (connect failure or
    /// deadline exceeded). The message names the attempted base URL so a
    /// non-technical caller can act on it.
    #[error(
        "could not reach research service at {base_url}: {message}. \
         Check that the service is running and reachable on the network"
    )]
    Unreachable { base_url: String, message: String },

    /// The service answered with a non-success status
    #[error("research service returned {status}: {body}")]
    Service { status: u16, body: String },

    /// A nominally successful response carried a body the client cannot
    /// decode. Indicates a protocol mismatch, not an operational failure.
    #[error("malformed response from research service: {0}")]
    Malformed(String),

    /// Invalid request parameters (rejected before any network activity)
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// HTTP client construction failed
    #[error("HTTP client error: {0}")]
    Http(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for crewctl operations
pub type Result<T> = std::result::Result<T, CrewError>;
