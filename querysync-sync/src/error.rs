//! Error types for querysync-sync.

use thiserror::Error;

/// A remote update call failed. Never fatal to a batch.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never produced an HTTP response (DNS, connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("query service returned {status}: {body}")]
    Api { status: u16, body: String },

    /// A success response whose body could not be decoded.
    #[error("invalid response from query service: {0}")]
    Decode(String),
}

/// Client configuration problems. Fatal: raised before any file is processed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("query service API key is missing")]
    MissingApiKey,

    #[error("query service API key must be printable ASCII without spaces")]
    InvalidApiKey,

    #[error("query service request timeout must be at least one second")]
    InvalidTimeout,

    #[error("invalid query service base URL '{0}': must start with http:// or https://")]
    InvalidBaseUrl(String),
}
