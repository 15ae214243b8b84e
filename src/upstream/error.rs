//! Error types for upstream store calls

use thiserror::Error;

/// Upstream store error type
///
/// Every outbound failure (transport error or non-2xx status) normalizes to
/// one of these; nothing is retried.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Upstream returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, UpstreamError>;
