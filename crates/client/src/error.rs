//! Error types for the Grafana client.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while loading, rewriting, or sending dashboards.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Base URL missing or not parseable.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Credential string could not be split into `<username>:<password>`.
    #[error("Invalid credential format: {0}")]
    InvalidCredentialFormat(String),

    /// Dashboard document is not valid JSON.
    #[error("Failed to parse dashboard JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// Network or transport failure (connect, send, body read).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not valid JSON of the expected shape.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A required value was missing before a request could be issued.
    #[error("Precondition failed: {0}")]
    PreconditionFailure(String),

    /// Non-success HTTP status from Grafana.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Dashboard file could not be read.
    #[error("Failed to read dashboard file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Check if the server rejected the credentials or their permissions (401 or 403).
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::ApiError { status: 401 | 403, .. })
    }

    /// Check if the server refused the operation for the given credentials.
    pub fn is_permission_error(&self) -> bool {
        matches!(self, Self::ApiError { status: 403, .. })
    }

    /// Check if the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }
}
