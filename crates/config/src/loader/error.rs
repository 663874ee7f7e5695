//! Error types for configuration loading.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, etc.).
//! - Dotenv and credential errors NEVER include raw secret values.

use std::io::ErrorKind;
use thiserror::Error;

use crate::credential::CredentialError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Invalid credential: {0}")]
    InvalidCredential(#[from] CredentialError),

    #[error("Basic auth requires both a username and a password (missing {missing})")]
    IncompleteBasicAuth { missing: &'static str },

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    /// SAFETY: only the byte index of the parse failure is reported, never line content.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
