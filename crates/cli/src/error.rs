//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` and `ConfigError` to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-6 are reserved for specific error categories.

use grafana_client::ClientError;
use grafana_config::ConfigError;

/// Structured exit codes for grafana-dash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - HTTP 401.
    ///
    /// Scripts should check the API key or basic auth credentials.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, TLS, or DNS failure.
    ConnectionError = 3,

    /// Resource not found - HTTP 404, usually an unknown dashboard UID.
    NotFound = 4,

    /// Validation error - bad input before or instead of a request.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - HTTP 403.
    PermissionDenied = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            // 403 is also an auth error, so permission is checked first
            ClientError::ApiError { .. } if err.is_permission_error() => ExitCode::PermissionDenied,
            ClientError::ApiError { .. } if err.is_auth_error() => ExitCode::AuthenticationFailed,
            ClientError::ApiError { .. } if err.is_not_found() => ExitCode::NotFound,
            ClientError::ApiError { .. } => ExitCode::GeneralError,

            ClientError::Transport(_) => ExitCode::ConnectionError,

            ClientError::InvalidUrl(_)
            | ClientError::InvalidCredentialFormat(_)
            | ClientError::Parse(_)
            | ClientError::PreconditionFailure(_) => ExitCode::ValidationError,

            ClientError::Decode { .. } | ClientError::Io { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ValidationError;
            }
        }

        ExitCode::GeneralError
    }
}
