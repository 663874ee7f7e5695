//! Parsing of the single-string credential form.
//!
//! A credential is either empty (no authentication), an API key, or a
//! `username:password` pair. The presence of a `:` selects basic auth.
//!
//! Invariants:
//! - A credential containing `:` must split into exactly two non-empty parts.
//! - Error messages never include the credential itself.

use secrecy::SecretString;
use thiserror::Error;

use crate::types::AuthStrategy;

/// Errors from [`parse_credential`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error(
        "given basic auth format is invalid, expected <username>:<password> (found {parts} part(s), empty part: {has_empty})"
    )]
    InvalidFormat { parts: usize, has_empty: bool },
}

/// Parse a credential string into an [`AuthStrategy`].
///
/// # Examples
///
/// ```
/// use grafana_config::{AuthStrategy, parse_credential};
///
/// assert!(matches!(parse_credential("").unwrap(), AuthStrategy::Anonymous));
/// assert!(matches!(parse_credential("abc123token").unwrap(), AuthStrategy::ApiToken { .. }));
/// assert!(matches!(parse_credential("admin:secret").unwrap(), AuthStrategy::BasicAuth { .. }));
/// assert!(parse_credential("a:b:c").is_err());
/// ```
pub fn parse_credential(credential: &str) -> Result<AuthStrategy, CredentialError> {
    let credential = credential.trim();
    if credential.is_empty() {
        return Ok(AuthStrategy::Anonymous);
    }

    if !credential.contains(':') {
        return Ok(AuthStrategy::ApiToken {
            token: SecretString::new(credential.to_string().into()),
        });
    }

    let parts: Vec<&str> = credential.split(':').collect();
    let has_empty = parts.iter().any(|p| p.is_empty());
    match parts.as_slice() {
        [username, password] if !has_empty => Ok(AuthStrategy::BasicAuth {
            username: (*username).to_string(),
            password: SecretString::new((*password).to_string().into()),
        }),
        _ => Err(CredentialError::InvalidFormat {
            parts: parts.len(),
            has_empty,
        }),
    }
}

impl AuthStrategy {
    /// Same as [`parse_credential`].
    pub fn from_credential(credential: &str) -> Result<Self, CredentialError> {
        parse_credential(credential)
    }
}
