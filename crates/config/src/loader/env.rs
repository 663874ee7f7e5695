//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_API_KEY, ENV_BASE_URL, ENV_CREDENTIAL, ENV_PASSWORD, ENV_SKIP_VERIFY, ENV_TIMEOUT,
    ENV_USERNAME,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(credential) = env_var_or_none(ENV_CREDENTIAL) {
        loader.set_credential(Some(SecretString::new(credential.into())));
    }
    if let Some(token) = env_var_or_none(ENV_API_KEY) {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if let Some(username) = env_var_or_none(ENV_USERNAME) {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none(ENV_PASSWORD) {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
        let skip = parse_bool(&skip).ok_or_else(|| ConfigError::InvalidValue {
            var: ENV_SKIP_VERIFY.to_string(),
            message: "must be true or false".to_string(),
        })?;
        loader.set_skip_verify(Some(skip));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }

    Ok(())
}

/// Same spellings as clap's `BoolishValueParser`, which the CLI flag uses.
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" | "on" => Some(true),
        "false" | "f" | "0" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}
