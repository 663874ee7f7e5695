//! Configuration types for Grafana Dash.

use secrecy::SecretString;
use std::time::Duration;

/// Strategy for authenticating with Grafana.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// No `Authorization` header is sent.
    Anonymous,
    /// API key or service account token, sent as a bearer token.
    ApiToken { token: SecretString },
    /// HTTP basic authentication.
    BasicAuth {
        username: String,
        password: SecretString,
    },
}

impl AuthStrategy {
    /// Short label for log lines. Never includes secret material.
    pub fn mode_name(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::ApiToken { .. } => "bearer-token",
            Self::BasicAuth { .. } => "basic-auth",
        }
    }
}

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    pub strategy: AuthStrategy,
}

/// Connection configuration for the Grafana server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Grafana server (e.g., http://localhost:3000)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a new config with the given base URL and API token.
    pub fn with_api_token(base_url: String, token: SecretString) -> Self {
        Self::with_strategy(base_url, AuthStrategy::ApiToken { token })
    }

    /// Create a new config with the given base URL and basic auth credentials.
    pub fn with_basic_auth(base_url: String, username: String, password: SecretString) -> Self {
        Self::with_strategy(base_url, AuthStrategy::BasicAuth { username, password })
    }

    /// Create a new config that sends no credentials.
    pub fn anonymous(base_url: String) -> Self {
        Self::with_strategy(base_url, AuthStrategy::Anonymous)
    }

    fn with_strategy(base_url: String, strategy: AuthStrategy) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                skip_verify: false,
                timeout: None,
            },
            auth: AuthConfig { strategy },
        }
    }
}
