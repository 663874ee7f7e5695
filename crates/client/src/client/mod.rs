//! Main Grafana API client.
//!
//! This module provides the [`GrafanaClient`] used to create and delete
//! dashboards. It holds the base URL, the authentication strategy, and a
//! reusable HTTP transport; it carries no state between requests.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `dashboards`: Dashboard create/delete methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Credential string parsing (delegated to [`grafana_config::parse_credential`])

pub mod builder;
mod dashboards;

use grafana_config::{AuthStrategy, parse_credential};

use crate::error::{ClientError, Result};

/// Grafana HTTP API client.
///
/// # Creating a Client
///
/// From a base URL and a single credential string:
///
/// ```rust,ignore
/// use grafana_client::GrafanaClient;
///
/// let client = GrafanaClient::new("http://localhost:3001", "admin:prom-operator")?;
/// ```
///
/// Or through the builder, for timeouts and TLS options:
///
/// ```rust,ignore
/// use grafana_client::{AuthStrategy, GrafanaClient};
/// use secrecy::SecretString;
///
/// let client = GrafanaClient::builder()
///     .base_url("https://grafana.example.com".to_string())
///     .auth_strategy(AuthStrategy::ApiToken {
///         token: SecretString::new("glsa_xxx".to_string().into()),
///     })
///     .build()?;
/// ```
#[derive(Debug)]
pub struct GrafanaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth: AuthStrategy,
}

impl GrafanaClient {
    /// Create a client from a base URL and a credential string.
    ///
    /// `credential` is empty (no auth), an API key, or `username:password`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidUrl`] if `base_url` does not parse
    /// - [`ClientError::InvalidCredentialFormat`] if a `:`-separated credential
    ///   does not split into exactly two non-empty parts
    pub fn new(base_url: &str, credential: &str) -> Result<Self> {
        let auth = parse_credential(credential)
            .map_err(|e| ClientError::InvalidCredentialFormat(e.to_string()))?;

        Self::builder()
            .base_url(base_url.to_string())
            .auth_strategy(auth)
            .build()
    }

    /// Create a new client builder.
    pub fn builder() -> builder::GrafanaClientBuilder {
        builder::GrafanaClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the authentication strategy.
    pub fn auth_strategy(&self) -> &AuthStrategy {
        &self.auth
    }
}
