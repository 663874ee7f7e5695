//! Client builder for constructing [`GrafanaClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the base URL and normalizing trailing slashes
//! - Configuring the underlying HTTP client (timeout, redirects, TLS verification)
//!
//! # Invariants
//! - `base_url` is required; `auth_strategy` defaults to `Anonymous`
//! - Without an explicit timeout the transport default applies
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use grafana_config::{AuthStrategy, Config, constants::DEFAULT_MAX_REDIRECTS};

use crate::client::GrafanaClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`GrafanaClient`].
#[derive(Debug, Default)]
pub struct GrafanaClientBuilder {
    base_url: Option<String>,
    auth_strategy: Option<AuthStrategy>,
    skip_verify: bool,
    timeout: Option<Duration>,
}

impl GrafanaClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Grafana server, e.g. `http://localhost:3000`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the authentication strategy.
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against development servers with self-signed certificates.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Bound each request by `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create a client builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.auth_strategy = Some(config.auth.strategy.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    /// Build the [`GrafanaClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or does not parse.
    /// Returns [`ClientError::Transport`] if the HTTP client fails to build.
    pub fn build(self) -> Result<GrafanaClient> {
        let raw = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;

        let parsed = url::Url::parse(raw.trim())
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "{}: cannot be used as a base URL",
                raw
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ClientError::InvalidUrl(format!(
                "{}: must not contain a query string or fragment",
                raw
            )));
        }
        let base_url = Self::normalize_base_url(parsed.as_str());

        let auth = self.auth_strategy.unwrap_or(AuthStrategy::Anonymous);

        let mut http_builder =
            reqwest::Client::builder().redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }

        if self.skip_verify {
            if parsed.scheme() == "https" {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        tracing::debug!(base_url = %base_url, auth = auth.mode_name(), "Grafana client ready");

        Ok(GrafanaClient {
            http,
            base_url,
            auth,
        })
    }
}
