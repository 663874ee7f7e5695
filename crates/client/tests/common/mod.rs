//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Grafana client.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use secrecy::SecretString;

#[allow(unused_imports)]
pub use grafana_client::testing::{fixture_path, load_fixture};

#[allow(unused_imports)]
pub use grafana_client::{AuthStrategy, ClientError, DashboardPayload, GrafanaClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client pointed at the mock server with bearer token auth.
#[allow(dead_code)]
pub fn token_client(server: &MockServer, token: &str) -> GrafanaClient {
    GrafanaClient::builder()
        .base_url(server.uri())
        .auth_strategy(AuthStrategy::ApiToken {
            token: SecretString::new(token.to_string().into()),
        })
        .build()
        .expect("client should build")
}

/// Minimal dashboard payload with the default envelope.
#[allow(dead_code)]
pub fn sample_payload() -> DashboardPayload {
    DashboardPayload::new(serde_json::json!({
        "title": "Node Exporter",
        "panels": [{"id": 1, "datasource": "prometheus"}]
    }))
}
