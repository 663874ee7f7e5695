//! Shared test utilities for grafana-dash integration tests.
//!
//! Invariants / Assumptions:
//! - Commands built here never read a local `.env` or host `GRAFANA_*` variables.

use assert_cmd::Command;
use std::path::PathBuf;

/// Returns a hermetic `grafana-dash` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Connection and credential env vars are cleared to ensure no leakage from the host.
pub fn grafana_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("grafana-dash");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("GRAFANA_URL")
        .env_remove("GRAFANA_CREDENTIAL")
        .env_remove("GRAFANA_API_KEY")
        .env_remove("GRAFANA_USERNAME")
        .env_remove("GRAFANA_PASSWORD")
        .env_remove("GRAFANA_TIMEOUT")
        .env_remove("GRAFANA_SKIP_VERIFY")
        .env_remove("RUST_LOG");

    cmd
}

/// Hermetic command pointed at `base_url` with a bearer token.
#[allow(dead_code)]
pub fn grafana_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = grafana_cmd();
    cmd.env("GRAFANA_URL", base_url);
    cmd.env("GRAFANA_API_KEY", "test-key");
    cmd
}

/// Repository root, where the bundled `static/model.json` lives.
#[allow(dead_code)]
pub fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

/// Path to the bundled demo dashboard.
#[allow(dead_code)]
pub fn model_path() -> PathBuf {
    workspace_root().join("static").join("model.json")
}

/// Successful create response for `uid`.
#[allow(dead_code)]
pub fn created_body(uid: &str) -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "uid": uid,
        "url": format!("/d/{}/grafana-dash-demo", uid),
        "status": "success",
        "version": 1,
        "slug": "grafana-dash-demo"
    })
}

/// Successful delete response.
#[allow(dead_code)]
pub fn deleted_body() -> serde_json::Value {
    serde_json::json!({
        "title": "Grafana Dash Demo",
        "message": "Dashboard Grafana Dash Demo deleted",
        "id": 7
    })
}
