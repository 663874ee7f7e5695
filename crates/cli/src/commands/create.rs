//! Create command implementation.

use anyhow::{Context, Result};
use tracing::info;

use crate::args::DashboardArgs;
use crate::commands::{build_client_from_config, prepare_payload, print_response};

pub async fn run(config: grafana_config::Config, dashboard: DashboardArgs) -> Result<()> {
    let payload = prepare_payload(&dashboard)?;
    let client = build_client_from_config(&config)?;

    info!(base_url = client.base_url(), file = %dashboard.file.display(), "Creating dashboard");

    let response = client
        .set_dashboard(&payload)
        .await
        .context("Failed to create dashboard")?;

    if let Some(uid) = response.uid() {
        info!(uid, "Dashboard created");
    }

    print_response(&response)
}
