//! Delete command implementation.

use anyhow::{Context, Result};
use tracing::info;

use crate::commands::{build_client_from_config, print_response};

pub async fn run(config: grafana_config::Config, uid: &str) -> Result<()> {
    let client = build_client_from_config(&config)?;

    info!(base_url = client.base_url(), uid, "Deleting dashboard");

    let response = client
        .delete_dashboard_by_uid(uid)
        .await
        .with_context(|| format!("Failed to delete dashboard '{}'", uid))?;

    print_response(&response)
}
