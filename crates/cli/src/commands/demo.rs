//! Demo command: create a dashboard, wait for the operator, then delete it.
//!
//! The two calls are independent. If the delete step fails the dashboard
//! stays on the server; its UID is logged right after creation so it can be
//! removed with `grafana-dash delete <UID>`.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::args::DashboardArgs;
use crate::commands::{build_client_from_config, prepare_payload, print_response};
use crate::interactive::wait_for_enter;

pub async fn run(config: grafana_config::Config, dashboard: DashboardArgs) -> Result<()> {
    let payload = prepare_payload(&dashboard)?;
    let client = build_client_from_config(&config)?;

    info!(base_url = client.base_url(), file = %dashboard.file.display(), "Creating dashboard");

    let created = client
        .set_dashboard(&payload)
        .await
        .context("Failed to create dashboard")?;
    print_response(&created)?;

    match created.uid() {
        Some(uid) => info!(uid, "Dashboard created"),
        None => warn!("Server response carries no dashboard UID"),
    }

    wait_for_enter("Press Enter to delete the dashboard...")?;

    let uid = created
        .require_uid()
        .context("Cannot delete the dashboard that was just created")?;

    info!(uid, "Deleting dashboard");

    let deleted = client
        .delete_dashboard_by_uid(uid)
        .await
        .with_context(|| format!("Failed to delete dashboard '{}'", uid))?;

    print_response(&deleted)
}
