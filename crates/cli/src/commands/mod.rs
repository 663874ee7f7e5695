//! CLI command implementations.

pub mod create;
pub mod delete;
pub mod demo;
pub mod rewrite;

use anyhow::{Context, Result};
use grafana_client::{DashboardPayload, GrafanaClient, GrafanaResponse, load_dashboard, replace_datasource};
use grafana_config::Config;

use crate::args::DashboardArgs;

/// Build a Grafana client from the resolved configuration.
pub fn build_client_from_config(config: &Config) -> Result<GrafanaClient> {
    let client = GrafanaClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build Grafana client")?;
    Ok(client)
}

/// Load the dashboard file, rebind its datasource if asked, and wrap it in the
/// upload envelope.
pub fn prepare_payload(args: &DashboardArgs) -> Result<DashboardPayload> {
    let raw = load_dashboard(&args.file)?;

    let raw = match args.datasource.as_deref() {
        Some(datasource) => {
            tracing::info!(datasource, "Rebinding dashboard datasource");
            replace_datasource(&raw, datasource)
                .with_context(|| format!("Failed to rewrite {}", args.file.display()))?
        }
        None => raw,
    };

    let payload = DashboardPayload::from_json(&raw)
        .with_context(|| format!("Failed to load {}", args.file.display()))?
        .with_folder_id(args.folder_id)
        .with_folder_uid(args.folder_uid.clone())
        .with_message(args.message.clone())
        .with_overwrite(!args.no_overwrite);

    Ok(payload)
}

/// Print a server response as pretty JSON on stdout.
pub fn print_response(response: &GrafanaResponse) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}
