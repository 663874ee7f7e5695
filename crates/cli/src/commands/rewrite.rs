//! Rewrite command: rebind a dashboard file to a datasource without contacting a server.

use anyhow::{Context, Result};
use grafana_client::{load_dashboard, replace_datasource};
use std::path::Path;

pub fn run(file: &Path, datasource: &str) -> Result<()> {
    let raw = load_dashboard(file)?;
    let rewritten = replace_datasource(&raw, datasource)
        .with_context(|| format!("Failed to rewrite {}", file.display()))?;

    println!("{}", rewritten);
    Ok(())
}
