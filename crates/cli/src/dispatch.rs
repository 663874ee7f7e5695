//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route the parsed subcommand to its handler.
//! - Hand connection configuration to the commands that need it.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::{Result, anyhow};
use grafana_config::Config;

use crate::args::Commands;
use crate::commands;

/// Dispatch a subcommand to its handler.
///
/// `config` is `None` only for offline commands.
pub(crate) async fn run_command(command: Commands, config: Option<Config>) -> Result<()> {
    match command {
        Commands::Rewrite { file, datasource } => commands::rewrite::run(&file, &datasource),
        Commands::Demo { dashboard } => {
            commands::demo::run(require_config(config)?, dashboard).await
        }
        Commands::Create { dashboard } => {
            commands::create::run(require_config(config)?, dashboard).await
        }
        Commands::Delete { uid } => commands::delete::run(require_config(config)?, &uid).await,
    }
}

fn require_config(config: Option<Config>) -> Result<Config> {
    config.ok_or_else(|| anyhow!("Connection configuration was not loaded"))
}
