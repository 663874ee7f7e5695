//! grafana-dash - create, then delete, a Grafana dashboard from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve connection configuration for the commands that talk to Grafana.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - HTTP calls or the datasource rewrite (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod interactive;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use grafana_config::{Config, ConfigError, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ValidationError.as_i32());
    }

    let mut cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = cli.command_or_default();

    let config = if command.needs_connection() {
        match build_config(&cli) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Failed to build configuration: {:#}", e);
                std::process::exit(ExitCode::ValidationError.as_i32());
            }
        }
    } else {
        None
    };

    let exit_code = match run_command(command, config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Layer environment variables and CLI overrides into a [`Config`].
fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(url) = non_blank(&cli.base_url) {
        loader = loader.with_base_url(url);
    }
    if let Some(credential) = non_blank(&cli.credential) {
        loader = loader.with_credential(credential);
    }
    if let Some(key) = non_blank(&cli.api_key) {
        loader = loader.with_api_token(key);
    }
    if let Some(username) = non_blank(&cli.username) {
        loader = loader.with_username(username);
    }
    if let Some(password) = non_blank(&cli.password) {
        loader = loader.with_password(password);
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    loader.build()
}

/// Blank flag or env values count as unset, matching the loader's env handling.
fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
