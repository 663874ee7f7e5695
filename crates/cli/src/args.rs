//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Bind global connection options to their `GRAFANA_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve the final configuration (see `main()`).

use clap::{Args, Parser, Subcommand};
use grafana_config::constants::{
    DEFAULT_DASHBOARD_PATH, ENV_API_KEY, ENV_BASE_URL, ENV_CREDENTIAL, ENV_PASSWORD,
    ENV_SKIP_VERIFY, ENV_TIMEOUT, ENV_USERNAME,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grafana-dash")]
#[command(about = "Create, then delete, a Grafana dashboard through the HTTP API", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  grafana-dash\n  grafana-dash -c admin:prom-operator demo -d Prometheus\n  grafana-dash -a $GRAFANA_API_KEY create -f dashboards/nodes.json\n  grafana-dash delete nErXDvCkzz\n  grafana-dash rewrite -f static/model.json -d Thanos > rebound.json\n"
)]
pub struct Cli {
    /// Base URL of the Grafana server (e.g., http://localhost:3001)
    #[arg(short, long, global = true, env = ENV_BASE_URL)]
    pub base_url: Option<String>,

    /// Credential: an API key, or `username:password` for basic auth
    #[arg(short, long, global = true, env = ENV_CREDENTIAL, hide_env_values = true)]
    pub credential: Option<String>,

    /// API key or service account token (preferred over other credentials)
    #[arg(short, long, global = true, env = ENV_API_KEY, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Username for basic authentication
    #[arg(short, long, global = true, env = ENV_USERNAME)]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(short, long, global = true, env = ENV_PASSWORD, hide_env_values = true)]
    pub password: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = ENV_TIMEOUT)]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(
        long,
        global = true,
        env = ENV_SKIP_VERIFY,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub skip_verify: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The subcommand to run; `demo` with default arguments when none was given.
    pub fn command_or_default(&mut self) -> Commands {
        self.command.take().unwrap_or_else(|| Commands::Demo {
            dashboard: DashboardArgs::default(),
        })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create the dashboard, wait for Enter, then delete it
    Demo {
        #[command(flatten)]
        dashboard: DashboardArgs,
    },

    /// Create or update a dashboard and print the server response
    Create {
        #[command(flatten)]
        dashboard: DashboardArgs,
    },

    /// Delete a dashboard by UID
    Delete {
        /// UID of the dashboard to delete
        uid: String,
    },

    /// Rebind a dashboard file to another datasource and print it (offline)
    Rewrite {
        /// Dashboard JSON file to read
        #[arg(short, long, default_value = DEFAULT_DASHBOARD_PATH)]
        file: PathBuf,

        /// Datasource identifier to bind panels and variables to
        #[arg(short, long)]
        datasource: String,
    },
}

impl Commands {
    /// Whether this command talks to a Grafana server.
    pub fn needs_connection(&self) -> bool {
        !matches!(self, Commands::Rewrite { .. })
    }
}

/// Options shared by the commands that upload a dashboard.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DashboardArgs {
    /// Dashboard JSON file to upload
    #[arg(short, long, default_value = DEFAULT_DASHBOARD_PATH)]
    pub file: PathBuf,

    /// Rebind every panel and variable to this datasource before uploading
    #[arg(short, long)]
    pub datasource: Option<String>,

    /// Target folder id (0 is the General folder)
    #[arg(long, default_value_t = grafana_config::constants::DEFAULT_FOLDER_ID)]
    pub folder_id: i64,

    /// Target folder UID (takes precedence over --folder-id on the server)
    #[arg(long)]
    pub folder_uid: Option<String>,

    /// Commit message stored with the dashboard version
    #[arg(short, long, default_value = "")]
    pub message: String,

    /// Fail instead of replacing an existing dashboard with the same UID or title
    #[arg(long)]
    pub no_overwrite: bool,
}

impl Default for DashboardArgs {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_DASHBOARD_PATH),
            datasource: None,
            folder_id: grafana_config::constants::DEFAULT_FOLDER_ID,
            folder_uid: None,
            message: String::new(),
            no_overwrite: false,
        }
    }
}
