//! Configuration management for Grafana Dash.
//!
//! This crate provides types and loaders for managing Grafana connection
//! configuration from `.env` files, environment variables, and explicit
//! overrides supplied by the CLI.

pub mod constants;
pub mod credential;
mod loader;
pub mod types;

pub use credential::{CredentialError, parse_credential};
pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};
