//! Grafana HTTP API client.
//!
//! This crate provides a small, type-safe client for creating and deleting
//! Grafana dashboards, plus the datasource rewriter used to rebind an exported
//! dashboard to another instance's datasource before it is provisioned.

mod auth;
pub mod client;
pub mod datasource;
pub mod endpoints;
pub mod error;
pub mod files;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::GrafanaClient;
pub use client::builder::GrafanaClientBuilder;
pub use datasource::{replace_datasource, rewrite_dashboard};
pub use error::{ClientError, Result};
pub use files::load_dashboard;
pub use grafana_config::AuthStrategy;
pub use models::{DashboardPayload, GrafanaResponse};
