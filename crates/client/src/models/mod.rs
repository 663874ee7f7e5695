//! Data models for Grafana dashboard API requests and responses.

pub mod dashboards;

pub use dashboards::{DashboardPayload, GrafanaResponse};
