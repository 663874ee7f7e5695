//! Centralized constants for the Grafana Dash workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default Grafana server URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Dashboard Defaults
// =============================================================================

/// Default location of the dashboard definition, relative to the working directory.
pub const DEFAULT_DASHBOARD_PATH: &str = "static/model.json";

/// Default folder id for created dashboards (0 is the General folder).
pub const DEFAULT_FOLDER_ID: i64 = 0;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_BASE_URL: &str = "GRAFANA_URL";
pub const ENV_CREDENTIAL: &str = "GRAFANA_CREDENTIAL";
pub const ENV_API_KEY: &str = "GRAFANA_API_KEY";
pub const ENV_USERNAME: &str = "GRAFANA_USERNAME";
pub const ENV_PASSWORD: &str = "GRAFANA_PASSWORD";
pub const ENV_TIMEOUT: &str = "GRAFANA_TIMEOUT";
pub const ENV_SKIP_VERIFY: &str = "GRAFANA_SKIP_VERIFY";
