//! Dashboard API methods for [`GrafanaClient`].
//!
//! # What this module does NOT handle:
//! - Low-level dashboard endpoint HTTP calls (in [`crate::endpoints`])

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{DashboardPayload, GrafanaResponse};

impl GrafanaClient {
    /// Create or update a dashboard (`POST /api/dashboards/db`).
    pub async fn set_dashboard(&self, payload: &DashboardPayload) -> Result<GrafanaResponse> {
        endpoints::set_dashboard(&self.http, &self.base_url, &self.auth, payload).await
    }

    /// Delete a dashboard by UID (`DELETE /api/dashboards/uid/{uid}`).
    ///
    /// An empty UID fails with a precondition error before any request is sent.
    pub async fn delete_dashboard_by_uid(&self, uid: &str) -> Result<GrafanaResponse> {
        endpoints::delete_dashboard_by_uid(&self.http, &self.base_url, &self.auth, uid).await
    }
}
