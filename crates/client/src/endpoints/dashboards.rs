//! Dashboard management endpoints.

use grafana_config::AuthStrategy;
use reqwest::Client;

use crate::auth::apply_auth;
use crate::endpoints::url_encoding::{encode_path_segment, is_dot_segment};
use crate::endpoints::{decode_response, send_request};
use crate::error::{ClientError, Result};
use crate::models::{DashboardPayload, GrafanaResponse};

const DASHBOARDS_DB_PATH: &str = "/api/dashboards/db";
const DASHBOARDS_UID_PATH: &str = "/api/dashboards/uid";

/// Create or update a dashboard.
pub async fn set_dashboard(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    payload: &DashboardPayload,
) -> Result<GrafanaResponse> {
    let url = format!("{}{}", base_url, DASHBOARDS_DB_PATH);

    let builder = apply_auth(client.post(&url), auth).json(payload);
    let response = send_request(builder, "POST", DASHBOARDS_DB_PATH).await?;

    decode_response(response).await
}

/// Delete a dashboard by UID.
///
/// # Errors
///
/// Returns [`ClientError::PreconditionFailure`] without issuing a request if
/// `uid` is empty, whitespace-only, or a dot segment.
pub async fn delete_dashboard_by_uid(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    uid: &str,
) -> Result<GrafanaResponse> {
    if uid.trim().is_empty() {
        return Err(ClientError::PreconditionFailure(
            "dashboard UID must not be empty".to_string(),
        ));
    }
    if is_dot_segment(uid) {
        return Err(ClientError::PreconditionFailure(format!(
            "'{}' is not a valid dashboard UID",
            uid
        )));
    }

    let endpoint = format!("{}/{}", DASHBOARDS_UID_PATH, encode_path_segment(uid));
    let url = format!("{}{}", base_url, endpoint);

    let builder = apply_auth(client.delete(&url), auth);
    let response = send_request(builder, "DELETE", &endpoint).await?;

    decode_response(response).await
}
