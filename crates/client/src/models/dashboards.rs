//! Dashboard models for the Grafana dashboard API.
//!
//! # Invariants
//! - Every response field is optional; Grafana only includes what applies to
//!   the operation (delete responses carry no `uid` or `status`, for example).
//! - Callers that need an identifier go through [`GrafanaResponse::require_uid`].

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Request body for `POST /api/dashboards/db`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    /// The dashboard model, passed through verbatim.
    pub dashboard: serde_json::Value,
    pub folder_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_uid: Option<String>,
    /// Commit message stored in the dashboard version history.
    pub message: String,
    /// Replace an existing dashboard with the same uid or title.
    pub overwrite: bool,
}

impl DashboardPayload {
    /// Wrap a dashboard model with the default envelope:
    /// General folder, empty message, overwrite enabled.
    pub fn new(dashboard: serde_json::Value) -> Self {
        Self {
            dashboard,
            folder_id: grafana_config::constants::DEFAULT_FOLDER_ID,
            folder_uid: None,
            message: String::new(),
            overwrite: true,
        }
    }

    /// Parse a raw dashboard document and wrap it with the default envelope.
    pub fn from_json(raw: &str) -> Result<Self> {
        let dashboard = serde_json::from_str(raw).map_err(ClientError::Parse)?;
        Ok(Self::new(dashboard))
    }

    pub fn with_folder_id(mut self, folder_id: i64) -> Self {
        self.folder_id = folder_id;
        self
    }

    pub fn with_folder_uid(mut self, folder_uid: Option<String>) -> Self {
        self.folder_uid = folder_uid;
        self
    }

    pub fn with_message(mut self, message: String) -> Self {
        self.message = message;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Dashboard title, if the model has one.
    pub fn title(&self) -> Option<&str> {
        self.dashboard.get("title").and_then(|t| t.as_str())
    }
}

/// Response record returned by dashboard create and delete calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrafanaResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl GrafanaResponse {
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn version(&self) -> Option<i64> {
        self.version
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// The dashboard UID, required before the dashboard can be addressed again.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::PreconditionFailure`] if the UID is absent or blank.
    pub fn require_uid(&self) -> Result<&str> {
        self.uid
            .as_deref()
            .filter(|uid| !uid.trim().is_empty())
            .ok_or_else(|| {
                ClientError::PreconditionFailure(
                    "response did not include a dashboard UID".to_string(),
                )
            })
    }
}
