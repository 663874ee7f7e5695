//! Request execution and response decoding.
//!
//! Every call is a single attempt: no retries, no backoff. Non-success
//! statuses become [`ClientError::ApiError`] with the server's `message`
//! when the body carries one.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::GrafanaResponse;

/// Longest raw body echoed into an error message when the server sent no `message`.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Send a request once and map non-success statuses to [`ClientError::ApiError`].
pub async fn send_request(builder: RequestBuilder, method: &str, endpoint: &str) -> Result<Response> {
    debug!(method, endpoint, "Sending request");

    let response = builder.send().await?;
    let status = response.status();

    if status.is_success() {
        debug!(method, endpoint, status = status.as_u16(), "Request succeeded");
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<GrafanaResponse>(&body) {
        Ok(GrafanaResponse {
            message: Some(message),
            ..
        }) => message,
        _ => truncate(&body),
    };

    debug!(method, endpoint, status = status.as_u16(), "Request rejected");

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    })
}

/// Read the full response body and decode it as JSON.
pub async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let url = response.url().to_string();
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|source| ClientError::Decode { url, source })
}

fn truncate(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_ERROR_BODY_CHARS {
        trimmed.to_string()
    } else {
        let mut cut: String = trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect();
        cut.push_str("...");
        cut
    }
}
