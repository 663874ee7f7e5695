//! REST API endpoint implementations.
//!
//! Each endpoint is a free function over a shared `reqwest::Client`, so the
//! [`crate::GrafanaClient`] methods stay thin and the endpoints can be
//! exercised directly against a mock server.

mod dashboards;
mod request;
pub mod url_encoding;

pub use dashboards::{delete_dashboard_by_uid, set_dashboard};
pub use request::{decode_response, send_request};
