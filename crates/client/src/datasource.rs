//! Datasource rebinding for exported dashboards.
//!
//! Dashboards exported from one Grafana instance carry that instance's
//! datasource identifier on every panel and template variable. Before the
//! same model is provisioned elsewhere, every binding is pointed at the
//! target instance's datasource.
//!
//! # What this module handles:
//! - Overwriting `datasource` on each object in the top-level `panels` array
//! - Overwriting `datasource` on each `templating.list` variable
//! - Dropping datasource-selector variables (`type == "datasource"`)
//!
//! # Invariants
//! - Sections other than `panels` and `templating.list` pass through untouched,
//!   with their key order preserved.
//! - Malformed entries are dropped, never reported as errors: non-object
//!   panels, non-object variables, and variables without a string `type`.
//! - Rewriting is idempotent for a fixed datasource.

use serde_json::{Map, Value};

use crate::error::{ClientError, Result};

const DATASOURCE_KEY: &str = "datasource";
const DATASOURCE_VARIABLE_TYPE: &str = "datasource";

/// Rewrite a raw dashboard document so every binding points at `datasource`.
///
/// A document without a top-level `panels` array is returned byte-for-byte.
///
/// # Errors
///
/// Returns [`ClientError::Parse`] if `raw` is not valid JSON.
pub fn replace_datasource(raw: &str, datasource: &str) -> Result<String> {
    let document: Value = serde_json::from_str(raw).map_err(ClientError::Parse)?;

    if !has_panels(&document) {
        tracing::debug!("Dashboard has no top-level panels, leaving datasources untouched");
        return Ok(raw.to_string());
    }

    Ok(rewrite_dashboard(document, datasource).to_string())
}

/// Rewrite an already-parsed dashboard document.
///
/// Non-object documents and documents without a `panels` array are returned
/// unchanged.
pub fn rewrite_dashboard(document: Value, datasource: &str) -> Value {
    let mut root = match document {
        Value::Object(root) => root,
        other => return other,
    };

    match root.get_mut("panels") {
        Some(Value::Array(panels)) => {
            let before = panels.len();
            *panels = rebind_panels(std::mem::take(panels), datasource);
            tracing::debug!(
                kept = panels.len(),
                dropped = before - panels.len(),
                "Rebound panel datasources"
            );
        }
        _ => return Value::Object(root),
    }

    if let Some(Value::Object(templating)) = root.get_mut("templating")
        && let Some(Value::Array(list)) = templating.get_mut("list")
    {
        let before = list.len();
        *list = rebind_variables(std::mem::take(list), datasource);
        tracing::debug!(
            kept = list.len(),
            dropped = before - list.len(),
            "Rebound templating variable datasources"
        );
    }

    Value::Object(root)
}

fn has_panels(document: &Value) -> bool {
    matches!(document.get("panels"), Some(Value::Array(_)))
}

fn rebind_panels(panels: Vec<Value>, datasource: &str) -> Vec<Value> {
    panels
        .into_iter()
        .filter_map(|panel| match panel {
            Value::Object(mut fields) => {
                bind(&mut fields, datasource);
                Some(Value::Object(fields))
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_) => {
                None
            }
        })
        .collect()
}

fn rebind_variables(variables: Vec<Value>, datasource: &str) -> Vec<Value> {
    variables
        .into_iter()
        .filter_map(|variable| match variable {
            Value::Object(mut fields) => {
                let keep = match fields.get("type") {
                    Some(Value::String(kind)) => kind != DATASOURCE_VARIABLE_TYPE,
                    // no string type
                    _ => return None,
                };
                bind(&mut fields, datasource);
                keep.then_some(Value::Object(fields))
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_) => {
                None
            }
        })
        .collect()
}

fn bind(fields: &mut Map<String, Value>, datasource: &str) {
    fields.insert(
        DATASOURCE_KEY.to_string(),
        Value::String(datasource.to_string()),
    );
}
