//! Dashboard definition loading.

use std::path::Path;

use crate::error::{ClientError, Result};

/// Read a dashboard definition from disk.
///
/// The content is returned as-is; it is parsed later by the rewriter or
/// [`crate::DashboardPayload::from_json`].
pub fn load_dashboard(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Loading dashboard definition");
    std::fs::read_to_string(path).map_err(|source| ClientError::Io {
        path: path.to_path_buf(),
        source,
    })
}
