//! Percent-encoding for identifiers interpolated into API paths.
//!
//! Dashboard UIDs are user-controlled. Without encoding, a `/` would create a
//! nested path and `?` or `#` would cut the path short.
//!
//! Dot segments (`.`, `..`) cannot be made safe by encoding, since URL
//! parsing treats `%2E` as a dot too. Callers reject them before building a
//! path; see [`is_dot_segment`].
//!
//! ```
//! use grafana_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("cIBgcSjkk"), "cIBgcSjkk");
//! assert_eq!(encode_path_segment("team/dash"), "team%2Fdash");
//! assert!(grafana_client::endpoints::url_encoding::is_dot_segment(".."));
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in a single URL path segment
/// (RFC 3986 section 3.3 plus characters with special meaning in URLs).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Whether `segment` would be collapsed by URL path normalization.
pub fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}
