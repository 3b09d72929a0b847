//! Endpoint and media URL construction on top of a resolved [`BaseUrl`].
//!
//! API endpoints live under `{base}/api`; media is served from the host root.

mod path;

pub use path::with_leading_slash;

use crate::resolver::BaseUrl;

/// Builds `{base}/api{endpoint}` with `endpoint` normalized to one leading `/`.
///
/// # Examples
///
/// - `build_api_url(base, "users")` → `"{base}/api/users"`
/// - `build_api_url(base, "/users")` → `"{base}/api/users"`
pub fn build_api_url(base: &BaseUrl, endpoint: &str) -> String {
    format!("{}/api{}", base.as_str(), with_leading_slash(endpoint))
}

/// Builds a media URL from a stored path.
///
/// Empty paths stay empty, and anything starting with `http` is already
/// absolute and returned as-is. Other paths join onto the bare base, without
/// the `/api` segment.
pub fn build_media_url(base: &BaseUrl, path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    if path.starts_with("http") {
        return path.to_string();
    }
    format!("{}{}", base.as_str(), with_leading_slash(path))
}
