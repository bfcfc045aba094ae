//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs.

/// Join the API base URL and a resource path
///
/// Tolerates a trailing slash on the base and a missing leading slash on the path.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("http://localhost:8080/api", "/users/42");
/// assert_eq!(url, "http://localhost:8080/api/users/42");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
