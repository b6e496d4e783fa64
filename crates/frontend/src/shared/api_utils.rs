//! API utilities for frontend-backend communication
//!
//! The service address is fixed in the embedded config; these helpers only
//! build full URLs from it.

/// Join a base URL and an API path with exactly one slash between them
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::join_url;
/// assert_eq!(join_url("http://127.0.0.1:8000/", "/api/query"), "http://127.0.0.1:8000/api/query");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h:1", "/a"), "http://h:1/a");
        assert_eq!(join_url("http://h:1/", "/a"), "http://h:1/a");
        assert_eq!(join_url("http://h:1", "a"), "http://h:1/a");
        assert_eq!(join_url("http://h:1/", ""), "http://h:1");
    }

    #[test]
    fn test_trailing_slash_in_path_kept() {
        assert_eq!(join_url("http://h:1", "/web/"), "http://h:1/web/");
    }
}
