//! API utilities for frontend-backend communication

use super::config::config;

/// Base URL for API requests, without trailing slash
///
/// Comes from configuration: `/api` by default, so requests go through
/// the dev-server proxy.
pub fn api_base() -> String {
    config().api.base_url.trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/productos/12");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
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
    fn test_api_url_uses_configured_base() {
        assert_eq!(api_url("/productos"), "/api/productos");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://localhost:4000/api", "/ventas/3"), "http://localhost:4000/api/ventas/3");
        assert_eq!(join_url("/api", "ordenes"), "/api/ordenes");
    }
}
