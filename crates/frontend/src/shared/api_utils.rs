//! API utilities for frontend-backend communication
//!
//! URL builders for every endpoint the client talks to. Hotel and room
//! resources follow the configurable `resource_prefix`; facility and support
//! endpoints always live under `/api`.

use crate::shared::config::ApiConfig;

/// Build a URL for a hotel/room resource path such as `/hotels/42`
///
/// # Example
/// ```rust,ignore
/// let url = resource_url(&cfg, "/hotels");  // "/api/hotels" with default config
/// ```
pub fn resource_url(cfg: &ApiConfig, path: &str) -> String {
    format!("{}{}{}", cfg.base_url, cfg.resource_prefix, path)
}

/// Build a URL for an endpoint that is always under `/api`
pub fn api_url(cfg: &ApiConfig, path: &str) -> String {
    format!("{}/api{}", cfg.base_url, path)
}

/// Percent-encode an opaque id for use as a path segment
pub fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_url_follows_prefix() {
        let mut cfg = ApiConfig::default();
        assert_eq!(resource_url(&cfg, "/hotels"), "/api/hotels");

        cfg.resource_prefix = String::new();
        cfg.base_url = "http://localhost:8080".into();
        assert_eq!(resource_url(&cfg, "/rooms/hotel/7"), "http://localhost:8080/rooms/hotel/7");
        assert_eq!(api_url(&cfg, "/facilities"), "http://localhost:8080/api/facilities");
    }

    #[test]
    fn test_segment_encodes_reserved_chars() {
        assert_eq!(segment("a b/c"), "a%20b%2Fc");
        assert_eq!(segment("65f1c0"), "65f1c0");
    }
}
