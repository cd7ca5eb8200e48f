//! Runtime configuration of the admin client.
//!
//! Defaults target a same-origin backend with resources under `/api`.
//! A JSON override can be stored in `localStorage["hotel_admin.config"]`,
//! e.g. `{"base_url": "http://localhost:8080", "resource_prefix": ""}`.

use serde::{Deserialize, Serialize};
use web_sys::window;

const CONFIG_STORAGE_KEY: &str = "hotel_admin.config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme + host (+ port) of the backend; empty means same origin.
    pub base_url: String,
    /// Prefix for hotel and room resources: `"/api"` or `""` depending on deployment.
    pub resource_prefix: String,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            resource_prefix: "/api".to_string(),
            log_level: "debug".to_string(),
        }
    }
}

impl ApiConfig {
    /// Defaults merged with the localStorage override, if any.
    pub fn load() -> Self {
        match stored_override() {
            Some(raw) => Self::from_json(&raw),
            None => Self::default(),
        }
    }

    /// Parse an override document; malformed input falls back to defaults.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<ApiConfig>(raw) {
            Ok(cfg) => cfg.normalized(),
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", CONFIG_STORAGE_KEY, e);
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }

    fn normalized(mut self) -> Self {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        let prefix = self.resource_prefix.trim().trim_end_matches('/');
        self.resource_prefix = if prefix.is_empty() || prefix.starts_with('/') {
            prefix.to_string()
        } else {
            format!("/{}", prefix)
        };
        self
    }
}

fn stored_override() -> Option<String> {
    window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ApiConfig::default();
        assert_eq!(cfg.base_url, "");
        assert_eq!(cfg.resource_prefix, "/api");
        assert_eq!(cfg.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_override_is_normalized() {
        let cfg = ApiConfig::from_json(
            r#"{"base_url": "http://localhost:8080/", "resource_prefix": "v1/", "log_level": "warn"}"#,
        );
        assert_eq!(cfg.base_url, "http://localhost:8080");
        assert_eq!(cfg.resource_prefix, "/v1");
        assert_eq!(cfg.log_level(), log::Level::Warn);
    }

    #[test]
    fn test_partial_and_malformed_override() {
        let cfg = ApiConfig::from_json(r#"{"resource_prefix": ""}"#);
        assert_eq!(cfg.resource_prefix, "");
        assert_eq!(cfg.base_url, "");

        assert_eq!(ApiConfig::from_json("{not json"), ApiConfig::default());
    }
}
