//! Admin Configuration
//!
//! Settings supplied by the hosting page through an optional
//! `<script type="application/json" id="seat-admin-config">` element.
//! The seat map may override the save route with `data-save-url`.

use log::LevelFilter;
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "seat-admin-config";
pub const SAVE_URL_ATTRIBUTE: &str = "data-save-url";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Route receiving the `[{id, x, y}]` batch
    pub save_positions_url: String,
    /// Cookie holding the CSRF token
    pub csrf_cookie: String,
    pub toast_timeout_ms: u32,
    pub log_level: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            save_positions_url: "/api/save-positions/".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            toast_timeout_ms: 4000,
            log_level: "info".to_string(),
        }
    }
}

impl AdminConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Replace the save route with a non-blank page-provided one
    pub fn with_save_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.save_positions_url = url;
        }
        self
    }

    /// Load from the current document, falling back to defaults
    pub fn load() -> Self {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Self::default();
        };

        let config = match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("[CONFIG] Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }),
            None => Self::default(),
        };

        let save_url = document
            .get_element_by_id(crate::editor::MAP_ID)
            .and_then(|map| map.get_attribute(SAVE_URL_ATTRIBUTE));
        config.with_save_url(save_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdminConfig::default();
        assert_eq!(config.save_positions_url, "/api/save-positions/");
        assert_eq!(config.csrf_cookie, "csrftoken");
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_json() {
        let config = AdminConfig::from_json(r#"{"save_positions_url": "/admin/seats/positions/", "log_level": "debug"}"#).unwrap();
        assert_eq!(config.save_positions_url, "/admin/seats/positions/");
        assert_eq!(config.csrf_cookie, "csrftoken");
        assert_eq!(config.toast_timeout_ms, 4000);
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(AdminConfig::from_json("{save_positions_url:").is_err());
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = AdminConfig {
            log_level: "chatty".into(),
            ..AdminConfig::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_save_url_override() {
        let config = AdminConfig::default().with_save_url(Some(" /api/v2/positions/ ".into()));
        assert_eq!(config.save_positions_url, "/api/v2/positions/");

        let config = AdminConfig::default().with_save_url(Some("   ".into()));
        assert_eq!(config.save_positions_url, "/api/save-positions/");

        let config = AdminConfig::default().with_save_url(None);
        assert_eq!(config.save_positions_url, "/api/save-positions/");
    }
}
