//! User settings stored as settings.json in the app data directory

use crate::api::ApiConfig;
use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Search endpoint
    pub base_url: String,
    pub result_limit: u32,
    pub insecure_transport: bool,
    pub timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            base_url: API_BASE_URL.to_string(),
            result_limit: DEFAULT_RESULT_LIMIT,
            insecure_transport: false,
            timeout_secs: None,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Connection settings, with the base URL environment override applied.
    pub fn api_config(&self) -> ApiConfig {
        self.api_config_with(std::env::var(BASE_URL_ENV).ok())
    }

    fn api_config_with(&self, base_url_override: Option<String>) -> ApiConfig {
        let base_url = match base_url_override.filter(|u| !u.trim().is_empty()) {
            Some(url) => {
                info!(base_url = %url, "Base URL overridden from environment");
                url
            }
            None => self.base_url.clone(),
        };
        ApiConfig {
            base_url,
            limit: self.result_limit,
            insecure_transport: self.insecure_transport,
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(640.0),
            window_h: Some(480.0),
            result_limit: 10,
            timeout_secs: Some(15),
            ..Settings::default()
        };
        settings.save(dir.path());
        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"insecure_transport":true}"#,
        )
        .unwrap();
        let settings = Settings::load(dir.path());
        assert!(settings.insecure_transport);
        assert_eq!(settings.result_limit, 5);
        assert_eq!(settings.base_url, "https://api.quotable.io/");
    }

    #[test]
    fn api_config_defaults_are_secure() {
        let config = Settings::default().api_config_with(None);
        assert_eq!(config, ApiConfig::default());
        assert!(!config.insecure_transport);
    }

    #[test]
    fn environment_override_wins_unless_blank() {
        let settings = Settings::default();
        let config = settings.api_config_with(Some("http://localhost:9000/".into()));
        assert_eq!(config.base_url, "http://localhost:9000/");

        let config = settings.api_config_with(Some("  ".into()));
        assert_eq!(config.base_url, settings.base_url);
    }
}
