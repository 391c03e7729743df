//! User settings stored as settings.json in the app data directory

use crate::types::ThemeMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Saved theme choice. Absent until the user toggles for the first
    /// time, in which case the OS hint decides the startup mode.
    pub theme: Option<ThemeMode>,

    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: None,
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path());
        assert!(settings.theme.is_none());
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{not json").unwrap();
        let settings = Settings::load(dir.path());
        assert!(settings.theme.is_none());
    }

    #[test]
    fn theme_round_trips_as_string() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            theme: Some(ThemeMode::Dark),
            ..Default::default()
        };
        settings.save(dir.path());

        let raw = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
        assert!(raw.contains("\"dark\""));

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.theme, Some(ThemeMode::Dark));
    }
}
