//! Game settings
//!
//! Loaded from `remember.json` in the working directory (native) or from
//! LocalStorage (web). Every field is optional; missing fields use the
//! built-in constants.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::GameConfig;

/// Largest supported number of buttons
pub const MAX_BUTTONS: usize = 16;

/// Errors reading a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of buttons in the row
    pub button_count: usize,
    /// Seconds a button stays lit
    pub show_time: f32,
    /// Seconds of darkness after each lit period
    pub wait_time: f32,
    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,
    /// Initial window size (native only)
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            button_count: BUTTON_COUNT,
            show_time: SHOW_TIME,
            wait_time: WAIT_TIME,
            seed: None,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
        }
    }
}

impl Settings {
    /// Default settings file name (native)
    pub const FILE_NAME: &'static str = "remember.json";

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "remember_settings";

    /// Parse settings from JSON, clamping out-of-range values
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.validated())
    }

    /// Read settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Clamp values into ranges the game can run with
    pub fn validated(mut self) -> Self {
        self.button_count = self.button_count.clamp(1, MAX_BUTTONS);
        if !self.show_time.is_finite() || self.show_time <= 0.0 {
            log::warn!("show_time {} invalid, using {}", self.show_time, SHOW_TIME);
            self.show_time = SHOW_TIME;
        }
        if !self.wait_time.is_finite() || self.wait_time < 0.0 {
            log::warn!("wait_time {} invalid, using {}", self.wait_time, WAIT_TIME);
            self.wait_time = WAIT_TIME;
        }
        self.window_width = self.window_width.max(1);
        self.window_height = self.window_height.max(1);
        self
    }

    /// Simulation parameters derived from these settings
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            button_count: self.button_count,
            show_time: self.show_time,
            wait_time: self.wait_time,
        }
    }

    /// Load settings from `remember.json`, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let path = Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("No {} found, using default settings", Self::FILE_NAME);
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.button_count, 4);
        assert_eq!(settings.show_time, 0.5);
        assert_eq!(settings.wait_time, 0.2);
        assert_eq!(settings.game_config(), GameConfig::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "button_count": 6, "seed": 42 }"#).unwrap();
        assert_eq!(settings.button_count, 6);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.show_time, SHOW_TIME);
        assert_eq!(settings.window_width, WINDOW_WIDTH);
    }

    #[test]
    fn test_invalid_values_clamped() {
        let settings = Settings::from_json(
            r#"{ "button_count": 0, "show_time": -1.0, "wait_time": -0.5, "window_height": 0 }"#,
        )
        .unwrap();
        assert_eq!(settings.button_count, 1);
        assert_eq!(settings.show_time, SHOW_TIME);
        assert_eq!(settings.wait_time, WAIT_TIME);
        assert_eq!(settings.window_height, 1);

        let settings = Settings::from_json(r#"{ "button_count": 100 }"#).unwrap();
        assert_eq!(settings.button_count, MAX_BUTTONS);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = Settings::from_json("{ button_count: ").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from(Path::new("does/not/exist/remember.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_serialize_roundtrip_keeps_seed() {
        let settings = Settings {
            seed: Some(7),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
