//! Configuration loading and persistence

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::pacing::{clamp_delay, DEFAULT_CELEBRATION_MS, DEFAULT_DELAY_MS};

/// Grid file read when nothing else is configured
pub const DEFAULT_INPUT_PATH: &str = "input.txt";

/// Colour scheme for the terminal UI
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ThemeName {
    #[default]
    Default,
    Ocean,
    Monochrome,
}

impl ThemeName {
    /// The theme after this one, wrapping around
    pub fn next(self) -> Self {
        match self {
            ThemeName::Default => ThemeName::Ocean,
            ThemeName::Ocean => ThemeName::Monochrome,
            ThemeName::Monochrome => ThemeName::Default,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeName::Default => "Default",
            ThemeName::Ocean => "Ocean",
            ThemeName::Monochrome => "Monochrome",
        }
    }
}

/// Configuration for xmas-scan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Grid file, relative paths resolve against the working directory
    pub input_path: PathBuf,
    /// Initial pacing delay in milliseconds
    pub delay_ms: u64,
    /// Pause after each match in milliseconds
    pub celebration_ms: u64,
    /// UI colour scheme
    pub theme: ThemeName,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            delay_ms: DEFAULT_DELAY_MS,
            celebration_ms: DEFAULT_CELEBRATION_MS,
            theme: ThemeName::Default,
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("xmas-scan").join("config.json"))
    }

    /// Load config from disk, falling back to defaults if missing or invalid
    pub fn load() -> Self {
        Self::default_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_json(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "ignoring config file: {}", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Parse config JSON, clamping the delay into the slider range
    pub fn from_json(content: &str) -> Result<Self> {
        let mut config: Config =
            serde_json::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.delay_ms = clamp_delay(config.delay_ms);
        Ok(config)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input_path, PathBuf::from("input.txt"));
        assert_eq!(config.delay_ms, 50);
        assert_eq!(config.celebration_ms, 600);
        assert_eq!(config.theme, ThemeName::Default);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json(r#"{ "delay_ms": 120 }"#).unwrap();
        assert_eq!(config.delay_ms, 120);
        assert_eq!(config.celebration_ms, 600);
    }

    #[test]
    fn test_delay_is_clamped() {
        let config = Config::from_json(r#"{ "delay_ms": 5000 }"#).unwrap();
        assert_eq!(config.delay_ms, 200);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            input_path: PathBuf::from("grids/big.txt"),
            delay_ms: 10,
            celebration_ms: 0,
            theme: ThemeName::Ocean,
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load_from(&dir.path().join("nope.json")), Config::default());
    }

    #[test]
    fn test_theme_cycle() {
        assert_eq!(ThemeName::Default.next(), ThemeName::Ocean);
        assert_eq!(ThemeName::Ocean.next(), ThemeName::Monochrome);
        assert_eq!(ThemeName::Monochrome.next(), ThemeName::Default);
    }
}
