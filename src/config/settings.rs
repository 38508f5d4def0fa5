//! Application configuration for the winforge demo window

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use winforge_core::DEFAULT_CONTRAST_GAP;
use winforge_types::CloseOperation;

/// Current config format version
pub const CONFIG_VERSION: u32 = 1;

/// Application-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Demo window settings
    #[serde(default)]
    pub window: WindowConfig,
    /// Virtual display used by the headless host
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl AppConfig {
    /// Load configuration from disk, or defaults if no file exists yet
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to_path(&config_path)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("org", "winforge", "winforge")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            window: WindowConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Demo window configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_resizable")]
    pub resizable: bool,
    #[serde(default)]
    pub close_operation: CloseOperation,
    /// Minimum brightness of the random background, 0.0 to 1.0
    #[serde(default = "default_brightness_floor")]
    pub brightness_floor: f32,
    /// Channel distance between background and text colors
    #[serde(default = "default_contrast_gap")]
    pub contrast_gap: u8,
}

fn default_title() -> String {
    "winforge".to_string()
}

fn default_width() -> i32 {
    640
}

fn default_height() -> i32 {
    480
}

fn default_resizable() -> bool {
    true
}

fn default_brightness_floor() -> f32 {
    0.6
}

fn default_contrast_gap() -> u8 {
    DEFAULT_CONTRAST_GAP
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            resizable: default_resizable(),
            close_operation: CloseOperation::default(),
            brightness_floor: default_brightness_floor(),
            contrast_gap: default_contrast_gap(),
        }
    }
}

/// Virtual display configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"window": {"title": "Scratch"}}"#).unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.window.title, "Scratch");
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.close_operation, CloseOperation::ExitOnClose);
        assert_eq!(config.window.contrast_gap, 100);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_close_operation_names() {
        let config: WindowConfig =
            serde_json::from_str(r#"{"close_operation": "hide_on_close"}"#).unwrap();
        assert_eq!(config.close_operation, CloseOperation::HideOnClose);
    }

    #[test]
    fn test_save_and_load_path() {
        let dir = std::env::temp_dir().join(format!("winforge-config-{}", std::process::id()));
        let path = dir.join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.window.title = "Saved".to_string();
        config.display.width = 1024;
        config.save_to_path(&path).unwrap();

        let loaded = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_reports_bad_json() {
        let dir = std::env::temp_dir().join(format!("winforge-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
