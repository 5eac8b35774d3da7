//! Application configuration: screen, face constants and asset locations

use anyhow::{Context, Result};
use hoodie_types::{FaceConfig, WatchShape};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current config format version
pub const CONFIG_VERSION: u32 = 1;

/// Application-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Screen reported by the host
    #[serde(default)]
    pub screen: ScreenConfig,
    /// Layout constants and colors
    #[serde(default)]
    pub face: FaceConfig,
    /// Source images
    #[serde(default)]
    pub assets: AssetConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl AppConfig {
    /// Load configuration from disk, defaults if no config file exists yet
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
        let dirs = directories::ProjectDirs::from("com", "nilhcem", "hoodie")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
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
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            screen: ScreenConfig::default(),
            face: FaceConfig::default(),
            assets: AssetConfig::default(),
        }
    }
}

/// Screen geometry, as the host would report it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreenConfig {
    #[serde(default = "default_screen_side")]
    pub width: i32,
    #[serde(default = "default_screen_side")]
    pub height: i32,
    /// Height of the flat, non-drawable strip at the bottom of some round screens
    #[serde(default)]
    pub chin_size: i32,
    #[serde(default)]
    pub shape: WatchShape,
}

fn default_screen_side() -> i32 {
    320
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: default_screen_side(),
            height: default_screen_side(),
            chin_size: 0,
            shape: WatchShape::Round,
        }
    }
}

/// Source images. Unset entries fall back to built-in procedural images.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AssetConfig {
    /// PNG used as gold texture
    #[serde(default)]
    pub texture: Option<PathBuf>,
    /// PNG whose alpha channel shapes the center emblem
    #[serde(default)]
    pub emblem: Option<PathBuf>,
}
