//! Configuration for a farming session
//!
//! A fixed in-process record: the tile being farmed, pacing, and display
//! theme. Defaults reproduce the stock setup; a `wfarm.toml` in the working
//! directory overrides them.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{FarmError, Result};

/// Farming configuration
///
/// Loaded from `wfarm.toml` when present, otherwise defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmConfig {
    /// Backend base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Tile origin x in the remote coordinate system
    #[serde(default = "default_start_x")]
    pub start_x: u32,

    /// Tile origin y in the remote coordinate system
    #[serde(default = "default_start_y")]
    pub start_y: u32,

    /// Tile edge length; random offsets are drawn from [0, this)
    #[serde(default = "default_pixels_per_line")]
    pub pixels_per_line: u32,

    /// Fixed delay between paint attempts, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Charge capacity assumed before the first status fetch
    #[serde(default = "default_max_charges")]
    pub max_charges: u32,

    /// Number of selectable colors; indices are drawn from [1, this]
    #[serde(default = "default_palette_size")]
    pub palette_size: u32,

    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Display theme colors (hex strings)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub highlight: String,
    pub success: String,
    pub error: String,
}

fn default_base_url() -> String {
    "https://backend.wplace.live".to_string()
}

fn default_start_x() -> u32 {
    742
}

fn default_start_y() -> u32 {
    1148
}

fn default_pixels_per_line() -> u32 {
    100
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_max_charges() -> u32 {
    80
}

fn default_palette_size() -> u32 {
    31
}

impl FarmConfig {
    /// Load configuration from `wfarm.toml` under `dir`, or use defaults
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let config_path = dir.join("wfarm.toml");

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)
                .map_err(|e| FarmError::Config(format!("Failed to parse config file: {}", e)))
        } else {
            Ok(Self::default())
        }
    }

    /// Write the default configuration to `wfarm.toml` under `dir`
    pub fn write_default(dir: &Path) -> Result<()> {
        let config_path = dir.join("wfarm.toml");
        let content = toml::to_string_pretty(&Self::default())
            .map_err(|e| FarmError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            start_x: default_start_x(),
            start_y: default_start_y(),
            pixels_per_line: default_pixels_per_line(),
            delay_ms: default_delay_ms(),
            max_charges: default_max_charges(),
            palette_size: default_palette_size(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#000000".to_string(),
            secondary: "#111111".to_string(),
            accent: "#222222".to_string(),
            text: "#ffffff".to_string(),
            highlight: "#0073ff".to_string(),
            success: "#00ff00".to_string(),
            error: "#ff0000".to_string(),
        }
    }
}
