//! Configuration loading and management

mod settings;

pub use settings::{RenderSettings, Settings};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Generation defaults
    #[serde(default)]
    pub settings: Settings,

    /// Output sizes and directories
    #[serde(default)]
    pub render: RenderSettings,
}

/// Directory holding the config file, favorites, and the currently
/// applied wallpaper: ~/.waller
pub fn waller_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".waller")
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// The default config location: ~/.waller/config.toml
    pub fn default_path() -> PathBuf {
        waller_dir().join("config.toml")
    }

    /// Load from an explicit path, or from the default location.
    /// A missing default config yields the built-in defaults; a missing
    /// explicit path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Self::default_path();
                if default.exists() {
                    Self::from_file(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
