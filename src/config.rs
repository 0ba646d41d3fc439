//! Configuration loading from ui.toml

use std::path::Path;

use frameless_buttons::ClusterConfig;
use serde::Deserialize;
use thiserror::Error;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    /// Initial state of the title bar buttons
    #[serde(default)]
    pub buttons: ClusterConfig,
}

/// Demo window configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_title() -> String {
    "frameless".to_string()
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    520
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load from default path (ui.toml in current directory)
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load("ui.toml")
    }

    /// Load ui.toml, falling back to built-in defaults
    pub fn load_or_default() -> Self {
        match Self::load_default() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default configuration: {}", e);
                Self::default()
            }
        }
    }
}
