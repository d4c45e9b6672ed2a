//! Configuration management for lapwatch
//!
//! Handles loading, saving, and default configuration values.
//! Config file location: ~/.config/lapwatch/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dark theme when true, light otherwise
    pub dark_mode: bool,
    pub display: DisplayOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark_mode: false,
            display: DisplayOptions::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("lapwatch");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default if not exists
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }
}

/// Display options for the stopwatch view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Show keybinding hints in the status bar
    pub show_hints: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { show_hints: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.dark_mode);
        assert!(config.display.show_hints);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.dark_mode = true;

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert!(parsed.dark_mode);
        assert!(parsed.display.show_hints);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert!(!parsed.dark_mode);
        assert!(parsed.display.show_hints);
    }
}
