//! TOML-based application configuration.
//!
//! Stores the countdown defaults and the page palette/labels.
//! Configuration is stored at `~/.config/ticklab/config.toml`; a missing
//! file yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Countdown defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownConfig {
    /// Initial counter value.
    #[serde(default = "default_start")]
    pub start: u32,
    /// Tick interval in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Warning style applies while `0 < remaining <= warning_threshold`.
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: u32,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            interval_ms: default_interval_ms(),
            warning_threshold: default_warning_threshold(),
        }
    }
}

/// Page configuration: banner palette and list item labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    #[serde(default = "default_item_labels")]
    pub item_labels: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            item_labels: default_item_labels(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/ticklab/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub countdown: CountdownConfig,
    #[serde(default)]
    pub page: PageConfig,
}

impl Config {
    /// Path to the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("ticklab").join("config.toml"))
    }

    /// Load from the default path; a missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::SaveFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

fn default_start() -> u32 {
    10
}

fn default_interval_ms() -> u64 {
    1000
}

fn default_warning_threshold() -> u32 {
    3
}

fn default_palette() -> Vec<String> {
    crate::page::TEXT_COLORS.iter().map(|c| c.to_string()).collect()
}

fn default_item_labels() -> Vec<String> {
    crate::page::ITEM_LABELS.iter().map(|l| l.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.countdown.start, 10);
        assert_eq!(cfg.countdown.interval_ms, 1000);
        assert_eq!(cfg.countdown.warning_threshold, 3);
        assert_eq!(cfg.page.palette.len(), 8);
        assert_eq!(cfg.page.item_labels.len(), 6);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: Config = toml::from_str("[countdown]\nstart = 5\n").unwrap();
        assert_eq!(cfg.countdown.start, 5);
        assert_eq!(cfg.countdown.interval_ms, 1000);
        assert_eq!(cfg.page.item_labels.len(), 6);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = Config::default();
        cfg.countdown.start = 42;
        cfg.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.countdown.start, 42);
    }
}
