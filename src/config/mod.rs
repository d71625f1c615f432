// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use material_icons::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.default_color = Some("#1a73e8".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.default_color, Some("#1a73e8".to_string()));
//! ```

pub mod defaults;

use crate::cache::CacheConfig;
use crate::error::Result;
use crate::paths;
use crate::style::IconStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::{DEFAULT_CACHE_CAPACITY, DEFAULT_COLOR, DEFAULT_ICON_SIZE, DEFAULT_STYLE};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root of the asset store; falls back to [`paths::get_icon_dir`].
    #[serde(default)]
    pub icon_dir: Option<PathBuf>,
    #[serde(default)]
    pub default_size: Option<u32>,
    #[serde(default)]
    pub default_color: Option<String>,
    #[serde(default)]
    pub default_style: Option<IconStyle>,
    /// Maximum number of cached rasters; 0 or absent means unbounded.
    #[serde(default)]
    pub cache_capacity: Option<usize>,
}

impl Config {
    #[must_use]
    pub fn size(&self) -> u32 {
        self.default_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_ICON_SIZE)
    }

    #[must_use]
    pub fn color(&self) -> &str {
        self.default_color.as_deref().unwrap_or(DEFAULT_COLOR)
    }

    #[must_use]
    pub fn style(&self) -> IconStyle {
        self.default_style.unwrap_or(DEFAULT_STYLE)
    }

    #[must_use]
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig::bounded(self.cache_capacity.unwrap_or(DEFAULT_CACHE_CAPACITY))
    }

    /// Asset directory from this config, or the resolved default.
    pub fn resolve_icon_dir(&self) -> Option<PathBuf> {
        paths::get_icon_dir_with_override(self.icon_dir.clone())
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads `path`; unparsable content falls back to defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("Ignoring invalid config {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            icon_dir: Some(PathBuf::from("/srv/icons")),
            default_size: Some(48),
            default_color: Some("#ff0000".to_string()),
            default_style: Some(IconStyle::TwoTone),
            cache_capacity: Some(256),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn style_is_stored_lowercase() {
        let config = Config {
            default_style: Some(IconStyle::TwoTone),
            ..Config::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("default_style = \"twotone\""));
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn accessors_fall_back_to_defaults() {
        let config = Config::default();
        assert_eq!(config.size(), DEFAULT_ICON_SIZE);
        assert_eq!(config.color(), DEFAULT_COLOR);
        assert_eq!(config.style(), DEFAULT_STYLE);
        assert_eq!(config.cache_config(), CacheConfig::unbounded());
    }

    #[test]
    fn zero_size_falls_back_to_default() {
        let config = Config {
            default_size: Some(0),
            ..Config::default()
        };
        assert_eq!(config.size(), DEFAULT_ICON_SIZE);
    }

    #[test]
    fn cache_capacity_becomes_lru_bound() {
        let config = Config {
            cache_capacity: Some(64),
            ..Config::default()
        };
        assert_eq!(config.cache_config().capacity, NonZeroUsize::new(64));
    }

    #[test]
    fn explicit_icon_dir_wins() {
        let config = Config {
            icon_dir: Some(PathBuf::from("/opt/icons")),
            ..Config::default()
        };
        assert_eq!(config.resolve_icon_dir(), Some(PathBuf::from("/opt/icons")));
    }
}
