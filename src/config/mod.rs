// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[dialog]` - Timeout and window geometry
//! - `[images]` - Attachment limits
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `MCP_FEEDBACK_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! The dialog timeout can additionally be overridden per-invocation with the
//! `MCP_DIALOG_TIMEOUT` environment variable (seconds), which takes
//! precedence over the config file.

pub mod defaults;

// Re-export all default constants for convenient access
pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding the dialog timeout (seconds).
pub const ENV_DIALOG_TIMEOUT: &str = "MCP_DIALOG_TIMEOUT";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "zh-CN").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Dialog behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogConfig {
    /// Auto-close timeout in seconds.
    #[serde(
        default = "default_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,

    /// Window width in logical pixels.
    #[serde(
        default = "default_window_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub window_width: Option<u32>,

    /// Window height in logical pixels.
    #[serde(
        default = "default_window_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub window_height: Option<u32>,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

/// Image attachment limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImagesConfig {
    /// Maximum number of attachments per submission.
    #[serde(default = "default_max_count", skip_serializing_if = "Option::is_none")]
    pub max_count: Option<usize>,

    /// Maximum file size in megabytes.
    #[serde(
        default = "default_max_file_size_mb",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_file_size_mb: Option<u64>,

    /// Maximum width or height in pixels.
    #[serde(
        default = "default_max_dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_dimension: Option<u32>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            max_count: default_max_count(),
            max_file_size_mb: default_max_file_size_mb(),
            max_dimension: default_max_dimension(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Dialog behavior settings.
    #[serde(default)]
    pub dialog: DialogConfig,

    /// Image attachment limits.
    #[serde(default)]
    pub images: ImagesConfig,
}

impl Config {
    /// Effective dialog timeout, honoring the `MCP_DIALOG_TIMEOUT` env
    /// override and clamping into the supported range.
    pub fn effective_timeout_secs(&self) -> u64 {
        let from_env = std::env::var(ENV_DIALOG_TIMEOUT)
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok());

        from_env
            .or(self.dialog.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS)
    }

    pub fn max_image_count(&self) -> usize {
        self.images.max_count.unwrap_or(DEFAULT_MAX_IMAGE_COUNT)
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.images
            .max_file_size_mb
            .unwrap_or(DEFAULT_MAX_FILE_SIZE_MB)
            * 1024
            * 1024
    }

    pub fn max_dimension(&self) -> u32 {
        self.images.max_dimension.unwrap_or(DEFAULT_MAX_DIMENSION)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    // The feedback window is dark-themed by default
    ThemeMode::Dark
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_TIMEOUT_SECS)
}

fn default_window_width() -> Option<u32> {
    Some(DEFAULT_WINDOW_WIDTH)
}

fn default_window_height() -> Option<u32> {
    Some(DEFAULT_WINDOW_HEIGHT)
}

fn default_max_count() -> Option<usize> {
    Some(DEFAULT_MAX_IMAGE_COUNT)
}

fn default_max_file_size_mb() -> Option<u64> {
    Some(DEFAULT_MAX_FILE_SIZE_MB)
}

fn default_max_dimension() -> Option<u32> {
    Some(DEFAULT_MAX_DIMENSION)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with an i18n warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::Mutex;
    use tempfile::tempdir;

    // Guards MCP_DIALOG_TIMEOUT manipulation across parallel tests
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("zh-CN".to_string()),
                theme_mode: ThemeMode::Light,
            },
            dialog: DialogConfig {
                timeout_secs: Some(120),
                window_width: Some(600),
                window_height: Some(700),
            },
            images: ImagesConfig {
                max_count: Some(5),
                max_file_size_mb: Some(4),
                max_dimension: Some(2048),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.dialog.timeout_secs, Some(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.max_image_count(), DEFAULT_MAX_IMAGE_COUNT);
        assert_eq!(
            config.max_file_size_bytes(),
            DEFAULT_MAX_FILE_SIZE_MB * 1024 * 1024
        );
        assert_eq!(config.max_dimension(), DEFAULT_MAX_DIMENSION);
    }

    #[test]
    fn env_var_overrides_config_timeout() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DIALOG_TIMEOUT, "42");

        let config = Config::default();
        assert_eq!(config.effective_timeout_secs(), 42);

        std::env::remove_var(ENV_DIALOG_TIMEOUT);
    }

    #[test]
    fn invalid_env_timeout_falls_back_to_config() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DIALOG_TIMEOUT, "not-a-number");

        let config = Config {
            dialog: DialogConfig {
                timeout_secs: Some(300),
                ..DialogConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.effective_timeout_secs(), 300);

        std::env::remove_var(ENV_DIALOG_TIMEOUT);
    }

    #[test]
    fn timeout_is_clamped_into_supported_range() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DIALOG_TIMEOUT);

        let config = Config {
            dialog: DialogConfig {
                timeout_secs: Some(1),
                ..DialogConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.effective_timeout_secs(), MIN_TIMEOUT_SECS);

        let config = Config {
            dialog: DialogConfig {
                timeout_secs: Some(u64::MAX),
                ..DialogConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.effective_timeout_secs(), MAX_TIMEOUT_SECS);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(
            warning,
            Some("notification-config-load-error".to_string())
        );
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        save_with_override(&Config::default(), Some(nested_dir.clone()))
            .expect("save should succeed");
        assert!(nested_dir.join("settings.toml").exists());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");
        let content = fs::read_to_string(&config_path).expect("read config");

        assert!(content.contains("[general]"), "should have [general] section");
        assert!(content.contains("[dialog]"), "should have [dialog] section");
        assert!(content.contains("[images]"), "should have [images] section");
    }
}
