// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toast]` - Container position and default auto-dismiss delay
//! - `[diagnostics]` - Event buffer size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `TOAST_RACK_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use toast_rack::config::{self, Config};
//! use toast_rack::domain::toast::Position;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toast.position = Position::TopCenter;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::diagnostics::EventCapacity;
use crate::domain::toast::{DismissAfter, Position};
use crate::error::{Error, Result};
use crate::ui::notifications::ToastOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast installation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Screen anchor of the toast container.
    #[serde(default, with = "position_serde")]
    pub position: Position,

    /// Default auto-dismiss delay in milliseconds (0 disables auto-dismiss).
    #[serde(default = "default_duration", alias = "defaultDuration")]
    pub default_duration: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            position: Position::default(),
            default_duration: DEFAULT_DURATION_MS,
        }
    }
}

impl ToastConfig {
    /// Returns the installation options described by this section.
    #[must_use]
    pub fn options(&self) -> ToastOptions {
        ToastOptions::default()
            .with_position(self.position)
            .with_default_duration(DismissAfter::from_millis(self.default_duration))
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of lifecycle events kept in memory (clamped to 16–10000).
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY,
        }
    }
}

impl DiagnosticsConfig {
    /// Returns the validated event capacity.
    #[must_use]
    pub fn capacity(&self) -> EventCapacity {
        EventCapacity::new(self.buffer_capacity)
    }

    /// Describes the clamping applied by [`capacity`](Self::capacity), if any.
    fn clamp_warning(&self) -> Option<String> {
        match EventCapacity::checked(self.buffer_capacity) {
            Some(_) => None,
            None => Some(format!(
                "diagnostics.buffer_capacity = {} is out of range, using {}",
                self.buffer_capacity,
                self.capacity()
            )),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Toast installation settings.
    #[serde(default)]
    pub toast: ToastConfig,

    /// Diagnostics settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration() -> u64 {
    DEFAULT_DURATION_MS
}

fn default_buffer_capacity() -> usize {
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
}

mod position_serde {
    use crate::domain::toast::Position;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(position: &Position, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(position.as_str())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Position, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong. A
/// loaded value that will be clamped also produces a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    let warning = config
                        .diagnostics
                        .clamp_warning()
                        .map(|w| format!("{}: {}", path.display(), w));
                    return (config, warning);
                }
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {}", path.display(), err)),
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

// =============================================================================
// Save Functions
// =============================================================================

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
