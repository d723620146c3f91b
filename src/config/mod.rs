//! # Configuration Management Module
//!
//! This module handles all configuration aspects of fortunecast, providing a
//! small centralized configuration system with defaults and persistence.
//!
//! ## Configuration Structure
//!
//! The configuration is organized into logical sections:
//!
//! - [`UiConfig`] - Presentation settings (theme, color output)
//! - [`StorageConfig`] - Data persistence settings (preferences, saved cards)
//! - [`LoggingConfig`] - Logging and debugging settings
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fortunecast::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load configuration from file
//!     let config = Config::load("config.toml")?;
//!     println!("Theme: {}", config.ui.default_theme);
//!
//!     // Create a default configuration file
//!     Config::create_default("config.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! fortunecast uses TOML format for human-readable configuration:
//!
//! ```toml
//! [ui]
//! default_theme = "dark"
//! use_color = true
//!
//! [storage]
//! data_dir = "./data"
//!
//! [logging]
//! level = "info"
//! file = "fortunecast.log"
//! ```
//!
//! Every section and field is optional; missing values fall back to the
//! defaults shown above.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme used when no stored preference exists and the terminal gives no
    /// hint. Must be "dark" or "light"; anything else falls back to "dark".
    #[serde(default = "default_theme")]
    pub default_theme: String,
    /// Master switch for ANSI color output. `NO_COLOR` and non-TTY stdout
    /// still win over this.
    #[serde(default = "default_use_color")]
    pub use_color: bool,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_use_color() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_theme: default_theme(),
            use_color: default_use_color(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for theme preferences and saved cards.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    "./data".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: Some("fortunecast.log".to_string()),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ui.default_theme, "dark");
        assert!(config.ui.use_color);
        assert_eq!(config.storage.data_dir, "./data");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file.as_deref(), Some("fortunecast.log"));
    }

    #[test]
    fn test_empty_file_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ui.default_theme, "dark");
        assert_eq!(config.storage.data_dir, "./data");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[ui]\ndefault_theme = \"light\"\n").unwrap();
        assert_eq!(config.ui.default_theme, "light");
        // Unset fields in a present section still default.
        assert!(config.ui.use_color);
        assert_eq!(config.storage.data_dir, "./data");
    }

    #[test]
    fn test_round_trip() {
        let mut config = Config::default();
        config.ui.use_color = false;
        config.storage.data_dir = "/tmp/fc".to_string();

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert!(!parsed.ui.use_color);
        assert_eq!(parsed.storage.data_dir, "/tmp/fc");
    }
}
