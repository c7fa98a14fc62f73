use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/showreel/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("showreel").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Carousel intervals are non-zero
    /// - The log filter is not blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, carousel) in [
            ("hero", &self.rotation.hero),
            ("testimonials", &self.rotation.testimonials),
        ] {
            if carousel.interval_ms == 0 {
                return Err(ConfigError::ValidationError {
                    message: format!("rotation.{name}.interval_ms must be greater than zero"),
                });
            }
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "logging.level must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Default log file location.
    pub fn default_log_path() -> PathBuf {
        let cache_dir = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
        cache_dir.join("showreel").join("showreel.log")
    }

    /// Log file from config, falling back to [`Config::default_log_path`].
    pub fn log_path(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(Self::default_log_path)
    }
}
