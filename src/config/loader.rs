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
    /// Uses `~/.config/folio/config.toml` on Unix/macOS, or equivalent on
    /// other platforms via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("folio").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()` so the page
    ///   renders with sample content out of the box.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
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
    /// - At least one tagline phrase is configured
    /// - Skill levels stay within 0-100
    /// - Reveal thresholds are fractions in (0, 1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.profile.phrases.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one tagline phrase must be configured".to_string(),
            });
        }

        for skill in &self.skills {
            if let Some(level) = skill.level {
                if level > 100 {
                    return Err(ConfigError::ValidationError {
                        message: format!(
                            "Skill '{}' has level {}, expected 0-100",
                            skill.name, level
                        ),
                    });
                }
            }
        }

        for (name, threshold) in [
            ("reveal.fade_threshold", self.reveal.fade_threshold),
            ("reveal.progress_threshold", self.reveal.progress_threshold),
        ] {
            if !(threshold > 0.0 && threshold <= 1.0) {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must be a fraction in (0, 1], got {}", name, threshold),
                });
            }
        }

        Ok(())
    }
}
