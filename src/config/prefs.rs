//! The single persisted user preference: the theme.
//!
//! Deliberately tiny: one key, one string value, its own file. The page has
//! no other persistent state.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Failed to read prefs file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse prefs file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write prefs file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize prefs: {source}")]
    SerializeError {
        #[source]
        source: toml::ser::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

impl ThemeKind {
    pub fn flipped(self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub theme: ThemeKind,
}

impl Prefs {
    /// Returns the path to the prefs file, next to the config file.
    pub fn prefs_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("folio").join("prefs.toml")
    }

    /// Loads preferences, defaulting to the light theme when the file is
    /// missing (same fallback the original page uses).
    pub fn load_from(path: &Path) -> Result<Self, PrefsError> {
        if !path.exists() {
            return Ok(Prefs::default());
        }

        let content = fs::read_to_string(path).map_err(|e| PrefsError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| PrefsError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Persists preferences under an exclusive file lock.
    ///
    /// The lock guards against a second folio instance clobbering the file
    /// mid-write; contents are small enough for a single write call.
    pub fn store_to(&self, path: &Path) -> Result<(), PrefsError> {
        let write_err = |source| PrefsError::WriteError {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let serialized = toml::to_string(self).map_err(|e| PrefsError::SerializeError { source: e })?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(write_err)?;
        file.lock_exclusive().map_err(write_err)?;
        let result = file
            .write_all(serialized.as_bytes())
            .and_then(|_| file.flush())
            .map_err(write_err);
        let _ = fs2::FileExt::unlock(&file);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_flips_both_ways() {
        assert_eq!(ThemeKind::Light.flipped(), ThemeKind::Dark);
        assert_eq!(ThemeKind::Dark.flipped(), ThemeKind::Light);
    }

    #[test]
    fn missing_file_defaults_to_light() {
        let prefs = Prefs::load_from(Path::new("/nonexistent/folio/prefs.toml")).unwrap();
        assert_eq!(prefs.theme, ThemeKind::Light);
    }
}
