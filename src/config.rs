//! User configuration loaded from TOML.

use crate::editor::{DEFAULT_HISTORY_CAPACITY, EditorOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Completed calculations kept in history.
    pub history_capacity: usize,
    /// Expressions longer than this are shown as `...` plus their tail.
    pub max_display_length: usize,
    /// Results longer than this switch to exponential notation.
    pub max_result_length: usize,
    /// Keep history when the editor is cleared.
    pub keep_history_on_clear: bool,
    /// Group result digits with `,`.
    pub thousands_separator: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            max_display_length: 30,
            max_result_length: 15,
            keep_history_on_clear: false,
            thousands_separator: true,
        }
    }
}

impl Config {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.history_capacity == 0 {
            warn!("history_capacity of 0 is not allowed, keeping one entry");
            config.history_capacity = 1;
        }

        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Load the explicitly given file, or the default location if it exists,
    /// or fall back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            history_capacity: self.history_capacity,
            keep_history_on_clear: self.keep_history_on_clear,
        }
    }
}

/// `$XDG_CONFIG_HOME/bodmas/config.toml` or the platform equivalent.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bodmas").join("config.toml"))
}
