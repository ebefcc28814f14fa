use crate::core::config::data::{path_display, Config};
use directories::ProjectDirs;
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Errors that can occur when loading configuration from disk.
#[derive(Debug)]
pub enum ConfigError {
    /// No configuration file exists at any of the searched locations.
    NotFound {
        /// Locations that were checked, in order.
        searched: Vec<PathBuf>,
    },

    /// Failed to read the configuration file from disk.
    Read {
        /// Path to the configuration file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the configuration file as valid JSON.
    Parse {
        /// Path to the configuration file with invalid JSON.
        path: PathBuf,
        /// The JSON deserialization error.
        source: serde_json::Error,
    },

    /// A value parsed but cannot be used.
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn display_path(path: &Path) -> String {
        path_display(path)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFound { searched } => {
                let paths: Vec<String> = searched
                    .iter()
                    .map(|path| Self::display_path(path))
                    .collect();
                write!(f, "No {CONFIG_FILE_NAME} found (looked in: {})", paths.join(", "))
            }
            ConfigError::Read { path, source } => {
                write!(
                    f,
                    "Failed to read config at {}: {}",
                    Self::display_path(path),
                    source
                )
            }
            ConfigError::Parse { path, source } => {
                write!(
                    f,
                    "Failed to parse config at {}: {}",
                    Self::display_path(path),
                    source
                )
            }
            ConfigError::Invalid { field, reason } => {
                write!(f, "Invalid config value for {field}: {reason}")
            }
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::NotFound { .. } | ConfigError::Invalid { .. } => None,
        }
    }
}

impl Config {
    /// Loads and validates the configuration at `config_path`. A missing file
    /// is an error; missing fields fall back to defaults.
    pub fn load_from_path(config_path: &Path) -> Result<Config, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::NotFound {
                searched: vec![config_path.to_path_buf()],
            });
        }
        let contents = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;
        let config: Config =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: config_path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves which file to load: the explicit path when given, otherwise
    /// the first existing candidate from [`Config::search_paths`].
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        if let Some(path) = explicit {
            return if path.exists() {
                Ok(path.to_path_buf())
            } else {
                Err(ConfigError::NotFound {
                    searched: vec![path.to_path_buf()],
                })
            };
        }

        let searched = Self::search_paths();
        match searched.iter().find(|path| path.exists()) {
            Some(path) => Ok(path.clone()),
            None => Err(ConfigError::NotFound { searched }),
        }
    }

    /// Loads the configuration once at startup and reports where it came from.
    pub fn load(explicit: Option<&Path>) -> Result<(Config, PathBuf), ConfigError> {
        let path = Self::resolve_path(explicit)?;
        let config = Self::load_from_path(&path)?;
        debug!(path = %path_display(&path), "Loaded configuration");
        Ok((config, path))
    }

    /// `./config.json`, then the per-user config directory.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(path) = Self::user_config_path() {
            paths.push(path);
        }
        paths
    }

    pub(crate) fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "chatline", "chatline")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
