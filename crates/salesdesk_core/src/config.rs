//! Application configuration loading.
//!
//! # Responsibility
//! - Read store connection and logging parameters once at process start.
//! - Keep configuration parsing out of the DAO/service layers.
//!
//! # Invariants
//! - A missing or blank database path selects an in-memory store.
//! - `SALESDESK_DB_PATH` overrides the file-provided database path.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Environment variable overriding `[database] path`.
pub const DB_PATH_ENV: &str = "SALESDESK_DB_PATH";

/// Store connection parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    /// SQLite file path. `None` means in-memory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

/// Logging parameters consumed by [`crate::logging::init_logging`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// `trace|debug|info|warn|error`; build default when absent.
    #[serde(default)]
    pub level: Option<String>,
    /// Absolute log directory; file logging is skipped when absent.
    #[serde(default)]
    pub dir: Option<String>,
}

/// Top-level configuration file shape.
///
/// ```toml
/// [database]
/// path = "/var/lib/salesdesk/salesdesk.sqlite3"
///
/// [logging]
/// level = "info"
/// dir = "/var/log/salesdesk"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub database: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

impl AppConfig {
    /// Parses configuration from TOML text without consulting the environment.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = toml::from_str(text)?;
        config.database.path = normalize_path(config.database.path.take());
        Ok(config)
    }

    /// Loads configuration from a TOML file and applies environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        config.apply_env_overrides(std::env::var(DB_PATH_ENV).ok());
        Ok(config)
    }

    fn apply_env_overrides(&mut self, db_path: Option<String>) {
        if let Some(value) = db_path {
            self.database.path = normalize_path(Some(PathBuf::from(value)));
        }
    }
}

fn normalize_path(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|value| !value.as_os_str().to_string_lossy().trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, StoreConfig};
    use std::path::PathBuf;

    #[test]
    fn empty_document_defaults_to_in_memory_store() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.database, StoreConfig::default());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn blank_path_is_treated_as_absent() {
        let config = AppConfig::from_toml_str("[database]\npath = \"  \"\n").unwrap();
        assert!(config.database.path.is_none());
    }

    #[test]
    fn env_override_replaces_file_path() {
        let mut config =
            AppConfig::from_toml_str("[database]\npath = \"from-file.sqlite3\"\n").unwrap();
        config.apply_env_overrides(Some("from-env.sqlite3".to_string()));
        assert_eq!(
            config.database.path,
            Some(PathBuf::from("from-env.sqlite3"))
        );
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(AppConfig::from_toml_str("[database\npath = 1").is_err());
    }
}
