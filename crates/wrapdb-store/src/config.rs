//! Store configuration
//!
//! The backing store target and connection settings, loaded from TOML.
//!
//! ```toml
//! path = "data/entries.db"
//! journal_mode = "WAL"
//! busy_timeout_ms = 5000
//! ensure_schema = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use wrapdb_core::errors::{ExError, ExErrorKind};

/// Path value selecting an in-memory database
pub const MEMORY_PATH: &str = ":memory:";

/// Default on-disk database file
pub const DEFAULT_PATH: &str = "mydatabase.db";

/// SQLite takes the busy timeout as a signed 32-bit millisecond count
pub const MAX_BUSY_TIMEOUT_MS: u64 = i32::MAX as u64;

const JOURNAL_MODES: &[&str] = &["DELETE", "TRUNCATE", "PERSIST", "MEMORY", "WAL", "OFF"];

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field parsed but holds an unusable value
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl From<ConfigError> for ExError {
    fn from(err: ConfigError) -> Self {
        let kind = match &err {
            ConfigError::Read { .. } => ExErrorKind::Io,
            ConfigError::Parse(_) | ConfigError::InvalidValue { .. } => ExErrorKind::Config,
        };
        ExError::new(kind)
            .with_op("load_config")
            .with_message(err.to_string())
    }
}

/// Where the backing store lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbTarget {
    File(PathBuf),
    Memory,
}

impl std::fmt::Display for DbTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbTarget::File(path) => write!(f, "{}", path.display()),
            DbTarget::Memory => f.write_str(MEMORY_PATH),
        }
    }
}

/// Settings for opening the backing store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Database file, or `:memory:`
    pub path: PathBuf,
    /// SQLite journal mode for file databases
    pub journal_mode: String,
    pub busy_timeout_ms: u64,
    /// Create the `entries` table on connect if it is missing
    pub ensure_schema: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            journal_mode: "WAL".to_string(),
            busy_timeout_ms: 5000,
            ensure_schema: true,
        }
    }
}

impl StoreConfig {
    /// Default settings pointed at `path`
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Default settings for an in-memory database
    pub fn in_memory() -> Self {
        Self::at(MEMORY_PATH)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "path",
                reason: "must not be empty".to_string(),
            });
        }
        if !JOURNAL_MODES.contains(&self.journal_mode.to_ascii_uppercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "journal_mode",
                reason: format!(
                    "'{}' is not one of {}",
                    self.journal_mode,
                    JOURNAL_MODES.join(", ")
                ),
            });
        }
        if self.busy_timeout_ms > MAX_BUSY_TIMEOUT_MS {
            return Err(ConfigError::InvalidValue {
                field: "busy_timeout_ms",
                reason: format!(
                    "{} exceeds the maximum of {}",
                    self.busy_timeout_ms, MAX_BUSY_TIMEOUT_MS
                ),
            });
        }
        Ok(())
    }

    pub fn target(&self) -> DbTarget {
        if self.path.as_os_str() == MEMORY_PATH {
            DbTarget::Memory
        } else {
            DbTarget::File(self.path.clone())
        }
    }
}
