//! Configuration for booklist
//!
//! Centralized configuration with sensible defaults.

use std::env;
use std::path::PathBuf;

use crate::error::{BookError, Result};

/// Environment setting naming the catalog file
pub const PATH_ENV_VAR: &str = "BOOKLIST_PATH";

/// Fallback catalog file when the setting is absent
pub const DEFAULT_PATH: &str = "Book.txt";

/// Main configuration for a booklist instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the flat file holding the catalog.
    /// Rewritten in full on every add/remove.
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Resolve the config from the process environment
    ///
    /// An absent `BOOKLIST_PATH` falls back to `Book.txt`; a value that is
    /// not valid Unicode is reported as a configuration error.
    pub fn from_env() -> Result<Self> {
        match env::var(PATH_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => Ok(Self::builder().path(path).build()),
            Ok(_) | Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(raw)) => Err(BookError::Config(format!(
                "{} is not valid unicode: {:?}",
                PATH_ENV_VAR, raw
            ))),
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the catalog file path
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
