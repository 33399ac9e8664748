//! The per-user configuration file.
//!
//! Values in the file override the built-in defaults and are in turn
//! overridden by command-line flags.

use crate::options::{Options, PartialOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use toml::Value;

pub const CONFIG_FILE_NAME: &str = ".altpass.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the home directory")]
    NoHomeDir,

    #[error("expected switches to be boolean, but got: {0}")]
    SwitchesNotBoolean(String),

    #[error(transparent)]
    Options(#[from] crate::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    TomlDeser(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

/// Settings read from a config file. Every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub options: PartialOptions,
    pub switches: Option<bool>,
}

/// What gets written when a config file is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub length: usize,
    pub memorizable: bool,
    pub permutations: u8,
    pub switches: bool,
}

impl ConfigFile {
    pub fn new(options: &Options, switches: bool) -> Self {
        Self {
            length: options.length,
            memorizable: options.memorizable,
            permutations: options.verbosity,
            switches,
        }
    }
}

/// `$HOME/.altpass.toml`
pub fn default_path() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoHomeDir)
}

impl Config {
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let value: Value = toml::from_str(contents)?;
        let options = PartialOptions::try_from(&value)?;

        let switches = match value.get("switches") {
            None => None,
            Some(Value::Boolean(b)) => Some(*b),
            Some(other) => return Err(ConfigError::SwitchesNotBoolean(other.to_string())),
        };

        Ok(Self { options, switches })
    }

    /// Load the file at `path`, or `None` when there is no such file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config file");
        Ok(Some(config))
    }
}

/// Write a new config file at `path`. An existing file is left alone and
/// `false` is returned.
pub fn create<P: AsRef<Path>>(path: P, file: &ConfigFile) -> Result<bool, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }

    let content = toml::to_string_pretty(file)?;
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "created config file");
    Ok(true)
}
