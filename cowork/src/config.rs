//! Configuration file loading.
//!
//! Configuration is a single optional YAML file at
//! `{data_dir}/config.yaml`. Every field has a default, so a missing
//! file is equivalent to an empty one.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::database::{default_data_dir, DatabaseConfig};
use crate::error::Result;

/// User configuration for the reservation system.
///
/// # Examples
///
/// ```
/// use cowork::config::Config;
///
/// let config: Config = serde_yaml::from_str("busy_timeout_seconds: 10").unwrap();
/// assert_eq!(config.busy_timeout_seconds, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the database and configuration file.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Busy timeout for database lock contention, in seconds.
    #[serde(default = "default_busy_timeout_seconds")]
    pub busy_timeout_seconds: u64,

    /// Directory report exports are written to. Defaults to the
    /// current working directory.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

const fn default_busy_timeout_seconds() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            busy_timeout_seconds: default_busy_timeout_seconds(),
            export_dir: None,
        }
    }
}

impl Config {
    /// Loads the configuration file from `{data_dir}/config.yaml`.
    ///
    /// A missing file yields the default configuration. If `data_dir`
    /// is `None` the default data directory is searched.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or
    /// parsed, or if the home directory cannot be determined.
    pub fn load(data_dir: Option<&Path>) -> Result<Self> {
        let dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_data_dir()?,
        };
        let path = dir.join("config.yaml");

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Self = serde_yaml::from_str(&contents)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Builds a database configuration from these settings.
    ///
    /// The database lives at `{data_dir}/cowork.db`; an explicit
    /// `data_dir` argument overrides the configured one.
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory can be determined.
    pub fn database_config(&self, data_dir: Option<&Path>) -> Result<DatabaseConfig> {
        let dir = match data_dir.map(Path::to_path_buf).or_else(|| self.data_dir.clone()) {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        Ok(DatabaseConfig::new(dir.join("cowork.db"))
            .with_busy_timeout(Duration::from_secs(self.busy_timeout_seconds)))
    }

    /// Returns the directory exports are written to.
    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
