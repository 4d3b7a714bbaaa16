//! File-backed configuration adapter.
//!
//! Reads a [`CoolingConfig`] from a JSON file.  Fields missing from the
//! file keep their defaults; the result is validated before it is
//! returned.

use std::io::ErrorKind;
use std::path::PathBuf;

use log::warn;

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::CoolingConfig;

pub struct FileConfig {
    path: PathBuf,
}

impl FileConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigPort for FileConfig {
    fn load(&self) -> Result<CoolingConfig, ConfigError> {
        let bytes = std::fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound,
            _ => {
                warn!("Config read {} failed: {}", self.path.display(), e);
                ConfigError::IoError
            }
        })?;

        let config: CoolingConfig = serde_json::from_slice(&bytes).map_err(|e| {
            warn!("Config parse {} failed: {}", self.path.display(), e);
            ConfigError::Corrupted
        })?;

        config.validate()?;
        Ok(config)
    }
}
