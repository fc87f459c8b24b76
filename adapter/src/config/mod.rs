// Reads and deserializes the adapter configuration file.

pub mod model;

pub use model::{AppConfig, CoreSystem, LogSettings, Systems};

use crate::error::{Error, Result};

use std::{fs, path::Path};

/// Used when `-c` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Reads the whole file at `path` and deserializes it.
///
/// There is no fallback: an unreadable or malformed file is an error.
pub fn load_config(path: &Path) -> Result<AppConfig> {
  tracing::debug!(config_file_path = %path.display(), "Reading config file.");

  let bytes = fs::read(path).map_err(|source| Error::ConfigRead {
    path: path.to_path_buf(),
    source,
  })?;

  let config = parse_config(&bytes).map_err(|source| Error::ConfigParse {
    path: path.to_path_buf(),
    source,
  })?;

  tracing::debug!(config = ?config, "Config file has been successfully read!");
  Ok(config)
}

/// Deserializes configuration bytes. An empty document yields the defaults.
pub fn parse_config(bytes: &[u8]) -> Result<AppConfig, serde_yaml::Error> {
  if bytes.iter().all(u8::is_ascii_whitespace) {
    return Ok(AppConfig::default());
  }
  serde_yaml::from_slice(bytes)
}
