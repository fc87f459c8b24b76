use std::path::PathBuf;

use thiserror::Error;

/// Everything that stops the adapter from starting.
#[derive(Debug, Error)]
pub enum Error {
  #[error("Config file cannot be opened! ({}): {source}", .path.display())]
  ConfigRead {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Config file cannot be unmarshaled! ({}): {source}", .path.display())]
  ConfigParse {
    path: PathBuf,
    #[source]
    source: serde_yaml::Error,
  },

  #[error(transparent)]
  Logging(#[from] prototaip_logging::Error),
}

/// A specialized `Result` type for adapter startup.
pub type Result<T, E = Error> = std::result::Result<T, E>;
