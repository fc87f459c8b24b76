use std::path::PathBuf;

use thiserror::Error;

/// The main error type for the `prototaip_logging` library.
#[derive(Debug, Error)]
pub enum Error {
  #[error("Failed to initialize tracing_log bridge: {0}")]
  LogBridgeInit(String),

  #[error("Failed to set global tracing subscriber: {0}")]
  GlobalSubscriberSet(String),

  #[error("Desired log directory cannot be used! ({}): {source}", .path.display())]
  LogDirectory {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Log file cannot be created! ({}): {source}", .path.display())]
  LogFile {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to install file sink: {0}")]
  SinkInstall(String),
}

/// A specialized `Result` type for `prototaip_logging` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
