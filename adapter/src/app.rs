// Startup sequence that runs once the logger is installed.

use crate::{
  cli::Cli,
  config::{self, AppConfig},
  error::Result,
  registry,
};

use prototaip_logging::{LogFileGuard, LoggingHandle};
use std::path::Path;

/// What the running process has to keep alive until it returns.
#[derive(Debug)]
#[must_use = "Dropping the Session closes the log file"]
pub struct Session {
  log_file: Option<LogFileGuard>,
}

impl Session {
  /// The log file of this run, when file logging is enabled.
  pub fn log_file(&self) -> Option<&Path> {
    self.log_file.as_ref().map(LogFileGuard::path)
  }
}

/// Loads the configuration named on the command line and starts the adapter.
pub fn run(cli: &Cli, logging: &LoggingHandle) -> Result<Session> {
  let config = config::load_config(&cli.config)?;
  start(&config, logging)
}

/// Applies the logging settings, announces the start and registers the service.
pub fn start(config: &AppConfig, logging: &LoggingHandle) -> Result<Session> {
  let log_file = if config.log.to_file {
    Some(logging.attach_file_sink(&config.log.file_sink())?)
  } else {
    None
  };

  tracing::info!("Application has been started!");

  registry::register_service(&config.systems)?;

  Ok(Session { log_file })
}
