// Contains the primary public initialization functions for prototaip_logging.

use crate::{
  error::{Error, Result},
  file_sink::{self, FileSinkConfig},
  guards::LogFileGuard,
};

use chrono::Local;
use std::io;
use tracing_core::metadata::LevelFilter;
use tracing_log::AsLog;
use tracing_subscriber::{
  fmt::{self, MakeWriter},
  prelude::*,
  registry::Registry,
  reload, Layer,
};

type FileLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;
type FileSlot = reload::Handle<Option<FileLayer>, Registry>;

/// Handle to the installed subscriber.
///
/// Passed by reference to whichever part of the program needs to change where
/// log entries go. The minimum level is fixed when the subscriber is built.
#[derive(Clone)]
pub struct LoggingHandle {
  level: LevelFilter,
  file_slot: FileSlot,
}

impl LoggingHandle {
  /// The minimum severity every sink honors.
  pub fn level(&self) -> LevelFilter {
    self.level
  }

  /// Creates the log directory and a timestamp-named file inside it, then
  /// routes every subsequent entry to that file as well as to the console.
  ///
  /// Replaces any previously attached file sink. The returned guard must be
  /// kept alive; dropping it flushes and closes the file.
  pub fn attach_file_sink(&self, config: &FileSinkConfig) -> Result<LogFileGuard> {
    let dir = file_sink::normalize_log_dir(&config.directory);
    file_sink::create_log_dir(&dir)?;

    let file_name = file_sink::log_file_name(&Local::now());
    let (file, path) = file_sink::create_log_file(&dir, &file_name)?;

    let (writer, worker) = tracing_appender::non_blocking(file);
    let layer: FileLayer = fmt::layer()
      .json()
      .with_writer(writer)
      .with_ansi(false)
      .boxed();

    self
      .file_slot
      .reload(Some(layer))
      .map_err(|e| Error::SinkInstall(e.to_string()))?;

    tracing::debug!(path = %path.display(), "Log file has been created!");
    Ok(LogFileGuard::new(path, worker))
  }
}

impl std::fmt::Debug for LoggingHandle {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("LoggingHandle")
      .field("level", &self.level)
      .finish_non_exhaustive()
  }
}

/// Builds the subscriber without installing it.
///
/// Events at or above `level` are written to `console` in human-readable form.
/// The file slot starts empty; see [`LoggingHandle::attach_file_sink`].
pub fn build_subscriber<W>(
  level: LevelFilter,
  console: W,
) -> (impl tracing::Subscriber + Send + Sync, LoggingHandle)
where
  W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
  let (file_layer, file_slot) = reload::Layer::new(None::<FileLayer>);

  let subscriber = tracing_subscriber::registry()
    .with(file_layer)
    .with(fmt::layer().with_writer(console))
    .with(level);

  (subscriber, LoggingHandle { level, file_slot })
}

/// Installs the process-wide subscriber writing to standard output.
///
/// Call this before emitting anything else so that every diagnostic honors
/// `level`. Fails if a global subscriber or `log` logger is already set.
pub fn init(level: LevelFilter) -> Result<LoggingHandle> {
  tracing_log::LogTracer::init_with_filter(level.as_log())
    .map_err(|e| Error::LogBridgeInit(e.to_string()))?;

  let (subscriber, handle) = build_subscriber(level, io::stdout);
  tracing::subscriber::set_global_default(subscriber)
    .map_err(|e| Error::GlobalSubscriberSet(e.to_string()))?;

  tracing::debug!(level = %level, "Logging has been initialized.");
  Ok(handle)
}
