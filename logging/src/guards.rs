// Holds onto the resources behind the file sink so the log file stays open
// for the rest of the process and is flushed when the guard goes away.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;

/// Keeps the file sink alive.
///
/// Dropping it flushes any buffered entries and closes the log file. Hold it in
/// `main` until the process is about to return.
#[must_use = "The LogFileGuard must be kept alive for file logging to work and flush on exit"]
pub struct LogFileGuard {
  path: PathBuf,
  _worker: WorkerGuard,
}

impl LogFileGuard {
  pub(crate) fn new(path: PathBuf, worker: WorkerGuard) -> Self {
    Self {
      path,
      _worker: worker,
    }
  }

  /// Location of the log file created for this run.
  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl std::fmt::Debug for LogFileGuard {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("LogFileGuard")
      .field("path", &self.path)
      .finish_non_exhaustive()
  }
}
