// Creation of the per-run log file: directory normalization, directory
// creation and the timestamp-based file name.

use crate::error::{Error, Result};

use chrono::{DateTime, SecondsFormat, TimeZone};
use std::{
  fs::{self, File},
  io,
  path::{Path, PathBuf},
};

/// Permission bits for newly created log directories.
#[cfg(unix)]
const LOG_DIR_MODE: u32 = 0o770;

const LOG_FILE_SUFFIX: &str = ".log";

/// Settings for the file sink, independent of how the application stores them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSinkConfig {
  /// Directory the log file is created in, as written in the configuration.
  pub directory: String,
}

impl FileSinkConfig {
  pub fn new(directory: impl Into<String>) -> Self {
    Self {
      directory: directory.into(),
    }
  }
}

/// Strips exactly one leading and one trailing `/` from a configured directory.
///
/// This is a literal trim: repeated separators are left alone, so `//a//` becomes
/// `/a/`. An empty result stays empty and is rejected by the directory step.
pub fn normalize_log_dir(configured: &str) -> PathBuf {
  let trimmed = configured.strip_prefix('/').unwrap_or(configured);
  let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
  PathBuf::from(trimmed)
}

/// Renders `timestamp` as RFC 3339 with nanosecond precision and trailing zeros
/// of the fraction removed, then appends `.log`.
///
/// Example: `2024-05-01T12:00:00.123456789Z.log`, `2024-05-01T12:00:00.5+02:00.log`.
pub fn log_file_name<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
  Tz::Offset: std::fmt::Display,
{
  let full = timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true);
  // `full` always carries exactly nine fraction digits after the seconds.
  let (name, offset) = match full.find('.') {
    Some(dot) if full.len() >= dot + 10 => {
      let fraction = full[dot + 1..dot + 10].trim_end_matches('0');
      let mut name = full[..dot].to_string();
      if !fraction.is_empty() {
        name.push('.');
        name.push_str(fraction);
      }
      (name, &full[dot + 10..])
    }
    _ => (full.clone(), ""),
  };
  format!("{}{}{}", name, offset, LOG_FILE_SUFFIX)
}

/// Creates `dir` and any missing parents, with mode `0770` on unix.
///
/// An empty path names no directory and fails with `NotFound`.
pub(crate) fn create_log_dir(dir: &Path) -> Result<()> {
  if dir.as_os_str().is_empty() {
    return Err(Error::LogDirectory {
      path: dir.to_path_buf(),
      source: io::Error::new(io::ErrorKind::NotFound, "empty log directory path"),
    });
  }

  let mut builder = fs::DirBuilder::new();
  builder.recursive(true);
  #[cfg(unix)]
  {
    use std::os::unix::fs::DirBuilderExt;
    builder.mode(LOG_DIR_MODE);
  }

  builder.create(dir).map_err(|source| Error::LogDirectory {
    path: dir.to_path_buf(),
    source,
  })
}

/// Creates the log file for this run inside `dir`.
pub(crate) fn create_log_file(dir: &Path, file_name: &str) -> Result<(File, PathBuf)> {
  let path = dir.join(file_name);
  let file = File::create(&path).map_err(|source| Error::LogFile {
    path: path.clone(),
    source,
  })?;
  Ok((file, path))
}
