//! `prototaip_logging` - startup logging for the prototaip adapter.
//!
//! The process installs one `tracing` subscriber as early as possible, with the
//! minimum severity fixed at that point so every later diagnostic honors it.
//! The subscriber writes human-readable lines to standard output and carries an
//! empty, reloadable slot for a file sink. Once the application configuration
//! is known, [`LoggingHandle::attach_file_sink`] fills that slot with a JSON
//! lines writer targeting a freshly created, timestamp-named file.
//!
//! ```no_run
//! use prototaip_logging::{init, FileSinkConfig, LevelFilter};
//!
//! let logging = init(LevelFilter::INFO).expect("logger already installed");
//! let _guard = logging
//!   .attach_file_sink(&FileSinkConfig::new("/var/log/app/"))
//!   .expect("log file could not be created");
//! tracing::info!("goes to stdout and to var/log/app/<timestamp>.log");
//! ```

pub mod error;
pub mod file_sink;
pub mod guards;
pub mod init;

pub use error::{Error, Result};
pub use file_sink::{log_file_name, normalize_log_dir, FileSinkConfig};
pub use guards::LogFileGuard;
pub use init::{build_subscriber, init, LoggingHandle};
pub use tracing_core::metadata::LevelFilter;
