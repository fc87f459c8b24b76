//! `prototaip` - entry point of the Arrowhead adapter.
//!
//! Startup is a straight line: parse flags, install the console logger at the
//! requested level, load the core system configuration, optionally add a file
//! sink, announce the start and hand over to the service registration
//! extension point. Every failure is returned to `main`, which reports it once
//! and exits with a non-zero status.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod registry;

pub use app::{run, start, Session};
pub use cli::Cli;
pub use config::{load_config, AppConfig, CoreSystem, LogSettings, Systems};
pub use error::{Error, Result};
