use crate::config::DEFAULT_CONFIG_PATH;

use clap::Parser;
use prototaip_logging::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "prototaip", version, about = "Arrowhead adapter entry point")]
pub struct Cli {
  /// Path for the config file (relative to the application)
  #[arg(short = 'c', long = "config", value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
  pub config: PathBuf,

  /// Turn on debug mode for logging
  #[arg(short = 'D', long = "debug")]
  pub debug: bool,
}

impl Cli {
  /// Minimum log severity selected by the flags.
  pub fn level(&self) -> LevelFilter {
    if self.debug {
      LevelFilter::DEBUG
    } else {
      LevelFilter::INFO
    }
  }
}
