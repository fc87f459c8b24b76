// Structs mapping the YAML configuration file one to one.
//
// Nothing is validated here. Missing keys fall back to zero values and unknown
// keys are ignored, so a partial file still loads.

use prototaip_logging::FileSinkConfig;
use serde::{Deserialize, Serialize};

// --- Top Level Config ---
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
  pub log: LogSettings,
  pub systems: Systems,
}

// --- Log Settings ---
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
  /// If set, log entries are written to a file as well as to the console.
  #[serde(rename = "to-file")]
  pub to_file: bool,
  /// Directory for the log file. One leading and one trailing `/` are ignored.
  pub path: String,
}

impl LogSettings {
  /// The logging crate's view of these settings.
  pub fn file_sink(&self) -> FileSinkConfig {
    FileSinkConfig::new(self.path.clone())
  }
}

// --- Core Systems ---
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Systems {
  #[serde(rename = "service-registry")]
  pub service_registry: CoreSystem,
  #[serde(rename = "Authorizator", alias = "authorizator")]
  pub authorizator: CoreSystem,
  #[serde(rename = "Orchestrator", alias = "orchestrator")]
  pub orchestrator: CoreSystem,
}

/// Where a core system can be reached.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreSystem {
  #[serde(rename = "Addr", alias = "addr")]
  pub addr: String,
  #[serde(rename = "Port", alias = "port")]
  pub port: i64,
}

impl CoreSystem {
  /// `addr:port`, for diagnostics.
  pub fn endpoint(&self) -> String {
    format!("{}:{}", self.addr, self.port)
  }
}
