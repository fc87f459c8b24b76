use clap::Parser;
use prototaip::{app, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
  let cli = Cli::parse();

  // The level has to be in place before anything else is logged.
  let logging = match prototaip_logging::init(cli.level()) {
    Ok(handle) => handle,
    Err(err) => {
      eprintln!("Logging cannot be initialized: {}", err);
      return ExitCode::FAILURE;
    }
  };

  // Held until main returns so the log file stays open for the whole run.
  let _session = match app::run(&cli, &logging) {
    Ok(session) => session,
    Err(err) => {
      tracing::error!(error = %err, "Application cannot be started!");
      return ExitCode::FAILURE;
    }
  };

  ExitCode::SUCCESS
}
