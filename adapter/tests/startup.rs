use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const STARTED: &str = "Application has been started!";
const CONFIG_DUMP: &str = "Config file has been successfully read!";

fn prototaip_bin() -> PathBuf {
  PathBuf::from(env!("CARGO_BIN_EXE_prototaip"))
}

fn config_yaml(to_file: bool, path: &str) -> String {
  format!(
    r#"log:
  to-file: {}
  path: "{}"
systems:
  service-registry:
    Addr: "127.0.0.1"
    Port: 8443
  Authorizator:
    Addr: "127.0.0.1"
    Port: 8445
  Orchestrator:
    Addr: "127.0.0.1"
    Port: 8441
"#,
    to_file, path
  )
}

/// Runs the binary with `workdir` as its working directory.
fn run_in(workdir: &Path, args: &[&str]) -> Output {
  Command::new(prototaip_bin())
    .current_dir(workdir)
    .args(args)
    .output()
    .expect("Failed to run prototaip")
}

fn stdout_of(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).into_owned()
}

fn entries_of(dir: &Path) -> Vec<PathBuf> {
  let mut entries: Vec<PathBuf> = fs::read_dir(dir)
    .unwrap()
    .map(|entry| entry.unwrap().path())
    .collect();
  entries.sort();
  entries
}

#[test]
fn starts_with_console_logging_only() {
  let workdir = TempDir::new().unwrap();
  fs::write(workdir.path().join("config.yml"), config_yaml(false, "/logs/")).unwrap();

  // No -c: the default path is config.yml in the working directory.
  let output = run_in(workdir.path(), &[]);

  assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
  assert!(stdout_of(&output).contains(STARTED));
  assert_eq!(entries_of(workdir.path()), vec![workdir.path().join("config.yml")]);
}

#[test]
fn file_logging_creates_timestamped_file_under_trimmed_path() {
  let workdir = TempDir::new().unwrap();
  fs::write(workdir.path().join("app.yml"), config_yaml(true, "/var/log/app/")).unwrap();

  let output = run_in(workdir.path(), &["-c", "app.yml"]);
  assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
  assert!(stdout_of(&output).contains(STARTED));

  let log_dir = workdir.path().join("var").join("log").join("app");
  assert!(log_dir.is_dir());

  let files = entries_of(&log_dir);
  assert_eq!(files.len(), 1);
  let name = files[0].file_name().unwrap().to_str().unwrap().to_string();
  let stamp = name.strip_suffix(".log").expect("Log file must end in .log");
  // e.g. 2024-05-01T12:00:00.123456789Z
  assert_eq!(&stamp[4..5], "-");
  assert_eq!(&stamp[10..11], "T");
  assert!(stamp.ends_with('Z') || stamp.contains('+') || stamp[19..].contains('-'));

  let contents = fs::read_to_string(&files[0]).unwrap();
  assert!(contents.contains(STARTED));
  assert!(contents.lines().all(|line| line.starts_with('{')));
}

#[test]
fn missing_config_fails_before_bootstrap() {
  let workdir = TempDir::new().unwrap();

  let output = run_in(workdir.path(), &["-c", "absent.yml"]);

  assert!(!output.status.success());
  let stdout = stdout_of(&output);
  assert!(stdout.contains("Config file cannot be opened!"));
  assert!(!stdout.contains(STARTED));
  assert!(entries_of(workdir.path()).is_empty());
}

#[test]
fn port_type_mismatch_fails_before_started() {
  let workdir = TempDir::new().unwrap();
  let config = config_yaml(true, "logs").replace("Port: 8443", "Port: \"not-a-port\"");
  fs::write(workdir.path().join("config.yml"), config).unwrap();

  let output = run_in(workdir.path(), &[]);

  assert!(!output.status.success());
  let stdout = stdout_of(&output);
  assert!(stdout.contains("Config file cannot be unmarshaled!"));
  assert!(!stdout.contains(STARTED));
  assert!(!workdir.path().join("logs").exists());
}

#[test]
fn unusable_log_directory_is_fatal() {
  let workdir = TempDir::new().unwrap();
  fs::write(workdir.path().join("blocker"), "regular file").unwrap();
  fs::write(workdir.path().join("config.yml"), config_yaml(true, "/blocker/logs/")).unwrap();

  let output = run_in(workdir.path(), &[]);

  assert!(!output.status.success());
  let stdout = stdout_of(&output);
  assert!(stdout.contains("Desired log directory cannot be used!"));
  assert!(!stdout.contains(STARTED));
}

#[test]
fn empty_log_path_is_fatal() {
  let workdir = TempDir::new().unwrap();
  fs::write(workdir.path().join("config.yml"), config_yaml(true, "/")).unwrap();

  let output = run_in(workdir.path(), &[]);

  assert!(!output.status.success());
  let stdout = stdout_of(&output);
  assert!(stdout.contains("Desired log directory cannot be used!"));
  assert!(!stdout.contains(STARTED));
  assert_eq!(entries_of(workdir.path()), vec![workdir.path().join("config.yml")]);
}

#[test]
fn debug_flag_controls_config_dump() {
  let workdir = TempDir::new().unwrap();
  fs::write(workdir.path().join("config.yml"), config_yaml(false, "logs")).unwrap();

  let quiet = run_in(workdir.path(), &[]);
  assert!(quiet.status.success());
  assert!(!stdout_of(&quiet).contains(CONFIG_DUMP));
  assert!(!stdout_of(&quiet).contains("config_file_path"));

  let verbose = run_in(workdir.path(), &["-D"]);
  assert!(verbose.status.success());
  let stdout = stdout_of(&verbose);
  assert!(stdout.contains(CONFIG_DUMP));
  assert!(stdout.contains("config_file_path"));
  assert!(stdout.contains(STARTED));
}

#[test]
fn unknown_flag_is_a_usage_error() {
  let workdir = TempDir::new().unwrap();

  let output = run_in(workdir.path(), &["--no-such-flag"]);

  assert_eq!(output.status.code(), Some(2));
  assert!(entries_of(workdir.path()).is_empty());
}
