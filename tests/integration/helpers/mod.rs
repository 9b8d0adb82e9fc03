//! Helpers for driving the tpulse binary

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// The tpulse binary with a clean, colorless environment.
pub fn tpulse() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tpulse"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Path to a checked-in fixture.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Write a config file pointing at `binary` and return its path.
pub fn write_config(dir: &Path, binary: &Path) -> PathBuf {
    let path = dir.join("config.toml");
    let contents = format!(
        "[tmux]\nbinary = {:?}\ntimeout_secs = 5\n\n[capture]\nlines = 40\n",
        binary.display().to_string()
    );
    fs::write(&path, contents).expect("Failed to write config");
    path
}

/// Install a shell script that stands in for tmux.
///
/// It answers `capture-pane`, `display-message` and `list-sessions` with
/// canned output and appends every invocation to `calls.log` next to it.
#[cfg(unix)]
pub fn fake_tmux(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let log = dir.join("calls.log");
    let script = format!(
        r#"#!/bin/sh
echo "$@" >> '{log}'
case "$1" in
  capture-pane) printf '\033[1;32mready\033[0m\n\n' ;;
  display-message) echo 'dev|1|shell|%4' ;;
  list-sessions) echo 'dev|1|1' ;;
  send-keys) ;;
  *) echo "unknown command: $1" >&2; exit 1 ;;
esac
"#,
        log = log.display()
    );

    let path = dir.join("tmux");
    fs::write(&path, script).expect("Failed to write fake tmux");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to chmod fake tmux");
    path
}

/// Invocations recorded by [`fake_tmux`].
pub fn recorded_calls(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("calls.log"))
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
