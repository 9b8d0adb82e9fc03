//! `tpulse config` subcommands

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::tpulse;

#[test]
fn config_path_honors_flag() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");

    tpulse()
        .arg("--config")
        .arg(&path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn config_init_writes_defaults_once() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tpulse").join("config.toml");

    tpulse()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[tmux]"));
    assert!(written.contains("lines = 80"));

    tpulse()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    tpulse()
        .arg("--config")
        .arg(&path)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_prints_effective_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[capture]\nlines = 120\n").unwrap();

    tpulse()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lines = 120"))
        .stdout(predicate::str::contains("binary = \"tmux\""));
}

#[test]
fn invalid_config_is_reported() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[tmux]\ntimeout_secs = 0\n").unwrap();

    tpulse()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}
