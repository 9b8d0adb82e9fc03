//! `tpulse parse` end to end

use predicates::prelude::*;

use crate::helpers::{fixture_path, tpulse};

#[test]
fn parse_reads_stdin() {
    tpulse()
        .arg("parse")
        .write_stdin("\x1b[31mred\x1b[0m plain\n")
        .assert()
        .success()
        .stdout("[[{\"t\":\"red\",\"fg\":\"red\"},{\"t\":\" plain\"}],[]]\n");
}

#[test]
fn parse_reads_file() {
    let output = tpulse()
        .arg("parse")
        .arg(fixture_path("pane.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc.as_array().unwrap().len(), 4);
    assert_eq!(
        doc[2],
        serde_json::json!([{"t": " NORMAL ", "fg": "_defBg", "bg": "_defFg"}])
    );
}

#[test]
fn parse_pretty_prints() {
    tpulse()
        .args(["parse", "--pretty"])
        .write_stdin("\x1b[38;2;1;2;3mrgb")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fg\": \"#010203\""))
        .stdout(predicate::str::contains("\n  [\n"));
}

#[test]
fn parse_tolerates_invalid_utf8() {
    tpulse()
        .arg("parse")
        .write_stdin(vec![b'o', b'k', 0xff])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[[{\"t\":\"ok\u{fffd}\"}]]"));
}

#[test]
fn parse_missing_file_fails() {
    tpulse()
        .args(["parse", "/nonexistent/capture.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
