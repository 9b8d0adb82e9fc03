//! Unit tests for pane snapshots

use tpulse::ansi::{NamedColor, Run};
use tpulse::capture::{build_snapshot, content_hash, snapshot, snapshot_all, CaptureOptions};
use tpulse::tmux::{PaneInfo, Tmux, TmuxError};

use crate::helpers::{load_fixture, ScriptedRunner};

#[test]
fn snapshot_packages_capture_and_pane() {
    let raw = load_fixture("pane.txt");
    let runner = ScriptedRunner::new()
        .reply("capture-pane", &raw)
        .reply("display-message", "dev|0|editor|%1\n");
    let tmux = Tmux::with_runner("tmux", runner);

    let snap = snapshot(&tmux, &CaptureOptions::default(), Some("dev")).unwrap();

    assert_eq!(snap.raw, raw);
    assert_eq!(snap.hash, content_hash(&raw));
    assert_eq!(
        snap.pane,
        Some(PaneInfo {
            session_name: "dev".to_string(),
            window_index: 0,
            window_name: "editor".to_string(),
            pane_id: "%1".to_string(),
        })
    );
    // Trailing empty line trimmed
    assert_eq!(snap.parsed_lines.len(), 3);
    assert_eq!(
        snap.parsed_lines[0][2].fg,
        Some(NamedColor::Green.into())
    );
}

#[test]
fn snapshot_uses_requested_depth() {
    let runner = ScriptedRunner::new()
        .reply("capture-pane", "x")
        .reply("display-message", "s|0|w|%0");
    let tmux = Tmux::with_runner("tmux", runner);
    let options = CaptureOptions {
        lines: 500,
        trim_trailing_blank: false,
    };

    snapshot(&tmux, &options, None).unwrap();

    let capture = &tmux.runner().calls_to("capture-pane")[0];
    assert!(capture.contains(&"-500".to_string()));
}

#[test]
fn snapshot_without_pane_info_still_succeeds() {
    let runner = ScriptedRunner::new()
        .reply("capture-pane", "hello")
        .fail("display-message", "can't find pane");
    let tmux = Tmux::with_runner("tmux", runner);

    let snap = snapshot(&tmux, &CaptureOptions::default(), None).unwrap();

    assert!(snap.pane.is_none());
    assert_eq!(snap.parsed_lines, vec![vec![Run::plain("hello")]]);
}

#[test]
fn snapshot_fails_when_capture_fails() {
    let runner = ScriptedRunner::new().fail("capture-pane", "can't find session: nope");
    let tmux = Tmux::with_runner("tmux", runner);

    let err = snapshot(&tmux, &CaptureOptions::default(), Some("nope")).unwrap_err();

    assert!(matches!(err, TmuxError::Exit(ref msg) if msg.contains("nope")));
}

#[test]
fn snapshot_all_reports_each_session() {
    let runner = ScriptedRunner::new()
        .reply("list-sessions", "alpha|1|1\nbeta|2|0\n")
        .reply_for("capture-pane", "alpha", "\x1b[31mA\x1b[0m")
        .fail_for("capture-pane", "beta", "pane is dead")
        .reply_for("display-message", "alpha", "alpha|0|zsh|%0");
    let tmux = Tmux::with_runner("tmux", runner);

    let snaps = snapshot_all(&tmux, &CaptureOptions::default()).unwrap();

    assert_eq!(snaps.len(), 2);
    let alpha = snaps.iter().find(|s| s.session == "alpha").unwrap();
    let beta = snaps.iter().find(|s| s.session == "beta").unwrap();

    let alpha_snap = alpha.snapshot.as_ref().unwrap();
    assert_eq!(alpha_snap.parsed_lines[0][0].fg, Some(NamedColor::Red.into()));
    assert!(alpha.error.is_none());

    assert!(beta.snapshot.is_none());
    assert_eq!(beta.error.as_deref(), Some("pane is dead"));
}

#[test]
fn snapshot_all_fails_without_server() {
    let runner = ScriptedRunner::new().fail("list-sessions", "no server running");
    let tmux = Tmux::with_runner("tmux", runner);
    assert!(snapshot_all(&tmux, &CaptureOptions::default()).is_err());
}

#[test]
fn snapshot_json_shape() {
    let snap = build_snapshot("\x1b[1mhi".to_string(), None, true);
    let value = serde_json::to_value(&snap).unwrap();

    assert_eq!(value["raw"], "\x1b[1mhi");
    assert_eq!(value["hash"].as_str().unwrap().len(), 16);
    assert!(value["pane"].is_null());
    assert_eq!(
        value["parsed_lines"],
        serde_json::json!([[{"t": "hi", "b": true}]])
    );
    assert!(value["ts"].is_string());
}

#[test]
fn identical_captures_share_a_hash() {
    let a = build_snapshot("same".to_string(), None, true);
    let b = build_snapshot("same".to_string(), None, false);
    let c = build_snapshot("different".to_string(), None, true);
    assert_eq!(a.hash, b.hash);
    assert_ne!(a.hash, c.hash);
}
