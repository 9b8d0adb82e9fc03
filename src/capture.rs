//! Pane snapshots.
//!
//! Ties the tmux bridge to the interpreter: capture raw pane text, parse
//! it, and package it with a content hash, pane identity and timestamp for
//! the rendering client.

use chrono::Utc;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::ansi::{parse_lines, Document};
use crate::tmux::{CommandRunner, PaneInfo, Tmux, TmuxResult};

/// Number of hex digits of the SHA-256 kept in [`Snapshot::hash`].
pub const HASH_LEN: usize = 16;

/// Smallest accepted capture depth.
pub const MIN_LINES: u32 = 1;
/// Largest accepted capture depth.
pub const MAX_LINES: u32 = 500;

/// A parsed capture of one pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub raw: String,
    pub hash: String,
    pub pane: Option<PaneInfo>,
    pub parsed_lines: Document,
    pub ts: String,
}

/// Snapshot of one session's active pane, or why it could not be taken.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Snapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// How much to capture and how to post-process it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOptions {
    pub lines: u32,
    pub trim_trailing_blank: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            lines: 80,
            trim_trailing_blank: true,
        }
    }
}

/// Short content hash used by clients to skip unchanged frames.
pub fn content_hash(raw: &str) -> String {
    let digest = Sha256::digest(raw.as_bytes());
    let mut hex = String::with_capacity(HASH_LEN);
    for byte in digest.iter().take(HASH_LEN / 2) {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

/// Drop trailing lines that have no visible text.
pub fn trim_trailing_blank(doc: &mut Document) {
    while doc
        .last()
        .is_some_and(|line| line.iter().all(|run| run.text.trim().is_empty()))
    {
        doc.pop();
    }
}

/// Build a snapshot from already-captured text.
pub fn build_snapshot(raw: String, pane: Option<PaneInfo>, trim: bool) -> Snapshot {
    let mut parsed_lines = parse_lines(&raw);
    if trim {
        trim_trailing_blank(&mut parsed_lines);
    }
    Snapshot {
        hash: content_hash(&raw),
        raw,
        pane,
        parsed_lines,
        ts: Utc::now().to_rfc3339(),
    }
}

/// Capture, parse and package one pane.
///
/// A failing capture is an error; failing pane metadata only leaves
/// `pane` empty.
pub fn snapshot<R: CommandRunner>(
    tmux: &Tmux<R>,
    options: &CaptureOptions,
    target: Option<&str>,
) -> TmuxResult<Snapshot> {
    let raw = tmux.capture_pane(options.lines, target)?;
    let pane = match tmux.pane_info(target) {
        Ok(pane) => Some(pane),
        Err(e) => {
            warn!(error = %e, "Pane info unavailable");
            None
        }
    };
    debug!(bytes = raw.len(), "Captured pane");
    Ok(build_snapshot(raw, pane, options.trim_trailing_blank))
}

/// Snapshot the active pane of every session, in parallel.
///
/// Per-session failures are reported in place.
pub fn snapshot_all<R: CommandRunner>(
    tmux: &Tmux<R>,
    options: &CaptureOptions,
) -> TmuxResult<Vec<SessionSnapshot>> {
    let sessions = tmux.list_sessions()?;

    Ok(sessions
        .into_par_iter()
        .map(|session| match snapshot(tmux, options, Some(&session.name)) {
            Ok(snap) => SessionSnapshot {
                session: session.name,
                snapshot: Some(snap),
                error: None,
            },
            Err(e) => SessionSnapshot {
                session: session.name,
                snapshot: None,
                error: Some(e.to_string()),
            },
        })
        .collect())
}
