//! Capture command handlers

use anyhow::{Context, Result};

use tpulse::capture::{snapshot, snapshot_all};
use tpulse::Config;

use super::print_json;

/// Capture one pane and print its snapshot.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config: &Config,
    lines: Option<u32>,
    target: Option<&str>,
    pretty: bool,
) -> Result<()> {
    let tmux = config.tmux();
    let options = config.capture.options(lines);
    let snap = snapshot(&tmux, &options, target).context("Capture failed")?;
    print_json(&snap, pretty)
}

/// Capture every session's active pane and print all snapshots.
#[cfg(not(tarpaulin_include))]
pub fn handle_all(config: &Config, lines: Option<u32>, pretty: bool) -> Result<()> {
    let tmux = config.tmux();
    let options = config.capture.options(lines);
    let snaps = snapshot_all(&tmux, &options).context("Failed to list sessions")?;
    print_json(&snaps, pretty)
}
