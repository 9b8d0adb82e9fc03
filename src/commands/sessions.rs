//! Sessions command handler

use anyhow::{Context, Result};
use serde::Serialize;

use tpulse::tmux::SessionInfo;
use tpulse::Config;

use super::print_json;

#[derive(Serialize)]
struct SessionList {
    sessions: Vec<SessionInfo>,
}

/// List tmux sessions as JSON.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, pretty: bool) -> Result<()> {
    let sessions = config
        .tmux()
        .list_sessions()
        .context("Failed to list sessions")?;
    print_json(&SessionList { sessions }, pretty)
}
