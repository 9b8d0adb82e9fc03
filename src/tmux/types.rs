//! tmux metadata types.

use serde::{Deserialize, Serialize};

/// Identity of the captured pane, sent alongside the parsed lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneInfo {
    #[serde(rename = "session")]
    pub session_name: String,
    #[serde(rename = "winIndex")]
    pub window_index: u32,
    #[serde(rename = "winName")]
    pub window_name: String,
    #[serde(rename = "paneId")]
    pub pane_id: String,
}

/// One entry of `tmux list-sessions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub name: String,
    pub windows: u32,
    pub attached: bool,
}
