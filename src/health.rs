//! Host and tmux liveness report.

use serde::{Deserialize, Serialize};

use crate::tmux::{CommandRunner, Tmux};

/// Liveness payload for monitoring clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub hostname: String,
    pub tmux: bool,
}

impl Health {
    /// Probe the tmux server and report the local hostname.
    pub fn check<R: CommandRunner>(tmux: &Tmux<R>) -> Self {
        Self {
            status: "ok".to_string(),
            hostname: hostname(),
            tmux: tmux.has_tmux(),
        }
    }
}

/// Local hostname, or an empty string when it cannot be read.
#[cfg(unix)]
pub fn hostname() -> String {
    let mut buf = [0u8; 256];
    // SAFETY: buf is valid for buf.len() bytes; gethostname writes at most that many.
    let ret = unsafe { libc::gethostname(buf.as_mut_ptr() as *mut libc::c_char, buf.len()) };
    if ret != 0 {
        return String::new();
    }
    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..len]).into_owned()
}

#[cfg(not(unix))]
pub fn hostname() -> String {
    std::env::var("COMPUTERNAME").unwrap_or_default()
}
