//! tmux bridge.
//!
//! Shells out to the `tmux` binary to capture panes, read pane and session
//! metadata, and inject keystrokes. Every call goes through a
//! [`CommandRunner`], so the bridge can be exercised without a tmux server.
//!
//! # Example
//!
//! ```ignore
//! use tpulse::tmux::Tmux;
//!
//! let tmux = Tmux::new();
//! let raw = tmux.capture_pane(80, Some("work:1"))?;
//! ```

mod error;
mod keys;
mod runner;
mod target;
mod types;

pub use error::{TmuxError, TmuxResult};
pub use keys::{KeyInput, SpecialKey, MAX_TEXT_LEN};
pub use runner::{CommandRunner, ProcessRunner};
pub use target::validate_target;
pub use types::{PaneInfo, SessionInfo};

use tracing::warn;

const PANE_FORMAT: &str = "#{session_name}|#{window_index}|#{window_name}|#{pane_id}";
const SESSION_FORMAT: &str = "#{session_name}|#{session_windows}|#{session_attached}";

/// Client for one tmux binary.
pub struct Tmux<R: CommandRunner = ProcessRunner> {
    binary: String,
    runner: R,
}

impl Tmux<ProcessRunner> {
    /// `tmux` from `PATH` with the default timeout.
    pub fn new() -> Self {
        Self::with_runner("tmux", ProcessRunner::default())
    }
}

impl Default for Tmux<ProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> Tmux<R> {
    pub fn with_runner(binary: impl Into<String>, runner: R) -> Self {
        Self {
            binary: binary.into(),
            runner,
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn run(&self, args: Vec<String>) -> TmuxResult<String> {
        self.runner.run(&self.binary, &args)
    }

    /// Capture the last `lines` lines of a pane with escapes preserved.
    ///
    /// `-e` keeps SGR sequences, `-J` joins wrapped lines.
    pub fn capture_pane(&self, lines: u32, target: Option<&str>) -> TmuxResult<String> {
        let target = validate_target(target)?;
        let mut args: Vec<String> = ["capture-pane", "-e", "-p", "-J", "-S"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        args.push(format!("-{}", lines));
        push_target(&mut args, target);
        self.run(args)
    }

    /// Session, window and pane identity of the current or given pane.
    pub fn pane_info(&self, target: Option<&str>) -> TmuxResult<PaneInfo> {
        let target = validate_target(target)?;
        let mut args = vec![
            "display-message".to_string(),
            "-p".to_string(),
            PANE_FORMAT.to_string(),
        ];
        push_target(&mut args, target);
        parse_pane_info(self.run(args)?.trim())
    }

    /// All sessions on the server.
    pub fn list_sessions(&self) -> TmuxResult<Vec<SessionInfo>> {
        let args = vec![
            "list-sessions".to_string(),
            "-F".to_string(),
            SESSION_FORMAT.to_string(),
        ];
        Ok(parse_sessions(&self.run(args)?))
    }

    /// Whether a tmux server is reachable.
    pub fn has_tmux(&self) -> bool {
        let args = vec![
            "list-sessions".to_string(),
            "-F".to_string(),
            "#{session_name}".to_string(),
        ];
        match self.run(args) {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "tmux not reachable");
                false
            }
        }
    }

    /// Inject keys into the current or given pane.
    pub fn send_keys(&self, input: &KeyInput, target: Option<&str>) -> TmuxResult<()> {
        let target = validate_target(target)?;
        self.run(input.to_args(target))?;
        Ok(())
    }
}

fn push_target(args: &mut Vec<String>, target: Option<&str>) {
    if let Some(target) = target {
        args.push("-t".to_string());
        args.push(target.to_string());
    }
}

fn parse_pane_info(out: &str) -> TmuxResult<PaneInfo> {
    let parts: Vec<&str> = out.splitn(4, '|').collect();
    match parts[..] {
        [session, index, window, pane] => Ok(PaneInfo {
            session_name: session.to_string(),
            window_index: index.parse().unwrap_or(0),
            window_name: window.to_string(),
            pane_id: pane.to_string(),
        }),
        _ => Err(TmuxError::UnexpectedOutput(out.to_string())),
    }
}

fn parse_sessions(out: &str) -> Vec<SessionInfo> {
    out.trim()
        .lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.splitn(3, '|').collect();
            match parts[..] {
                [name, windows, attached] => Some(SessionInfo {
                    name: name.to_string(),
                    windows: windows.parse().unwrap_or(0),
                    attached: attached == "1",
                }),
                _ => None,
            }
        })
        .collect()
}
