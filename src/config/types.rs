//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::capture::{CaptureOptions, MAX_LINES, MIN_LINES};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tmux: TmuxConfig,
    #[serde(default)]
    pub capture: CaptureConfig,
}

/// How the tmux binary is invoked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TmuxConfig {
    /// Program name or path of the tmux binary
    #[serde(default = "default_binary")]
    pub binary: String,
    /// Per-invocation timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

pub fn default_binary() -> String {
    "tmux".to_string()
}

pub fn default_timeout_secs() -> u64 {
    5
}

impl Default for TmuxConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TmuxConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Capture defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Lines of history to capture, counted up from the bottom of the pane
    #[serde(default = "default_lines")]
    pub lines: u32,
    /// Drop trailing lines with no visible text
    #[serde(default = "default_trim_trailing_blank")]
    pub trim_trailing_blank: bool,
}

pub fn default_lines() -> u32 {
    80
}

pub fn default_trim_trailing_blank() -> bool {
    true
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            lines: default_lines(),
            trim_trailing_blank: default_trim_trailing_blank(),
        }
    }
}

impl CaptureConfig {
    /// Capture options, with `lines` overridden when given.
    pub fn options(&self, lines: Option<u32>) -> CaptureOptions {
        CaptureOptions {
            lines: lines.unwrap_or(self.lines),
            trim_trailing_blank: self.trim_trailing_blank,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns `Ok(())` if all values are within acceptable bounds,
    /// or an error describing the first invalid value found.
    pub fn validate(&self) -> Result<(), String> {
        if self.tmux.binary.trim().is_empty() {
            return Err("tmux.binary must not be empty".to_string());
        }
        if self.tmux.timeout_secs == 0 {
            return Err("tmux.timeout_secs must be > 0".to_string());
        }
        if self.tmux.timeout_secs > 300 {
            return Err(format!(
                "tmux.timeout_secs {} exceeds maximum (300)",
                self.tmux.timeout_secs
            ));
        }
        if !(MIN_LINES..=MAX_LINES).contains(&self.capture.lines) {
            return Err(format!(
                "capture.lines {} must be between {} and {}",
                self.capture.lines, MIN_LINES, MAX_LINES
            ));
        }
        Ok(())
    }
}
