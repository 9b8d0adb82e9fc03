//! tmux target validation.
//!
//! Targets are passed straight to `tmux -t`, so only the characters tmux
//! target syntax needs (`session:window.pane`, `%pane_id`) are accepted.

use super::error::{TmuxError, TmuxResult};

fn is_target_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '.' | '-' | '%')
}

/// Validate an optional target, passing `None` through.
pub fn validate_target(target: Option<&str>) -> TmuxResult<Option<&str>> {
    match target {
        None => Ok(None),
        Some(t) if !t.is_empty() && t.chars().all(is_target_char) => Ok(Some(t)),
        Some(t) => Err(TmuxError::InvalidTarget(t.to_string())),
    }
}
