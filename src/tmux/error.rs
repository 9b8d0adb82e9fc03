//! tmux bridge errors.

use std::time::Duration;

/// Errors surfaced by the tmux bridge.
#[derive(Debug, thiserror::Error)]
pub enum TmuxError {
    #[error("Invalid tmux target: {0:?}")]
    InvalidTarget(String),

    #[error("Invalid key request: {0}")]
    InvalidKeys(String),

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("tmux timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Exit(String),

    #[error("Unexpected tmux output: {0:?}")]
    UnexpectedOutput(String),
}

/// Result type for tmux bridge operations.
pub type TmuxResult<T> = Result<T, TmuxError>;
