//! Terminal Pulse (tpulse) Library
//!
//! Turns tmux pane captures into structured, styled text for non-terminal
//! clients, and relays limited keyboard input back to tmux.

pub mod ansi;
pub mod capture;
pub mod cli;
pub mod config;
pub mod health;
pub mod tmux;

pub use ansi::{parse_line, parse_lines, AttributeState, Color, Document, Line, Run};
pub use capture::{CaptureOptions, Snapshot};
pub use config::Config;
pub use health::Health;
pub use tmux::{KeyInput, Tmux, TmuxError};
