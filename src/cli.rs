//! CLI definitions for tpulse
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::capture::{MAX_LINES, MIN_LINES};

/// Build clap styles.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Version string, with the git SHA appended for dev builds.
pub fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if !cfg!(feature = "release") => {
            format!("{} ({})", env!("CARGO_PKG_VERSION"), sha)
        }
        _ => env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn lines_parser() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(MIN_LINES as i64..=MAX_LINES as i64)
}

#[derive(Parser)]
#[command(name = "tpulse")]
#[command(about = "[ Terminal Pulse ] - watch and drive tmux panes from anywhere")]
#[command(
    long_about = "Terminal Pulse (tpulse) - capture tmux panes as structured, styled text.

tpulse reads pane contents with their ANSI styling intact, converts the
escape sequences into lines of styled runs (JSON), and can send a limited
set of keystrokes back to a pane.

QUICK START:
    tpulse capture                 Snapshot the current pane
    tpulse capture -t work:1       Snapshot a specific pane
    tpulse sessions                List tmux sessions
    tpulse send --key Enter        Press Enter in the current pane
    tmux capture-pane -ep | tpulse parse
                                   Parse any captured text"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, help = "Config file (default: ~/.config/tpulse/config.toml)")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse captured text into styled lines
    #[command(long_about = "Parse text containing ANSI escape sequences into styled runs.

Reads FILE, or stdin when FILE is omitted, and prints one JSON array per
input line. Each run is an object with the text in \"t\" and optional
\"fg\", \"bg\", \"b\", \"d\", \"i\", \"u\" style fields.

EXAMPLES:
    tmux capture-pane -ep | tpulse parse
    tpulse parse capture.txt --pretty")]
    Parse {
        /// Input file (stdin if omitted)
        #[arg(help = "Input file (stdin if omitted)")]
        file: Option<PathBuf>,
        /// Pretty-print JSON
        #[arg(long, help = "Pretty-print JSON")]
        pretty: bool,
    },

    /// Capture and parse a pane
    #[command(long_about = "Capture a tmux pane and print a snapshot.

The snapshot contains the raw capture, a short content hash, the pane's
session/window identity, the parsed lines and a UTC timestamp.

EXAMPLES:
    tpulse capture
    tpulse capture --lines 200 --target work:2.1")]
    Capture {
        /// Lines of history to capture
        #[arg(long, short, value_parser = lines_parser(), help = "Lines to capture (1-500)")]
        lines: Option<u32>,
        /// tmux target pane
        #[arg(long, short, help = "tmux target, e.g. session:window.pane")]
        target: Option<String>,
        /// Pretty-print JSON
        #[arg(long, help = "Pretty-print JSON")]
        pretty: bool,
    },

    /// Capture the active pane of every session
    #[command(name = "snapshot-all")]
    SnapshotAll {
        /// Lines of history to capture
        #[arg(long, short, value_parser = lines_parser(), help = "Lines to capture (1-500)")]
        lines: Option<u32>,
        /// Pretty-print JSON
        #[arg(long, help = "Pretty-print JSON")]
        pretty: bool,
    },

    /// List tmux sessions
    #[command(visible_alias = "ls")]
    Sessions {
        /// Pretty-print JSON
        #[arg(long, help = "Pretty-print JSON")]
        pretty: bool,
    },

    /// Send keys to a pane
    #[command(long_about = "Send literal text or one special key to a tmux pane.

Exactly one of --text or --key is required. Text is limited to 512
characters and is sent literally. Allowed keys: Enter, Escape, Tab,
BSpace, Space, Up, Down, Left, Right, Home, End, PPage, NPage, C-c,
C-d, C-l, C-z.

EXAMPLES:
    tpulse send --text 'git status'
    tpulse send --key Enter --target work:1")]
    Send {
        /// Literal text to type
        #[arg(long, help = "Literal text to type")]
        text: Option<String>,
        /// Special key name
        #[arg(long, help = "Special key name (e.g. Enter, C-c)")]
        key: Option<String>,
        /// tmux target pane
        #[arg(long, short, help = "tmux target, e.g. session:window.pane")]
        target: Option<String>,
    },

    /// Report hostname and tmux availability
    Health,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum, help = "Shell to generate completions for")]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
