//! Configuration management for tpulse

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::tmux::{ProcessRunner, Tmux};

impl Config {
    /// Get the config file path (~/.config/tpulse/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/tpulse)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit path, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Build a tmux client from the `[tmux]` section
    pub fn tmux(&self) -> Tmux<ProcessRunner> {
        Tmux::with_runner(
            self.tmux.binary.clone(),
            ProcessRunner::new(self.tmux.timeout()),
        )
    }
}
