//! Health command handler

use anyhow::Result;

use tpulse::{Config, Health};

use super::print_json;

/// Print hostname and tmux availability.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config) -> Result<()> {
    print_json(&Health::check(&config.tmux()), false)
}
