//! Config subcommands handler

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use tpulse::Config;

fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Show the effective configuration as TOML.
pub fn handle_show(config: &Config) -> Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

/// Print the config file location.
pub fn handle_path(path: Option<&Path>) -> Result<()> {
    println!("{}", resolve_path(path)?.display());
    Ok(())
}

/// Write a default config file.
pub fn handle_init(path: Option<&Path>, force: bool) -> Result<()> {
    let path = resolve_path(path)?;
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
