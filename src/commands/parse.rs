//! Parse command handler

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tpulse::parse_lines;

use super::print_json;

/// Parse a file (or stdin) and print the styled lines as JSON.
pub fn handle(file: Option<&Path>, pretty: bool) -> Result<()> {
    let raw = match file {
        Some(path) => {
            let bytes = fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
            String::from_utf8_lossy(&bytes).into_owned()
        }
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read stdin")?;
            String::from_utf8_lossy(&bytes).into_owned()
        }
    };

    print_json(&parse_lines(&raw), pretty)
}
