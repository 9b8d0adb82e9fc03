//! Send command handler

use anyhow::{Context, Result};

use tpulse::tmux::validate_target;
use tpulse::{Config, KeyInput};

/// Validate and inject keys into a pane.
///
/// The request and target are validated before tmux is invoked.
pub fn handle(
    config: &Config,
    text: Option<&str>,
    key: Option<&str>,
    target: Option<&str>,
) -> Result<()> {
    let input = KeyInput::from_parts(text, key)?;
    validate_target(target)?;

    config
        .tmux()
        .send_keys(&input, target)
        .context("Failed to send keys")?;
    tracing::info!(?input, ?target, "Sent keys");
    Ok(())
}
