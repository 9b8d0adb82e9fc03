//! Keystroke injection requests.
//!
//! A request is either literal text (sent with `send-keys -l`) or a single
//! key from a fixed allow-list.

use std::fmt;
use std::str::FromStr;

use super::error::{TmuxError, TmuxResult};

/// Maximum number of characters of literal text per request.
pub const MAX_TEXT_LEN: usize = 512;

/// Special keys that may be injected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKey {
    Enter,
    Escape,
    Tab,
    Backspace,
    Space,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    CtrlC,
    CtrlD,
    CtrlL,
    CtrlZ,
}

impl SpecialKey {
    pub const ALL: [SpecialKey; 17] = [
        SpecialKey::Enter,
        SpecialKey::Escape,
        SpecialKey::Tab,
        SpecialKey::Backspace,
        SpecialKey::Space,
        SpecialKey::Up,
        SpecialKey::Down,
        SpecialKey::Left,
        SpecialKey::Right,
        SpecialKey::Home,
        SpecialKey::End,
        SpecialKey::PageUp,
        SpecialKey::PageDown,
        SpecialKey::CtrlC,
        SpecialKey::CtrlD,
        SpecialKey::CtrlL,
        SpecialKey::CtrlZ,
    ];

    /// Key name as understood by `tmux send-keys`.
    pub fn tmux_name(self) -> &'static str {
        match self {
            SpecialKey::Enter => "Enter",
            SpecialKey::Escape => "Escape",
            SpecialKey::Tab => "Tab",
            SpecialKey::Backspace => "BSpace",
            SpecialKey::Space => "Space",
            SpecialKey::Up => "Up",
            SpecialKey::Down => "Down",
            SpecialKey::Left => "Left",
            SpecialKey::Right => "Right",
            SpecialKey::Home => "Home",
            SpecialKey::End => "End",
            SpecialKey::PageUp => "PPage",
            SpecialKey::PageDown => "NPage",
            SpecialKey::CtrlC => "C-c",
            SpecialKey::CtrlD => "C-d",
            SpecialKey::CtrlL => "C-l",
            SpecialKey::CtrlZ => "C-z",
        }
    }
}

impl fmt::Display for SpecialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tmux_name())
    }
}

impl FromStr for SpecialKey {
    type Err = TmuxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.tmux_name() == s)
            .ok_or_else(|| TmuxError::InvalidKeys(format!("special key {:?} is not allowed", s)))
    }
}

/// A validated keystroke injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInput {
    Text(String),
    Special(SpecialKey),
}

impl KeyInput {
    /// Validate a request carrying exactly one of `text` or `special`.
    pub fn from_parts(text: Option<&str>, special: Option<&str>) -> TmuxResult<Self> {
        let text = text.filter(|t| !t.is_empty());
        let special = special.filter(|s| !s.is_empty());

        match (text, special) {
            (Some(_), Some(_)) => Err(TmuxError::InvalidKeys(
                "provide either text or a special key, not both".to_string(),
            )),
            (None, None) => Err(TmuxError::InvalidKeys(
                "provide text or a special key".to_string(),
            )),
            (Some(text), None) => {
                let len = text.chars().count();
                if len > MAX_TEXT_LEN {
                    return Err(TmuxError::InvalidKeys(format!(
                        "text is {} characters, maximum is {}",
                        len, MAX_TEXT_LEN
                    )));
                }
                Ok(KeyInput::Text(text.to_string()))
            }
            (None, Some(name)) => Ok(KeyInput::Special(name.parse()?)),
        }
    }

    /// Arguments for `tmux`, target included.
    pub(crate) fn to_args(&self, target: Option<&str>) -> Vec<String> {
        let mut args = vec!["send-keys".to_string()];
        if matches!(self, KeyInput::Text(_)) {
            args.push("-l".to_string());
        }
        if let Some(target) = target {
            args.push("-t".to_string());
            args.push(target.to_string());
        }
        match self {
            KeyInput::Text(text) => args.push(text.clone()),
            KeyInput::Special(key) => args.push(key.tmux_name().to_string()),
        }
        args
    }
}
