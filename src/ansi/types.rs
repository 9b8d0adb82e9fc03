//! Parser data types.
//!
//! Contains the structures that flow through the SGR interpreter:
//! - NamedColor / Color: the 16 ANSI names, hex RGB, and the two
//!   reverse-video sentinels
//! - AttributeState: the style record mutated by SGR sequences
//! - Run, Line, Document: the output handed to the rendering client

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The 16 fixed ANSI color names, in palette order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    /// All named colors; index `n` is palette entry `n`.
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
        NamedColor::BrightBlack,
        NamedColor::BrightRed,
        NamedColor::BrightGreen,
        NamedColor::BrightYellow,
        NamedColor::BrightBlue,
        NamedColor::BrightMagenta,
        NamedColor::BrightCyan,
        NamedColor::BrightWhite,
    ];

    /// Wire token used by the rendering client.
    pub fn token(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
            NamedColor::BrightBlack => "brBlack",
            NamedColor::BrightRed => "brRed",
            NamedColor::BrightGreen => "brGreen",
            NamedColor::BrightYellow => "brYellow",
            NamedColor::BrightBlue => "brBlue",
            NamedColor::BrightMagenta => "brMagenta",
            NamedColor::BrightCyan => "brCyan",
            NamedColor::BrightWhite => "brWhite",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.token() == token)
    }
}

/// Wire token for [`Color::DefaultBackground`].
pub const DEFAULT_BG_TOKEN: &str = "_defBg";
/// Wire token for [`Color::DefaultForeground`].
pub const DEFAULT_FG_TOKEN: &str = "_defFg";

/// A color as carried by a run.
///
/// Serialized as a plain string: a color name, `#rrggbb`, or one of the
/// two sentinel tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Color {
    Named(NamedColor),
    /// RGB components. Values above 255 are kept as-is and written
    /// unpadded past two hex digits.
    Hex(u32, u32, u32),
    /// Paint with the viewer's default background (reverse video, no fg set).
    DefaultBackground,
    /// Paint with the viewer's default foreground (reverse video, no bg set).
    DefaultForeground,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(named) => f.write_str(named.token()),
            Color::Hex(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::DefaultBackground => f.write_str(DEFAULT_BG_TOKEN),
            Color::DefaultForeground => f.write_str(DEFAULT_FG_TOKEN),
        }
    }
}

/// Error returned when a string is not a recognized color token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized color token: {0:?}")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            DEFAULT_BG_TOKEN => return Ok(Color::DefaultBackground),
            DEFAULT_FG_TOKEN => return Ok(Color::DefaultForeground),
            _ => {}
        }
        if let Some(named) = NamedColor::from_token(s) {
            return Ok(Color::Named(named));
        }
        if let Some((r, g, b)) = s.strip_prefix('#').and_then(parse_hex_triple) {
            return Ok(Color::Hex(r, g, b));
        }
        Err(ColorParseError(s.to_string()))
    }
}

/// Split the digits of a `#rrggbb` token back into components.
///
/// In-range components are always two digits. A component above 255 is
/// written unpadded, so it is wider than two digits and has no leading
/// zero. When several splits satisfy that, the widest leading component
/// wins; any accepted split writes back to the same token.
fn parse_hex_triple(hex: &str) -> Option<(u32, u32, u32)> {
    let n = hex.len();
    if n < 6 || !hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return None;
    }

    let component = |digits: &str| {
        let value = u32::from_str_radix(digits, 16).ok()?;
        let canonical = digits.len() == 2 || (!digits.starts_with('0') && value > 0xff);
        canonical.then_some(value)
    };

    for r_len in (2..=n - 4).rev() {
        for g_len in (2..=n - r_len - 2).rev() {
            let (r, rest) = hex.split_at(r_len);
            let (g, b) = rest.split_at(g_len);
            if let (Some(r), Some(g), Some(b)) = (component(r), component(g), component(b)) {
                return Some((r, g, b));
            }
        }
    }
    None
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

/// Style attributes accumulated from SGR sequences.
///
/// `None` colors mean "terminal default". One instance lives for the
/// duration of a single [`parse_lines`](super::parse_lines) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttributeState {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl AttributeState {
    /// Create a state with no styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every attribute (SGR 0).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A fragment of literal text with one fixed style.
///
/// Only attributes that differ from "no styling" are serialized.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Run {
    #[serde(rename = "t")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<Color>,
    #[serde(rename = "b", default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(rename = "d", default, skip_serializing_if = "is_false")]
    pub dim: bool,
    #[serde(rename = "i", default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(rename = "u", default, skip_serializing_if = "is_false")]
    pub underline: bool,
}

impl Run {
    /// An unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// True when the run carries no style at all.
    pub fn is_plain(&self) -> bool {
        self.fg.is_none()
            && self.bg.is_none()
            && !self.bold
            && !self.dim
            && !self.italic
            && !self.underline
    }
}

/// Runs of one input line, left to right.
pub type Line = Vec<Run>;

/// One line per input line, top to bottom.
pub type Document = Vec<Line>;
