//! SGR (Select Graphic Rendition) interpreter.
//!
//! Handles the parameters of `ESC [ ... m` sequences:
//! - Attributes (bold, dim, italic, underline, reverse) and their resets
//! - Standard and bright 16-color foreground/background
//! - 256-color (`38;5;n`) and RGB (`38;2;r;g;b`) extended colors
//!
//! Unknown codes are ignored without touching state.

use std::iter::Peekable;
use std::slice::Iter;

use tracing::trace;

use super::palette::{resolve_indexed, resolve_rgb};
use super::types::{AttributeState, Color, NamedColor};

/// Split an SGR body into numeric parameters.
///
/// Pieces that are not plain digits (including empty pieces) become 0,
/// which reads as a reset. Digit strings too large for `u32` saturate.
pub fn parse_params(body: &str) -> Vec<u32> {
    body.split(';').map(parse_param).collect()
}

fn parse_param(piece: &str) -> u32 {
    if !piece.is_empty() && piece.bytes().all(|b| b.is_ascii_digit()) {
        piece.parse().unwrap_or(u32::MAX)
    } else {
        0
    }
}

fn named(base: u32, code: u32, bright: bool) -> Color {
    let offset = if bright { 8 } else { 0 };
    Color::Named(NamedColor::ALL[(code - base) as usize + offset])
}

impl AttributeState {
    /// Apply SGR parameters in order.
    pub fn apply_sgr(&mut self, params: &[u32]) {
        let mut iter = params.iter().peekable();

        while let Some(&param) = iter.next() {
            match param {
                0 => self.reset(),
                1 => self.bold = true,
                2 => self.dim = true,
                3 => self.italic = true,
                4 => self.underline = true,
                7 => self.reverse = true,
                22 => {
                    self.bold = false;
                    self.dim = false;
                }
                23 => self.italic = false,
                24 => self.underline = false,
                27 => self.reverse = false,
                30..=37 => self.fg = Some(named(30, param, false)),
                38 => {
                    if let Some(color) = parse_extended_color(&mut iter) {
                        self.fg = Some(color);
                    }
                }
                39 => self.fg = None,
                40..=47 => self.bg = Some(named(40, param, false)),
                48 => {
                    if let Some(color) = parse_extended_color(&mut iter) {
                        self.bg = Some(color);
                    }
                }
                49 => self.bg = None,
                90..=97 => self.fg = Some(named(90, param, true)),
                100..=107 => self.bg = Some(named(100, param, true)),
                _ => trace!(code = param, "Ignored SGR parameter"),
            }
        }
    }
}

/// Parse the tail of a `38`/`48` extended color.
///
/// A `5` or `2` selector with too few parameters swallows the rest of the
/// sequence. Any other selector is left in place to be read as a code.
fn parse_extended_color(iter: &mut Peekable<Iter<'_, u32>>) -> Option<Color> {
    match iter.peek() {
        Some(&&5) => {
            iter.next();
            iter.next().map(|&index| resolve_indexed(index))
        }
        Some(&&2) => {
            iter.next();
            let rgb: Vec<u32> = iter.by_ref().take(3).copied().collect();
            match rgb[..] {
                [r, g, b] => Some(resolve_rgb(r, g, b)),
                _ => {
                    trace!(params = ?rgb, "Truncated RGB color");
                    None
                }
            }
        }
        _ => None,
    }
}
