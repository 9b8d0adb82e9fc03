//! 256-color palette resolution.
//!
//! - 0-15: the 16 named colors
//! - 16-231: 6x6x6 RGB cube in steps of 51
//! - 232-255: 24-step grayscale ramp starting at 8
//! - anything else falls back to white

use super::types::{Color, NamedColor};

/// Resolve a palette index to a color.
pub fn resolve_indexed(index: u32) -> Color {
    match index {
        0..=15 => Color::Named(NamedColor::ALL[index as usize]),
        16..=231 => {
            let n = index - 16;
            let r = (n / 36) * 51;
            let g = ((n % 36) / 6) * 51;
            let b = (n % 6) * 51;
            Color::Hex(r, g, b)
        }
        232..=255 => {
            let v = 8 + (index - 232) * 10;
            Color::Hex(v, v, v)
        }
        _ => Color::Named(NamedColor::White),
    }
}

/// Build a color from a `38;2;R;G;B` triple. Components are not clamped.
pub fn resolve_rgb(r: u32, g: u32, b: u32) -> Color {
    Color::Hex(r, g, b)
}
