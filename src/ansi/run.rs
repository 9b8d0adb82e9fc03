//! Run encoding.
//!
//! Snapshots the current [`AttributeState`] onto a piece of literal text.

use super::types::{AttributeState, Color, Run};

impl AttributeState {
    /// Build the run for `text` under the current attributes.
    ///
    /// Returns `None` for empty text. With reverse video active, fg and bg
    /// are swapped and an unset slot becomes the matching default-color
    /// sentinel instead of being omitted.
    pub fn to_run(&self, text: &str) -> Option<Run> {
        if text.is_empty() {
            return None;
        }

        let (fg, bg) = if self.reverse {
            (
                Some(self.bg.unwrap_or(Color::DefaultBackground)),
                Some(self.fg.unwrap_or(Color::DefaultForeground)),
            )
        } else {
            (self.fg, self.bg)
        };

        Some(Run {
            text: text.to_string(),
            fg,
            bg,
            bold: self.bold,
            dim: self.dim,
            italic: self.italic,
            underline: self.underline,
        })
    }
}
