//! ANSI/SGR interpreter for captured pane text.
//!
//! Converts raw `capture-pane -e` output into lines of styled runs that a
//! non-terminal client can render. This is not a terminal emulator: cursor
//! movement, titles and charset switches are recognized only so they can be
//! discarded.
//!
//! Style state carries across line boundaries within one capture and is
//! discarded at the end of the call.

mod palette;
mod run;
mod scanner;
mod sgr;
mod types;

#[cfg(test)]
mod tests;

pub use palette::{resolve_indexed, resolve_rgb};
pub use scanner::{strip_non_sgr, tokenize, Token, Tokens};
pub use sgr::parse_params;
pub use types::{
    AttributeState, Color, ColorParseError, Document, Line, NamedColor, Run, DEFAULT_BG_TOKEN,
    DEFAULT_FG_TOKEN,
};

/// Parse a single line, updating `state` in place.
pub fn parse_line(line: &str, state: &mut AttributeState) -> Line {
    let cleaned = strip_non_sgr(line);
    let mut runs = Line::new();

    for token in tokenize(&cleaned) {
        match token {
            Token::Sgr(body) => state.apply_sgr(&parse_params(body)),
            Token::Text(text) => runs.extend(state.to_run(text)),
        }
    }

    runs
}

/// Parse a whole capture into one [`Line`] per `\n`-separated input line.
///
/// A trailing newline yields a trailing empty line, and an empty capture
/// yields a single empty line.
pub fn parse_lines(raw: &str) -> Document {
    let mut state = AttributeState::new();
    raw.split('\n')
        .map(|line| parse_line(line, &mut state))
        .collect()
}

/// Concatenated text of a line, without styling.
pub fn line_text(line: &Line) -> String {
    line.iter().map(|run| run.text.as_str()).collect()
}
