//! Escape sequence classification.
//!
//! Two passes over a single line:
//! 1. [`strip_non_sgr`] removes OSC strings, non-styling CSI sequences and
//!    charset designations.
//! 2. [`Tokens`] splits what is left into literal text and SGR bodies.
//!
//! Anything matching neither class stays in the text untouched. All
//! delimiters are ASCII, so every slice boundary falls on a char boundary.

use std::borrow::Cow;

use tracing::trace;

const ESC: u8 = 0x1b;
const BEL: u8 = 0x07;

/// Final bytes of CSI sequences that move the cursor, erase, scroll, set
/// modes, save or restore the cursor, and move or clear tab stops. `m` is
/// not among them.
const CSI_STRIP_FINALS: &[u8] = b"ABCDEFGHIJKSTZfghlnsu";

/// Charset identifiers accepted after `ESC (`.
const CHARSET_IDS: &[u8] = b"AB012";

/// Length of a strippable sequence at the start of `bytes`, if any.
///
/// `bytes[0]` must be ESC.
fn strippable_len(bytes: &[u8]) -> Option<usize> {
    match bytes.get(1)? {
        // OSC: ESC ] ... (BEL | ESC \)
        b']' => {
            let end = bytes[2..].iter().position(|&b| b == BEL || b == ESC)? + 2;
            if bytes[end] == BEL {
                Some(end + 1)
            } else if bytes.get(end + 1) == Some(&b'\\') {
                Some(end + 2)
            } else {
                None
            }
        }
        // CSI with a non-styling final byte
        b'[' => {
            let mut j = 2;
            while bytes.get(j).is_some_and(|b| b.is_ascii_digit() || *b == b';') {
                j += 1;
            }
            CSI_STRIP_FINALS.contains(bytes.get(j)?).then_some(j + 1)
        }
        // Charset designation: ESC ( id
        b'(' => CHARSET_IDS.contains(bytes.get(2)?).then_some(3),
        _ => None,
    }
}

/// Remove every non-styling escape sequence from `line`.
///
/// Runs in a single left-to-right pass; text produced by a removal is never
/// rescanned. Returns the input unchanged (borrowed) when it contains no ESC.
pub fn strip_non_sgr(line: &str) -> Cow<'_, str> {
    if !line.as_bytes().contains(&ESC) {
        return Cow::Borrowed(line);
    }

    let bytes = line.as_bytes();
    let mut out = String::with_capacity(line.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == ESC {
            if let Some(len) = strippable_len(&bytes[i..]) {
                trace!(sequence = ?&line[i..i + len], "Stripped escape sequence");
                out.push_str(&line[copied..i]);
                i += len;
                copied = i;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&line[copied..]);

    Cow::Owned(out)
}

/// Length of an SGR sequence at the start of `bytes`, if any.
///
/// The body between `ESC [` and `m` splits on `;` into pieces. Each piece
/// is either digits (possibly none) or one lowercase letter other than `m`.
/// Anything else, such as `ESC [ X` followed by a word, is not SGR.
fn sgr_len(bytes: &[u8]) -> Option<usize> {
    #[derive(PartialEq)]
    enum Piece {
        Empty,
        Digits,
        Letter,
    }

    if bytes.get(1) != Some(&b'[') {
        return None;
    }

    let mut piece = Piece::Empty;
    let mut j = 2;
    loop {
        match *bytes.get(j)? {
            b'm' => return Some(j + 1),
            b';' => piece = Piece::Empty,
            b'0'..=b'9' if piece != Piece::Letter => piece = Piece::Digits,
            b'a'..=b'z' if piece == Piece::Empty => piece = Piece::Letter,
            _ => return None,
        }
        j += 1;
    }
}

/// A piece of a cleaned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal text, never empty.
    Text(&'a str),
    /// Body of an SGR sequence (between `ESC [` and `m`), possibly empty.
    Sgr(&'a str),
}

/// Iterator splitting a cleaned line into alternating text and SGR tokens.
pub struct Tokens<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.line.as_bytes();
        if self.pos >= bytes.len() {
            return None;
        }

        let start = self.pos;
        let mut i = start;
        while i < bytes.len() {
            if bytes[i] == ESC {
                if let Some(len) = sgr_len(&bytes[i..]) {
                    if i > start {
                        self.pos = i;
                        return Some(Token::Text(&self.line[start..i]));
                    }
                    self.pos = i + len;
                    return Some(Token::Sgr(&self.line[i + 2..i + len - 1]));
                }
            }
            i += 1;
        }

        self.pos = bytes.len();
        Some(Token::Text(&self.line[start..]))
    }
}

/// Split a cleaned line into tokens.
pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokens::new(line)
}
