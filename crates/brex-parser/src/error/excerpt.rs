//! Bounded source excerpts with a caret under the offending byte.
//!
//! Inputs up to [`MAX_EXCERPT_WIDTH`] bytes are shown whole. Longer inputs are
//! cut to a window centered on the offending byte, with `"... "` and `" ..."`
//! standing in for whatever was elided on either side.
//!
//! ```text
//! ... klmnopqrstuvwxyz#abcdefghijklmnopqrstu ...
//!                          ^
//! ```

use std::fmt;

/// Bytes of context kept on either side of the offending byte.
const BORDER: usize = 25;

/// Widest excerpt, in bytes, including elision markers.
pub const MAX_EXCERPT_WIDTH: usize = BORDER + 1 + BORDER;

const ELIDE_LEFT: &str = "... ";
const ELIDE_RIGHT: &str = " ...";

/// One line of source text plus the column the caret points at.
///
/// `Display` renders the text, a newline, and the caret line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    text: String,
    caret_column: usize,
}

impl Excerpt {
    /// Build the excerpt of `source` around the zero-based byte `offset`.
    ///
    /// An `offset` equal to `source.len()` points just past the last byte.
    /// Larger offsets are clamped to that position.
    pub fn new(source: &str, offset: usize) -> Self {
        let offset = floor_char_boundary(source, offset.min(source.len()));

        if source.len() <= MAX_EXCERPT_WIDTH {
            return Self {
                text: source.to_owned(),
                caret_column: source[..offset].chars().count(),
            };
        }

        let mut text = String::with_capacity(MAX_EXCERPT_WIDTH);

        if offset > BORDER {
            let start = ceil_char_boundary(source, offset - (BORDER - ELIDE_LEFT.len()));
            text.push_str(ELIDE_LEFT);
            text.push_str(&source[start..offset]);
        } else {
            text.push_str(&source[..offset]);
        }

        let caret_column = text.chars().count();

        let focus_end = source[offset..]
            .chars()
            .next()
            .map_or(offset, |ch| offset + ch.len_utf8());
        text.push_str(&source[offset..focus_end]);

        if source.len() - offset > BORDER {
            let end = floor_char_boundary(source, focus_end + (BORDER - ELIDE_RIGHT.len()));
            text.push_str(&source[focus_end..end]);
            text.push_str(ELIDE_RIGHT);
        } else {
            text.push_str(&source[focus_end..]);
        }

        Self { text, caret_column }
    }

    /// The excerpted line, including any elision markers.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Column (in characters) of the caret within [`Excerpt::text`].
    pub fn caret_column(&self) -> usize {
        self.caret_column
    }
}

impl fmt::Display for Excerpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.text)?;
        write!(f, "{:width$}^", "", width = self.caret_column)
    }
}

fn floor_char_boundary(source: &str, mut index: usize) -> usize {
    while !source.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(source: &str, mut index: usize) -> usize {
    while !source.is_char_boundary(index) {
        index += 1;
    }
    index
}
