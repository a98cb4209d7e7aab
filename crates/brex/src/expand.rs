//! The enumeration loop over a cursor tree.
//!
//! [`Expansion`] yields the current value of a cursor, then advances it and
//! yields again for as long as the root does not carry. Values are produced
//! one at a time, so a caller can stop early without the remaining
//! combinations ever being built.

use std::{io, iter::FusedIterator};

use crate::cursor::{Carry, Cursor};

/// Lazy iterator over every value of a cursor, in expansion order.
///
/// Running the iterator to completion leaves the cursor back in its initial
/// state, so a new `Expansion` over the same cursor repeats the sequence.
/// Dropping it early leaves the cursor on the last value yielded.
#[derive(Debug)]
pub struct Expansion<'c, 'a> {
    cursor: &'c mut Cursor<'a>,
    started: bool,
    finished: bool,
}

impl<'c, 'a> Expansion<'c, 'a> {
    /// Start enumerating from the cursor's current value.
    pub fn new(cursor: &'c mut Cursor<'a>) -> Self {
        Self {
            cursor,
            started: false,
            finished: false,
        }
    }
}

impl Iterator for Expansion<'_, '_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(self.cursor.current_value());
        }

        match self.cursor.advance() {
            Carry::NotCarried => Some(self.cursor.current_value()),
            Carry::Carried => {
                self.finished = true;
                None
            }
        }
    }
}

impl FusedIterator for Expansion<'_, '_> {}

/// Expand `cursor` into separator-prefixed chunks.
///
/// The first chunk is the first value on its own; every later chunk is
/// `separator` followed by the next value. Concatenating all chunks gives the
/// complete output line.
///
/// # Example
///
/// ```
/// # use brex::{build_cursor, expand};
/// let tree = brex_parser::parse("{a,b}{c,d}").unwrap();
/// let mut cursor = build_cursor(&tree);
///
/// let chunks: Vec<String> = expand(&mut cursor, " ").collect();
/// assert_eq!(chunks, vec!["ac", " ad", " bc", " bd"]);
/// ```
pub fn expand<'c, 'a>(
    cursor: &'c mut Cursor<'a>,
    separator: &'c str,
) -> impl Iterator<Item = String> + 'c {
    Expansion::new(cursor)
        .enumerate()
        .map(move |(index, value)| {
            if index == 0 {
                value
            } else {
                format!("{separator}{value}")
            }
        })
}

/// Write the values of `cursor` to `out`, separated by `separator`.
///
/// Stops after `limit` values when one is given. Nothing is written after the
/// last value. Returns the number of values written.
///
/// # Errors
///
/// Returns any error produced by `out`.
pub fn write_expansion<W: io::Write>(
    mut out: W,
    cursor: &mut Cursor<'_>,
    separator: &str,
    limit: Option<usize>,
) -> io::Result<usize> {
    let mut written = 0;

    for value in Expansion::new(cursor).take(limit.unwrap_or(usize::MAX)) {
        if written > 0 {
            out.write_all(separator.as_bytes())?;
        }
        out.write_all(value.as_bytes())?;
        written += 1;
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use brex_core::tree::ParseNode;

    use super::*;
    use crate::cursor::build_cursor;

    fn values(source: &str) -> Vec<String> {
        let tree = brex_parser::parse(source).expect("valid expression");
        let mut cursor = build_cursor(&tree);
        Expansion::new(&mut cursor).collect()
    }

    #[test]
    fn test_literal_only() {
        assert_eq!(values("hello"), vec!["hello"]);
    }

    #[test]
    fn test_basic_examples() {
        assert_eq!(values("{A,B,C}"), vec!["A", "B", "C"]);
        assert_eq!(values("{A,B}{C,D}"), vec!["AC", "AD", "BC", "BD"]);
        assert_eq!(values("{A,B{C,D}}"), vec!["A", "BC", "BD"]);
        assert_eq!(values("{ABC}"), vec!["ABC"]);
        assert_eq!(values("ABC"), vec!["ABC"]);
    }

    #[test]
    fn test_nested_example() {
        assert_eq!(
            values("ha{x,foo{bar,baz{zy,z}}}{a,b}"),
            vec![
                "haxa",
                "haxb",
                "hafoobara",
                "hafoobarb",
                "hafoobazzya",
                "hafoobazzyb",
                "hafoobazza",
                "hafoobazzb",
            ]
        );
    }

    #[test]
    fn test_expansion_is_fused() {
        let tree = ParseNode::literal(0, "a");
        let mut cursor = build_cursor(&tree);
        let mut expansion = Expansion::new(&mut cursor);

        assert_eq!(expansion.next().as_deref(), Some("a"));
        assert_eq!(expansion.next(), None);
        assert_eq!(expansion.next(), None);
    }

    #[test]
    fn test_expansion_restarts_after_full_cycle() {
        let tree = brex_parser::parse("x{a,b}{c,d,e}").expect("valid expression");
        let mut cursor = build_cursor(&tree);

        let first: Vec<String> = Expansion::new(&mut cursor).collect();
        let second: Vec<String> = Expansion::new(&mut cursor).collect();

        assert_eq!(first.len(), 6);
        assert_eq!(first, second);
    }

    #[test]
    fn test_expand_chunks() {
        let tree = brex_parser::parse("{a,b}").expect("valid expression");
        let mut cursor = build_cursor(&tree);

        let chunks: Vec<String> = expand(&mut cursor, ", ").collect();
        assert_eq!(chunks, vec!["a", ", b"]);
    }

    #[test]
    fn test_write_expansion() {
        let tree = brex_parser::parse("{a,b}{c,d}").expect("valid expression");
        let mut cursor = build_cursor(&tree);
        let mut out = Vec::new();

        let written = write_expansion(&mut out, &mut cursor, "\n", None).unwrap();

        assert_eq!(written, 4);
        assert_eq!(String::from_utf8(out).unwrap(), "ac\nad\nbc\nbd");
    }

    #[test]
    fn test_write_expansion_with_limit() {
        let tree = brex_parser::parse("{a,b}{c,d}").expect("valid expression");
        let mut cursor = build_cursor(&tree);
        let mut out = Vec::new();

        let written = write_expansion(&mut out, &mut cursor, " ", Some(3)).unwrap();

        assert_eq!(written, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "ac ad bc");
    }

    #[test]
    fn test_write_expansion_zero_limit() {
        let tree = ParseNode::literal(0, "a");
        let mut cursor = build_cursor(&tree);
        let mut out = Vec::new();

        assert_eq!(write_expansion(&mut out, &mut cursor, " ", Some(0)).unwrap(), 0);
        assert!(out.is_empty());
    }
}
