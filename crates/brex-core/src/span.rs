//! Byte ranges into brace expression source text.

use std::{fmt, ops::Range};

/// A half-open byte range `start..end` into the original input.
///
/// Offsets are zero-based byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range.
    ///
    /// # Panics
    ///
    /// Panics if `range.start > range.end`.
    pub fn new(range: Range<usize>) -> Self {
        assert!(
            range.start <= range.end,
            "span start {} is past its end {}",
            range.start,
            range.end
        );
        Self {
            start: range.start,
            end: range.end,
        }
    }

    /// Create a span covering the single byte at `offset`.
    pub fn at(offset: usize) -> Self {
        Self::new(offset..offset + 1)
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Create a union of two spans (encompassing both)
    pub fn union(&self, other: Span) -> Span {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Convert the span back into a byte range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
