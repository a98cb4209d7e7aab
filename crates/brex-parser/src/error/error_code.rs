//! Error codes for the brex diagnostic system.
//!
//! Every parse failure falls into exactly one of these categories. The
//! numeric part of each code is also the process status the command-line
//! tool exits with, so the numbering is fixed: `0` means success and codes
//! `2` and `6` are never assigned.

use std::fmt;

/// Error codes for categorizing parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Invalid character.
    ///
    /// A byte outside the allowed set was encountered. Only ASCII letters and
    /// the punctuation characters `{`, `}` and `,` are allowed.
    E001,

    /// Empty alternation.
    ///
    /// An alternation with no alternatives at all, e.g. `{}`.
    E003,

    /// Unclosed alternation.
    ///
    /// The input ended before the `}` matching an opening `{`.
    E004,

    /// Misplaced character.
    ///
    /// A `,` or `}` appeared where a letter or `{` was expected, or input
    /// remained after a complete top-level expression.
    E005,

    /// Input too large.
    ///
    /// The input is longer than [`crate::MAX_INPUT_LEN`] bytes.
    E007,

    /// Empty input.
    ///
    /// There is nothing to parse.
    E008,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::E005 => "E005",
            ErrorCode::E007 => "E007",
            ErrorCode::E008 => "E008",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "invalid character",
            ErrorCode::E003 => "empty alternation",
            ErrorCode::E004 => "unclosed alternation",
            ErrorCode::E005 => "misplaced character",
            ErrorCode::E007 => "input too large",
            ErrorCode::E008 => "empty input",
        }
    }

    /// Returns the process status reported for this category.
    ///
    /// Distinct per code and never zero.
    pub fn status(&self) -> u8 {
        match self {
            ErrorCode::E001 => 1,
            ErrorCode::E003 => 3,
            ErrorCode::E004 => 4,
            ErrorCode::E005 => 5,
            ErrorCode::E007 => 7,
            ErrorCode::E008 => 8,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
