//! Error types for brex operations.
//!
//! This module provides the main error type [`BrexError`] which wraps the
//! failures that can occur between reading an expression and writing its
//! expansion.

use std::io;

use thiserror::Error;

use brex_parser::Diagnostic;

/// Process status for every failure that is not a syntax error.
///
/// Syntax errors use their own [`ErrorCode::status`](brex_parser::ErrorCode::status),
/// none of which is 2.
pub const DRIVER_FAILURE_STATUS: i32 = 2;

/// The main error type for brex operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the parser's [`Diagnostic`] together with the
/// expression it was produced for, so that callers can render an excerpt
/// with a caret under the offending character.
#[derive(Debug, Error)]
pub enum BrexError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: Diagnostic, src: String },

    #[error("unexpected input after the first line at byte {offset}")]
    TrailingInput { offset: usize },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BrexError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: Diagnostic, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// The process exit status this error maps to.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Parse { err, .. } => i32::from(err.code().status()),
            _ => DRIVER_FAILURE_STATUS,
        }
    }
}
