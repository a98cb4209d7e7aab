//! The diagnostic type returned by a failed parse.
//!
//! A [`Diagnostic`] describes the first error found in the input: its
//! [`ErrorCode`], a message, the zero-based byte offset of the offending
//! byte, labeled spans, and optional help text.

use std::fmt;

use brex_core::span::Span;

use crate::error::{ErrorCode, Excerpt, Label};

/// A parse error with source location information.
///
/// # Example
///
/// ```text
/// error[E001]: encountered the character '#' (U+0023), which is not in the allowed character set
///  --> byte offset 1
/// a#b
///  ^
///  = help: only ASCII letters and the punctuation `{`, `}` and `,` are allowed
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    code: ErrorCode,
    offset: usize,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic for the error at the zero-based byte `offset`.
    pub fn new(code: ErrorCode, offset: usize, message: impl Into<String>) -> Self {
        Self {
            code,
            offset,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the zero-based byte offset of the offending byte.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render the full plain-text report for this diagnostic against the
    /// `source` it was produced from.
    ///
    /// The report is the headline, the byte offset, an [`Excerpt`] with a
    /// caret under the offending byte, and the help text if there is any.
    /// Every line ends with a newline.
    pub fn render(&self, source: &str) -> String {
        let mut report = format!(
            "{self}\n --> byte offset {}\n{}\n",
            self.offset,
            Excerpt::new(source, self.offset)
        );
        if let Some(help) = &self.help {
            report.push_str(" = help: ");
            report.push_str(help);
            report.push('\n');
        }
        report
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

impl std::error::Error for Diagnostic {}
