//! Labeled source spans for diagnostic messages.
//!
//! A label associates a message with a span of the input, providing context
//! for where an error occurred.

use brex_core::span::Span;

/// A labeled span in the input.
///
/// # Primary vs Secondary Labels
///
/// - **Primary labels** mark the offending byte. Every parse diagnostic has
///   exactly one.
/// - **Secondary labels** provide additional context, such as the `{` that an
///   unclosed alternation started at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Check if this is a secondary label.
    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}
