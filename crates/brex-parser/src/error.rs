//! Error and diagnostic system for the brex parser.
//!
//! This module provides:
//! - Error codes with stable process statuses ([`ErrorCode`])
//! - Labeled spans pointing into the input ([`Label`])
//! - The [`Diagnostic`] type returned by a failed parse
//! - Bounded source excerpts with a caret ([`Excerpt`])
//!
//! # Example
//!
//! ```
//! # use brex_parser::error::{Diagnostic, ErrorCode};
//! # use brex_core::span::Span;
//! let diag = Diagnostic::new(ErrorCode::E004, 4, "unclosed alternation")
//!     .with_label(Span::new(4..4), "input ends here")
//!     .with_secondary_label(Span::at(0), "alternation opened here")
//!     .with_help("add a closing `}`");
//!
//! assert_eq!(diag.to_string(), "error[E004]: unclosed alternation");
//! assert_eq!(diag.code().status(), 4);
//! ```

mod diagnostic;
mod error_code;
mod excerpt;
mod label;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use excerpt::{Excerpt, MAX_EXCERPT_WIDTH};
pub use label::Label;
