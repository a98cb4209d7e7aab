//! # Brex Parser
//!
//! Parser for shell-style brace expressions such as `foo{bar,baz}y`. This
//! crate turns source text into an immutable [`ParseNode`] tree, or into a
//! single [`Diagnostic`] describing the first error in the input.
//!
//! ## Usage
//!
//! ```
//! # use brex_parser::{parse, Diagnostic};
//! # use brex_core::tree::NodeKind;
//! fn main() -> Result<(), Diagnostic> {
//!     let tree = parse("a{b,c}")?;
//!
//!     assert_eq!(tree.kind(), NodeKind::Concatenation);
//!     assert_eq!(tree.children().len(), 2);
//!     Ok(())
//! }
//! ```

pub mod error;
mod parser;

pub use error::{Diagnostic, ErrorCode};
pub use parser::MAX_INPUT_LEN;

use log::debug;

use brex_core::tree::ParseNode;

/// Parse a brace expression into its parse tree.
///
/// The whole of `source` must form one expression. Every node of the returned
/// tree records its zero-based byte offset and the exact text it spans.
///
/// # Errors
///
/// Returns a [`Diagnostic`] for the first error encountered:
///
/// - [`ErrorCode::E001`] for a character outside the allowed set
/// - [`ErrorCode::E003`] for an empty alternation `{}`
/// - [`ErrorCode::E004`] for an alternation left open at the end of input
/// - [`ErrorCode::E005`] for a misplaced `,` or `}`, or trailing input
/// - [`ErrorCode::E007`] for input longer than [`MAX_INPUT_LEN`]
/// - [`ErrorCode::E008`] for empty input
///
/// # Example
///
/// ```
/// # use brex_parser::{parse, ErrorCode};
/// let err = parse("a#b").unwrap_err();
///
/// assert_eq!(err.code(), ErrorCode::E001);
/// assert_eq!(err.offset(), 1);
/// ```
pub fn parse(source: &str) -> Result<ParseNode, Diagnostic> {
    debug!(len = source.len(); "Parsing brace expression");

    parser::build_tree(source).inspect_err(|diag| {
        debug!(code = diag.code().as_str(), offset = diag.offset(); "Parse failed");
    })
}
