//! The immutable parse tree of a brace expression.
//!
//! A [`ParseNode`] records what kind of construct it is, where it starts in
//! the original input, the exact text it spans, and its children in source
//! order. Trees are built bottom-up by the parser and never change afterwards.
//!
//! [`ParseNode::combinations`] and dropping a tree recurse once per nesting
//! level; [`ParseNode::descendants`] keeps an explicit stack instead.
//!
//! # Example
//!
//! ```
//! # use brex_core::tree::{NodeKind, ParseNode};
//! // The tree of `{a,b}`
//! let choice = ParseNode::choice(
//!     0,
//!     "{a,b}",
//!     vec![ParseNode::literal(1, "a"), ParseNode::literal(3, "b")],
//! );
//!
//! assert_eq!(choice.kind(), NodeKind::Choice);
//! assert_eq!(choice.span().range(), 0..5);
//! assert_eq!(choice.combinations(), 2);
//! ```

use serde::Serialize;

use crate::span::Span;

/// The three kinds of brace expression constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    /// A run of letters, e.g. `foo`.
    Literal,

    /// Two or more adjacent terms, e.g. `foo{bar,baz}y`.
    Concatenation,

    /// A braced list of alternatives, e.g. `{bar,baz}`.
    Choice,
}

impl NodeKind {
    /// Returns the tag used for this kind in tree dumps.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Literal => "LITERAL",
            NodeKind::Concatenation => "CONCATENATION",
            NodeKind::Choice => "CHOICE",
        }
    }
}

/// A node of the parse tree.
///
/// The node owns its children exclusively. `source` is the exact substring of
/// the input starting at `byte_offset`; for a choice it includes the braces
/// and commas, for a concatenation it is the children's sources back to back.
///
/// Serializes to the tree dump format: `type`, `byteOffset`, `source`, and
/// `children` (omitted when empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseNode {
    #[serde(rename = "type")]
    kind: NodeKind,
    byte_offset: usize,
    source: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<ParseNode>,
}

impl ParseNode {
    /// Create a node of any kind.
    ///
    /// The caller is responsible for the structural invariants of `kind`;
    /// this constructor does not check them.
    pub fn new(
        kind: NodeKind,
        byte_offset: usize,
        source: impl Into<String>,
        children: Vec<ParseNode>,
    ) -> Self {
        Self {
            kind,
            byte_offset,
            source: source.into(),
            children,
        }
    }

    /// Create a literal node spanning `source` at `byte_offset`.
    pub fn literal(byte_offset: usize, source: impl Into<String>) -> Self {
        Self::new(NodeKind::Literal, byte_offset, source, Vec::new())
    }

    /// Create a concatenation node from its terms.
    pub fn concatenation(
        byte_offset: usize,
        source: impl Into<String>,
        children: Vec<ParseNode>,
    ) -> Self {
        Self::new(NodeKind::Concatenation, byte_offset, source, children)
    }

    /// Create a choice node from its alternatives.
    pub fn choice(byte_offset: usize, source: impl Into<String>, children: Vec<ParseNode>) -> Self {
        Self::new(NodeKind::Choice, byte_offset, source, children)
    }

    /// Get the kind of this node.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Get the zero-based offset of this node's first byte in the input.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Get the exact input text spanned by this node.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Get the children of this node in source order.
    pub fn children(&self) -> &[ParseNode] {
        &self.children
    }

    /// Get the byte range of the input spanned by this node.
    pub fn span(&self) -> Span {
        Span::new(self.byte_offset..self.byte_offset + self.source.len())
    }

    /// Number of values this node expands to, duplicates included.
    ///
    /// A literal counts one, a concatenation multiplies its terms, and a
    /// choice sums its alternatives. Saturates at `u128::MAX`.
    pub fn combinations(&self) -> u128 {
        match self.kind {
            NodeKind::Literal => 1,
            NodeKind::Concatenation => self
                .children
                .iter()
                .fold(1, |acc: u128, child| acc.saturating_mul(child.combinations())),
            NodeKind::Choice => self
                .children
                .iter()
                .fold(0, |acc: u128, child| acc.saturating_add(child.combinations())),
        }
    }

    /// Iterate over this node and all of its descendants in pre-order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order iterator returned by [`ParseNode::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a ParseNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a ParseNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
