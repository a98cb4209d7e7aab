//! Brex Core Types
//!
//! This crate provides the foundational types shared by the brex parser and
//! expansion engine:
//!
//! - **Spans**: Byte ranges into the parsed input ([`span::Span`])
//! - **Parse tree**: The immutable syntax tree of a brace expression
//!   ([`tree::ParseNode`], [`tree::NodeKind`])

pub mod span;
pub mod tree;
