//! brex - lazy shell brace expansion.
//!
//! Parses expressions such as `ha{x,foo{bar,baz}}` and enumerates every
//! string they imply, one value at a time, without materializing the full
//! combination set.

pub mod config;
pub mod cursor;
pub mod expand;
pub mod render;

mod error;

pub use brex_core::{span, tree};
pub use brex_parser::{Diagnostic, ErrorCode};

pub use cursor::{Carry, Cursor, build_cursor};
pub use error::{BrexError, DRIVER_FAILURE_STATUS};
pub use expand::{Expansion, expand, write_expansion};

use std::io;

use log::{debug, info, trace};

use config::AppConfig;
use tree::ParseNode;

/// Entry point for parsing and expanding brace expressions.
///
/// # Examples
///
/// ```
/// use brex::{BraceExpander, config::AppConfig};
///
/// let expander = BraceExpander::new(AppConfig::default());
///
/// let tree = expander.parse("{a,b}c").expect("Failed to parse");
/// assert_eq!(expander.expand_all(&tree), vec!["ac", "bc"]);
///
/// let mut out = Vec::new();
/// expander.expand_to(&tree, &mut out).expect("Failed to write");
/// assert_eq!(out, b"ac bc");
/// ```
#[derive(Debug, Default)]
pub struct BraceExpander {
    config: AppConfig,
}

impl BraceExpander {
    /// Create a new expander with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse an expression into a tree.
    ///
    /// # Errors
    ///
    /// Returns [`BrexError::Parse`] carrying the diagnostic and the source.
    pub fn parse(&self, source: &str) -> Result<ParseNode, BrexError> {
        info!(len = source.len(); "Parsing expression");

        let tree =
            brex_parser::parse(source).map_err(|err| BrexError::new_parse_error(err, source))?;

        debug!(kind = tree.kind().as_str(); "Expression parsed successfully");
        trace!(tree:?; "Parsed tree");

        Ok(tree)
    }

    /// Render a tree as JSON, pretty-printed when the tree config asks.
    ///
    /// # Errors
    ///
    /// Returns [`BrexError::Serialize`] if serialization fails.
    pub fn render_tree(&self, tree: &ParseNode) -> Result<String, BrexError> {
        let json = render::to_json(tree, self.config.tree().pretty())?;
        Ok(json)
    }

    /// Write the expansion of `tree` to `out`.
    ///
    /// Values are separated by the configured separator and capped by the
    /// configured limit. Returns the number of values written.
    ///
    /// # Errors
    ///
    /// Returns [`BrexError::Io`] if writing fails.
    pub fn expand_to<W: io::Write>(&self, tree: &ParseNode, out: W) -> Result<usize, BrexError> {
        let expansion = self.config.expansion();
        info!(
            combinations = tree.combinations(),
            limit:? = expansion.limit();
            "Expanding expression"
        );

        let mut cursor = build_cursor(tree);
        let written = write_expansion(out, &mut cursor, expansion.separator(), expansion.limit())?;

        debug!(written = written; "Expansion written");
        Ok(written)
    }

    /// Collect the expansion of `tree` into a vector, honoring the limit.
    pub fn expand_all(&self, tree: &ParseNode) -> Vec<String> {
        let mut cursor = build_cursor(tree);
        let limit = self.config.expansion().limit().unwrap_or(usize::MAX);
        Expansion::new(&mut cursor).take(limit).collect()
    }
}
