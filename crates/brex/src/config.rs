//! Configuration types for brace expansion.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! configuration file; every field has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`ExpansionConfig`] - Separator and optional cap on emitted values.
//! - [`TreeConfig`] - Formatting of the parse tree dump.
//!
//! # Example
//!
//! ```
//! # use brex::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.expansion().separator(), " ");
//! assert_eq!(config.expansion().limit(), None);
//! ```

use serde::Deserialize;

const DEFAULT_SEPARATOR: &str = " ";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Expansion output section.
    #[serde(default)]
    expansion: ExpansionConfig,

    /// Tree dump section.
    #[serde(default)]
    tree: TreeConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(expansion: ExpansionConfig, tree: TreeConfig) -> Self {
        Self { expansion, tree }
    }

    /// Returns the expansion configuration.
    pub fn expansion(&self) -> &ExpansionConfig {
        &self.expansion
    }

    /// Returns the tree dump configuration.
    pub fn tree(&self) -> &TreeConfig {
        &self.tree
    }
}

/// How expansion values are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExpansionConfig {
    /// Text written between consecutive values.
    #[serde(default = "default_separator")]
    separator: String,

    /// Stop after this many values.
    #[serde(default)]
    limit: Option<usize>,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_owned()
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            limit: None,
        }
    }
}

impl ExpansionConfig {
    /// Creates a new [`ExpansionConfig`].
    ///
    /// # Arguments
    ///
    /// * `separator` - Text written between consecutive values.
    /// * `limit` - Maximum number of values to write, or `None` for all.
    pub fn new(separator: impl Into<String>, limit: Option<usize>) -> Self {
        Self {
            separator: separator.into(),
            limit,
        }
    }

    /// Returns the separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Returns the cap on emitted values, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Replace the separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replace the cap on emitted values.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

/// Formatting of the parse tree dump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TreeConfig {
    /// Pretty-print the JSON dump.
    #[serde(default)]
    pretty: bool,
}

impl TreeConfig {
    /// Creates a new [`TreeConfig`].
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Returns whether the dump is pretty-printed.
    pub fn pretty(&self) -> bool {
        self.pretty
    }
}
