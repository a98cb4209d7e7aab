//! Command-line argument definitions for the brex CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. The expression itself is read from standard input; the
//! flags choose between the expansion and the parse tree, shape the output,
//! and control diagnostics and logging.

use clap::Parser;

/// Command-line arguments for the brex brace expander
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print the JSON parse tree instead of the expansion (implies --verbose)
    #[arg(long)]
    pub parse: bool,

    /// Write one value per line instead of separating them with spaces
    #[arg(long)]
    pub lines: bool,

    /// Print diagnostics to standard error on failure
    #[arg(short, long)]
    pub verbose: bool,

    /// Stop after this many values
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Pretty-print the parse tree
    #[arg(long)]
    pub pretty: bool,

    /// Render diagnostics with the graphical report handler
    #[arg(long)]
    pub fancy: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Whether diagnostics should be printed on failure.
    pub fn is_verbose(&self) -> bool {
        self.verbose || self.parse
    }
}
