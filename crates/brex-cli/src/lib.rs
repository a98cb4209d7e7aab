//! CLI logic for the brex brace expander.
//!
//! Reads a single expression line, then writes either its expansion or its
//! parse tree followed by a newline.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    io::{BufRead, Write},
    string::FromUtf8Error,
};

use log::{debug, info};

use brex::{BraceExpander, BrexError, span::Span};
use brex_parser::{Diagnostic, ErrorCode};

/// Run the brex CLI application
///
/// Nothing is written to `out` unless the expression parses.
///
/// # Arguments
///
/// * `args` - Command-line arguments
/// * `input` - Source of the expression line
/// * `out` - Destination for the expansion or the tree dump
///
/// # Errors
///
/// Returns `BrexError` for:
/// - Configuration loading errors
/// - Input that does not end after the first line
/// - Parsing errors
/// - I/O errors while reading or writing
pub fn run(args: &Args, input: impl BufRead, mut out: impl Write) -> Result<(), BrexError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = config::apply_overrides(app_config, args);
    debug!(config:? = app_config; "Effective configuration");

    let source = read_expression(input)?;

    let expander = BraceExpander::new(app_config);
    let tree = expander.parse(&source)?;

    if args.parse {
        let json = expander.render_tree(&tree)?;
        out.write_all(json.as_bytes())?;
    } else {
        let written = expander.expand_to(&tree, &mut out)?;
        info!(written = written; "Expansion complete");
    }

    out.write_all(b"\n")?;
    out.flush()?;

    Ok(())
}

/// Read the first line of `input` without its newline.
///
/// Fails with [`BrexError::TrailingInput`] when anything follows that line,
/// and with an invalid-character diagnostic when the line is not UTF-8.
fn read_expression(mut input: impl BufRead) -> Result<String, BrexError> {
    let mut line = Vec::new();
    let read = input.read_until(b'\n', &mut line)?;

    if line.last() == Some(&b'\n') {
        line.pop();
    }

    if !input.fill_buf()?.is_empty() {
        return Err(BrexError::TrailingInput { offset: read });
    }

    let line = String::from_utf8(line).map_err(invalid_utf8)?;

    debug!(len = line.len(); "Read expression");
    Ok(line)
}

/// Report the first byte that is not valid UTF-8 as an invalid character.
fn invalid_utf8(err: FromUtf8Error) -> BrexError {
    let offset = err.utf8_error().valid_up_to();
    let byte = err.as_bytes()[offset];
    // The invalid sequence becomes one U+FFFD at the same offset.
    let source = String::from_utf8_lossy(err.as_bytes()).into_owned();
    let len = char::REPLACEMENT_CHARACTER.len_utf8();

    let diag = Diagnostic::new(
        ErrorCode::E001,
        offset,
        format!("encountered the byte 0x{byte:02X}, which is not valid UTF-8"),
    )
    .with_label(Span::new(offset..offset + len), ErrorCode::E001.description())
    .with_help("only ASCII letters and the punctuation `{`, `}` and `,` are allowed");

    BrexError::new_parse_error(diag, source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_expression_strips_newline() {
        assert_eq!(read_expression(&b"a{b,c}\n"[..]).unwrap(), "a{b,c}");
        assert_eq!(read_expression(&b"a{b,c}"[..]).unwrap(), "a{b,c}");
        assert_eq!(read_expression(&b""[..]).unwrap(), "");
    }

    #[test]
    fn test_read_expression_rejects_second_line() {
        let err = read_expression(&b"abc\nd"[..]).unwrap_err();
        assert!(matches!(err, BrexError::TrailingInput { offset: 4 }));
    }

    #[test]
    fn test_read_expression_reports_invalid_utf8() {
        let err = read_expression(&b"a\xffb\n"[..]).unwrap_err();

        match &err {
            BrexError::Parse { err: diag, src } => {
                assert_eq!(diag.code(), ErrorCode::E001);
                assert_eq!(diag.offset(), 1);
                assert!(diag.message().contains("0xFF"));
                assert_eq!(src, "a\u{FFFD}b");
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
        assert_eq!(err.exit_code(), 1);
    }
}
