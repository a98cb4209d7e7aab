//! Recursive-descent parser for brace expressions.
//!
//! The grammar, over ASCII letters and the punctuation `{`, `}` and `,`:
//!
//! ```text
//! expr    := term+            -- two or more terms form a concatenation
//! term    := letters | choice
//! choice  := '{' expr (',' expr)* '}'
//! letters := one or more ASCII letters
//! ```
//!
//! Parsing runs over a [`LocatingSlice`] so every production knows the byte
//! offset it started at, and `with_taken` hands back the exact text it
//! consumed. Errors are never recovered from: the first one is cut, carried
//! up as a [`Fault`] context, and turned into a [`Diagnostic`].
//!
//! Each level of brace nesting is one level of recursion on the native stack.
//! Inputs nested many thousands of levels deep overflow the stack and abort
//! the process; [`MAX_INPUT_LEN`] bounds the length, not the depth.

use log::{debug, trace};
use winnow::{
    Parser as _,
    error::{AddContext, ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::take_while,
};

use brex_core::{span::Span, tree::ParseNode};

use crate::error::{Diagnostic, ErrorCode};

/// Largest accepted input, in bytes. Keeps every offset within an `i32`.
pub const MAX_INPUT_LEN: usize = i32::MAX as usize;

/// Why parsing stopped. Attached to the cut error as winnow context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fault {
    /// A byte outside the allowed character set.
    InvalidCharacter { offset: usize },
    /// `{` immediately followed by `}`.
    EmptyAlternation { open: usize, close: usize },
    /// End of input inside an alternation opened at `open`.
    UnclosedAlternation { open: usize, end: usize },
    /// A `,` or `}` where a term was expected, or after the top level.
    MisplacedCharacter { offset: usize, trailing: bool },
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError<Fault>>;

/// Stop parsing with a cut error carrying `fault`.
fn fail<O>(input: &Input<'_>, fault: Fault) -> IResult<O> {
    Err(ErrMode::Cut(ContextError::new().add_context(
        input,
        &input.checkpoint(),
        fault,
    )))
}

fn peek_char(input: &Input<'_>) -> Option<char> {
    input.chars().next()
}

/// Whether `input` is positioned where an expression may end.
fn at_expression_end(input: &Input<'_>) -> bool {
    matches!(peek_char(input), None | Some(',') | Some('}'))
}

/// Parse one or more ASCII letters.
fn letters<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    take_while(1.., |c: char| c.is_ascii_alphabetic()).parse_next(input)
}

/// Parse a literal term.
fn literal(input: &mut Input<'_>) -> IResult<ParseNode> {
    let start = input.current_token_start();
    let text = letters.parse_next(input)?;

    trace!(offset = start, len = text.len(); "Parsed literal");
    Ok(ParseNode::literal(start, text))
}

/// Parse the alternatives of a choice, braces included.
///
/// Each alternative is a full expression, so choices nest.
fn alternatives(input: &mut Input<'_>) -> IResult<Vec<ParseNode>> {
    let open = input.current_token_start();
    input.next_token();

    match peek_char(input) {
        None => {
            let end = input.current_token_start();
            return fail(input, Fault::UnclosedAlternation { open, end });
        }
        Some('}') => {
            let close = input.current_token_start();
            return fail(input, Fault::EmptyAlternation { open, close });
        }
        Some(_) => {}
    }

    let mut members = Vec::new();
    loop {
        members.push(expression(input)?);

        let offset = input.current_token_start();
        match input.next_token() {
            Some('}') => return Ok(members),
            Some(',') if input.is_empty() => {
                let end = input.current_token_start();
                return fail(input, Fault::UnclosedAlternation { open, end });
            }
            Some(',') => {}
            None => {
                return fail(input, Fault::UnclosedAlternation { open, end: offset });
            }
            Some(_) => {
                return fail(
                    input,
                    Fault::MisplacedCharacter {
                        offset,
                        trailing: false,
                    },
                );
            }
        }
    }
}

/// Parse a choice term: `{a,b,...}`.
fn choice(input: &mut Input<'_>) -> IResult<ParseNode> {
    let start = input.current_token_start();
    let (members, source) = alternatives.with_taken().parse_next(input)?;

    trace!(offset = start, alternatives = members.len(); "Parsed choice");
    Ok(ParseNode::choice(start, source, members))
}

/// Parse a single term, dispatching on the next character.
fn term(input: &mut Input<'_>) -> IResult<ParseNode> {
    let offset = input.current_token_start();

    match peek_char(input) {
        Some('{') => choice(input),
        Some(c) if c.is_ascii_alphabetic() => literal(input),
        Some(',' | '}') => fail(
            input,
            Fault::MisplacedCharacter {
                offset,
                trailing: false,
            },
        ),
        Some(_) => fail(input, Fault::InvalidCharacter { offset }),
        None => fail(input, Fault::UnclosedAlternation { open: offset, end: offset }),
    }
}

/// Parse the terms of an expression up to the next `,`, `}` or end of input.
fn terms(input: &mut Input<'_>) -> IResult<Vec<ParseNode>> {
    let mut terms = vec![term(input)?];
    while !at_expression_end(input) {
        terms.push(term(input)?);
    }
    Ok(terms)
}

/// Parse an expression.
///
/// A single term is returned as is; two or more are wrapped in a
/// concatenation spanning all of them.
fn expression(input: &mut Input<'_>) -> IResult<ParseNode> {
    let start = input.current_token_start();
    let (mut terms, source) = terms.with_taken().parse_next(input)?;

    if terms.len() == 1 {
        return Ok(terms.remove(0));
    }

    trace!(offset = start, terms = terms.len(); "Parsed concatenation");
    Ok(ParseNode::concatenation(start, source, terms))
}

impl Fault {
    /// Build the user-facing diagnostic for this fault.
    fn into_diagnostic(self, source: &str) -> Diagnostic {
        match self {
            Fault::InvalidCharacter { offset } => {
                let ch = source[offset..].chars().next().unwrap_or('\u{FFFD}');
                Diagnostic::new(
                    ErrorCode::E001,
                    offset,
                    format!(
                        "encountered the character {ch:?} (U+{:04X}), which is not in the allowed character set",
                        u32::from(ch)
                    ),
                )
                .with_label(
                    Span::new(offset..offset + ch.len_utf8()),
                    ErrorCode::E001.description(),
                )
                .with_help("only ASCII letters and the punctuation `{`, `}` and `,` are allowed")
            }
            Fault::EmptyAlternation { open, close } => Diagnostic::new(
                ErrorCode::E003,
                close,
                "an alternation must contain at least one alternative, but this one has none",
            )
            .with_label(Span::at(close), ErrorCode::E003.description())
            .with_secondary_label(Span::at(open), "alternation opened here")
            .with_help("write at least one alternative, e.g. `{foo}`"),
            Fault::UnclosedAlternation { open, end } => Diagnostic::new(
                ErrorCode::E004,
                end,
                format!(
                    "the alternation opened at byte offset {open} was not closed before the end of input"
                ),
            )
            .with_label(Span::new(end..end), "input ends here")
            .with_secondary_label(Span::at(open), "alternation opened here")
            .with_help("add a closing `}`"),
            Fault::MisplacedCharacter { offset, trailing } => {
                let ch = source[offset..].chars().next().unwrap_or('\u{FFFD}');
                let (message, help) = match (ch, trailing) {
                    (_, true) => (
                        format!("parsing ended prematurely at the character {ch:?}"),
                        "a complete expression was parsed before this character; `,` and `}` are only allowed inside an alternation",
                    ),
                    ('}', false) => (
                        "encountered an unexpected `}`".to_owned(),
                        "`}` closes an alternation and must have a matching `{` before it; empty alternatives are not permitted",
                    ),
                    (',', false) => (
                        "encountered an unexpected `,`".to_owned(),
                        "`,` separates alternatives inside an alternation; empty alternatives are not permitted",
                    ),
                    _ => (
                        format!("encountered an unexpected {ch:?}"),
                        "expected a letter or `{`",
                    ),
                };
                Diagnostic::new(ErrorCode::E005, offset, message)
                    .with_label(
                        Span::new(offset..offset + ch.len_utf8()),
                        ErrorCode::E005.description(),
                    )
                    .with_help(help)
            }
        }
    }
}

/// Convert a winnow error into a [`Diagnostic`].
///
/// Falls back to a misplaced character at `error_pos` when no fault context
/// is attached.
fn convert_err_mode(err: ErrMode<ContextError<Fault>>, error_pos: usize, source: &str) -> Diagnostic {
    let context_error = match err {
        ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
        ErrMode::Incomplete(_) => ContextError::new(),
    };

    let fault = context_error
        .context()
        .next()
        .copied()
        .unwrap_or(Fault::MisplacedCharacter {
            offset: error_pos.min(source.len().saturating_sub(1)),
            trailing: false,
        });

    fault.into_diagnostic(source)
}

/// Check the size limits that apply before any parsing starts.
fn check_input_len(len: usize) -> Result<(), Diagnostic> {
    if len > MAX_INPUT_LEN {
        return Err(Diagnostic::new(
            ErrorCode::E007,
            0,
            format!(
                "input is too large (having size {len} bytes); the maximum allowed input size is {MAX_INPUT_LEN} bytes"
            ),
        )
        .with_label(Span::new(0..0), ErrorCode::E007.description()));
    }

    if len == 0 {
        return Err(Diagnostic::new(ErrorCode::E008, 0, "cannot parse empty input")
            .with_label(Span::new(0..0), ErrorCode::E008.description())
            .with_help("provide a brace expression such as `a{b,c}`"));
    }

    Ok(())
}

/// Parse `source` into a tree, requiring the whole input to be consumed.
pub(crate) fn build_tree(source: &str) -> Result<ParseNode, Diagnostic> {
    check_input_len(source.len())?;

    let mut input = LocatingSlice::new(source);
    let tree = expression(&mut input).map_err(|err| {
        let error_pos = input.current_token_start();
        convert_err_mode(err, error_pos, source)
    })?;

    if !input.is_empty() {
        let offset = input.current_token_start();
        return Err(Fault::MisplacedCharacter {
            offset,
            trailing: true,
        }
        .into_diagnostic(source));
    }

    debug!(nodes = tree.descendants().count(); "Parsed brace expression");
    Ok(tree)
}
