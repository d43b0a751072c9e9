//! # reckon
//!
//! reckon evaluates arithmetic expressions written as text. It understands
//! decimal numbers, unary minus, the operators `+ - * /` with the usual
//! precedence, and arbitrarily nested parentheses.
//!
//! Parsing and evaluation happen in a single recursive-descent pass over the
//! input: no token list and no syntax tree are built.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalError,
    interpreter::{parser::core::parse_expression, scanner::Cursor},
    options::{Options, TrailingInput},
};

/// Provides the error type for evaluation.
///
/// This module defines every error an evaluation can report, along with the
/// byte offset in the input where it was detected.
///
/// # Responsibilities
/// - Defines one variant per failure mode: empty input, malformed literal,
///   unmatched parenthesis, division by zero, and trailing input.
/// - Supports integration with standard error handling traits and reporting.
pub mod error;
/// Scanning and parsing machinery.
///
/// This module ties together the character scanner, the operator table, and
/// the recursive-descent parser that computes the result while it reads.
pub mod interpreter;
/// Evaluation settings.
pub mod options;

/// Result of a top-level evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an arithmetic expression with the default options.
///
/// # Errors
/// Returns an [`EvalError`] if the input is empty, malformed, has unbalanced
/// parentheses, divides by zero, or has anything after the expression.
///
/// # Examples
/// ```
/// use reckon::{error::EvalError, evaluate};
///
/// assert_eq!(evaluate("1 + 2 * 3"), Ok(7.0));
/// assert_eq!(evaluate("-((6+4))* -(2+2) - -1"), Ok(41.0));
///
/// assert_eq!(evaluate("(1+2"), Err(EvalError::UnmatchedParenthesis { position: 0 }));
/// assert_eq!(evaluate("1/0"), Err(EvalError::DivisionByZero { position: 1 }));
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    evaluate_with(expression, &Options::default())
}

/// Evaluates an arithmetic expression with explicit options.
///
/// A fresh cursor and nesting counter are created for every call, so
/// separate evaluations never share state.
///
/// # Errors
/// Same as [`evaluate`]. With [`TrailingInput::Ignore`], leftover text
/// other than a stray `)` is not an error.
pub fn evaluate_with(expression: &str, options: &Options) -> EvalResult<f64> {
    if expression.bytes().all(|c| c == b' ') {
        return Err(EvalError::EmptyInput);
    }

    let mut cursor = Cursor::new(expression).with_digitless_literal(options.digitless_literal);
    let value = parse_expression(&mut cursor)?;

    if cursor.depth() != 0 {
        return Err(EvalError::UnmatchedParenthesis { position: cursor.position() });
    }

    let position = cursor.position();
    match cursor.current_char() {
        None => {},
        Some(')') => return Err(EvalError::UnmatchedParenthesis { position }),
        Some(found) => match options.trailing_input {
            TrailingInput::Reject => return Err(EvalError::TrailingInput { position, found }),
            TrailingInput::Ignore => {
                log::debug!("ignoring trailing input at {position}: {:?}",
                            &expression[position..]);
            },
        },
    }

    log::debug!("{expression:?} = {value}");
    Ok(value)
}

/// Evaluates an arithmetic expression and panics if it cannot be computed.
///
/// This is the hard-fail counterpart of [`evaluate`], for callers that treat
/// a malformed expression as a bug rather than as data. It evaluates with
/// [`Options::permissive`], so only empty input, an empty literal, an
/// unmatched parenthesis, or division by zero panic.
///
/// # Panics
/// Panics with the error message on any [`EvalError`].
///
/// # Examples
/// ```
/// use reckon::solve;
///
/// assert_eq!(solve("9 - 3 - 2"), 4.0);
/// assert_eq!(solve("2 * 3 apples"), 6.0);
/// ```
///
/// ```should_panic
/// reckon::solve("1 / (2 - 2)");
/// ```
#[must_use]
pub fn solve(expression: &str) -> f64 {
    evaluate_with(expression, &Options::permissive()).unwrap_or_else(|e| panic!("{e}"))
}
