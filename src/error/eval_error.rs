use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Every position is a byte offset into the evaluated input.
pub enum EvalError {
    /// The expression was empty or contained nothing but spaces.
    #[error("Error: Expression is empty.")]
    EmptyInput,
    /// A number or an opening parenthesis was expected but not found.
    #[error("Error at position {position}: Expected a number or '(' but found {}.",
            describe(.found))]
    MalformedLiteral {
        /// Where the atom was expected to start.
        position: usize,
        /// The character found there, or `None` at end of input.
        found:    Option<char>,
    },
    /// An opening parenthesis was never closed, or a closing parenthesis has
    /// no matching opener.
    #[error("Error at position {position}: Unmatched parenthesis.")]
    UnmatchedParenthesis {
        /// The offending parenthesis.
        position: usize,
    },
    /// The right-hand side of a division evaluated to zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// The `/` operator whose divisor was zero.
        position: usize,
    },
    /// Characters remained after a complete expression was parsed.
    #[error("Error at position {position}: Extra input after expression: '{found}'.")]
    TrailingInput {
        /// The first unconsumed character.
        position: usize,
        /// That character.
        found:    char,
    },
}

impl EvalError {
    /// Returns the byte offset the error points at, if it has one.
    ///
    /// # Example
    /// ```
    /// use reckon::{error::EvalError, evaluate};
    ///
    /// let err = evaluate("4 / (2 - 2)").unwrap_err();
    /// assert_eq!(err, EvalError::DivisionByZero { position: 2 });
    /// assert_eq!(err.position(), Some(2));
    /// assert_eq!(EvalError::EmptyInput.position(), None);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyInput => None,
            Self::MalformedLiteral { position, .. }
            | Self::UnmatchedParenthesis { position }
            | Self::DivisionByZero { position }
            | Self::TrailingInput { position, .. } => Some(*position),
        }
    }
}

#[allow(clippy::ref_option)]
fn describe(found: &Option<char>) -> String {
    found.map_or_else(|| "end of input".to_string(), |c| format!("'{c}'"))
}
