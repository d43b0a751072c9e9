/// What to do with input left over after a complete expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingInput {
    /// Leftover input is an error.
    #[default]
    Reject,
    /// Leftover input is ignored and the value of the leading expression is
    /// returned. A stray `)` is still reported as an unmatched parenthesis.
    Ignore,
}

/// What a literal made only of `-` and `.` characters evaluates to.
///
/// A literal that consumes no character at all, such as the one expected
/// after `1+`, is an error under either policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigitlessLiteral {
    /// The literal is malformed.
    #[default]
    Reject,
    /// The literal reads as zero, so `3*.` is `0` and `1---` is `1`.
    Zero,
}

/// Settings for one evaluation.
///
/// The default is strict: the whole input must be a single expression.
///
/// # Example
/// ```
/// use reckon::{
///     evaluate_with,
///     options::{Options, TrailingInput},
/// };
///
/// let lenient = Options { trailing_input: TrailingInput::Ignore,
///                         ..Options::default() };
/// assert_eq!(evaluate_with("2 * 3 apples", &lenient), Ok(6.0));
/// assert!(evaluate_with("2 * 3 apples", &Options::default()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Policy for text after the expression.
    pub trailing_input:    TrailingInput,
    /// Policy for literals without digits.
    pub digitless_literal: DigitlessLiteral,
}

impl Options {
    /// Options that ignore trailing input.
    #[must_use]
    pub const fn lenient() -> Self {
        Self { trailing_input:    TrailingInput::Ignore,
               digitless_literal: DigitlessLiteral::Reject, }
    }

    /// Options under which only the hard failures remain: an empty input or
    /// empty literal, an unmatched parenthesis, and division by zero.
    /// Trailing input is ignored and digitless literals read as zero.
    ///
    /// # Example
    /// ```
    /// use reckon::{evaluate_with, options::Options};
    ///
    /// let permissive = Options::permissive();
    /// assert_eq!(evaluate_with("3*.", &permissive), Ok(0.0));
    /// assert_eq!(evaluate_with("12.5.7", &permissive), Ok(12.5));
    /// assert!(evaluate_with("1+", &permissive).is_err());
    /// ```
    #[must_use]
    pub const fn permissive() -> Self {
        Self { trailing_input:    TrailingInput::Ignore,
               digitless_literal: DigitlessLiteral::Zero, }
    }
}
