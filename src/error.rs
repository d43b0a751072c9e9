/// Evaluation errors.
///
/// Defines every way a single evaluation can fail: empty input, a malformed
/// numeric literal, unbalanced parentheses, division by zero, and input left
/// over after a complete expression.
pub mod eval_error;

pub use eval_error::EvalError;
