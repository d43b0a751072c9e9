use crate::{
    error::EvalError,
    interpreter::{parser::binary::parse_additive, scanner::Cursor},
};

pub type ParseResult<T> = Result<T, EvalError>;

/// Parses and evaluates a full expression.
///
/// This is the entry point for expression parsing, used both for the whole
/// input and for the contents of every parenthesized group. It begins at the
/// lowest-precedence level, addition and subtraction, and recursively descends
/// through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `cursor`: Shared read position and nesting depth.
///
/// # Returns
/// The value of the expression. The cursor is left on the first character
/// that is not part of it, past any spaces.
pub fn parse_expression(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    log::trace!("expression at {} (depth {})", cursor.position(), cursor.depth());
    parse_additive(cursor)
}
