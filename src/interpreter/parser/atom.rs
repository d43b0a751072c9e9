use crate::{
    error::EvalError,
    interpreter::{
        parser::core::{ParseResult, parse_expression},
        scanner::{Cursor, read_number},
    },
};

/// Parses an atom: a numeric literal or a parenthesized group, optionally
/// preceded by a unary minus.
///
/// Leading spaces are skipped. No spaces are allowed between the unary `-`
/// and what it negates.
///
/// Grammar:
/// ```text
///     atom := "-"? ( "(" expression ")" | number )
/// ```
/// # Parameters
/// - `cursor`: Positioned at (or before spaces preceding) the atom.
///
/// # Returns
/// The signed value of the atom.
///
/// # Errors
/// - `MalformedLiteral` if neither a digit nor `(` starts the atom.
/// - `UnmatchedParenthesis` if a group is not closed.
pub(crate) fn parse_atom(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    cursor.skip_spaces();
    let negate = cursor.eat(b'-');

    let value = if cursor.peek() == Some(b'(') {
        parse_grouping(cursor)?
    } else {
        read_number(cursor)?
    };

    Ok(if negate { -value } else { value })
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Errors
/// `UnmatchedParenthesis`, pointing at the opening `(`, if the inner
/// expression is not followed by `)`.
fn parse_grouping(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    let open = cursor.position();
    cursor.open_group();

    let value = parse_expression(cursor)?;

    if cursor.peek() != Some(b')') {
        return Err(EvalError::UnmatchedParenthesis { position: open });
    }
    cursor.close_group()?;

    log::trace!("group {open}..{} = {value}", cursor.position());
    Ok(value)
}
