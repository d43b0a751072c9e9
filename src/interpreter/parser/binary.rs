use crate::interpreter::{
    operator::Operator,
    parser::{atom::parse_atom, core::ParseResult},
    scanner::Cursor,
};

/// Parses addition and subtraction.
///
/// Handles the left-associative binary operators `+` and `-`. Each operator
/// is folded into the running value before the next one is looked at, so
/// `1 - 2 - 3` is `(1 - 2) - 3`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `cursor`: Shared read position and nesting depth.
///
/// # Returns
/// The value of the chain.
pub fn parse_additive(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    let mut left = parse_multiplicative(cursor)?;
    loop {
        cursor.skip_spaces();
        let position = cursor.position();
        if let Some(op) = cursor.peek().and_then(Operator::from_byte)
           && op.is_additive()
        {
            cursor.bump();
            let right = parse_multiplicative(cursor)?;
            left = op.apply(left, right, position)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division.
///
/// Handles the left-associative operators `*` and `/`; `9 / 8 / 7` is
/// `(9 / 8) / 7`.
///
/// The rule is: `multiplicative := atom (("*" | "/") atom)*`
///
/// # Parameters
/// - `cursor`: Shared read position and nesting depth.
///
/// # Returns
/// The value of the chain.
///
/// # Errors
/// Returns `DivisionByZero` when a divisor evaluates to zero, plus anything
/// raised while parsing the atoms.
pub fn parse_multiplicative(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    let mut left = parse_atom(cursor)?;
    loop {
        cursor.skip_spaces();
        let position = cursor.position();
        if let Some(op) = cursor.peek().and_then(Operator::from_byte)
           && op.is_multiplicative()
        {
            cursor.bump();
            let right = parse_atom(cursor)?;
            left = op.apply(left, right, position)?;
            continue;
        }
        break;
    }
    Ok(left)
}
