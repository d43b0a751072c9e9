use crate::{error::EvalError, interpreter::parser::core::ParseResult, options::DigitlessLiteral};

/// Read position and parenthesis nesting for one evaluation.
///
/// The cursor only ever moves forward. It is created once per evaluation and
/// handed down the whole descent as `&mut Cursor`, so every level observes
/// the same position and depth.
///
/// # Example
/// ```
/// use reckon::interpreter::scanner::Cursor;
///
/// let mut cursor = Cursor::new("  (1)");
/// cursor.skip_spaces();
/// assert_eq!(cursor.position(), 2);
/// assert_eq!(cursor.peek(), Some(b'('));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input:     &'a str,
    position:  usize,
    depth:     usize,
    digitless: DigitlessLiteral,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `input` with no open groups.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input,
               position: 0,
               depth: 0,
               digitless: DigitlessLiteral::Reject }
    }

    /// Sets how [`read_number`] treats a literal with no digits.
    #[must_use]
    pub const fn with_digitless_literal(mut self, policy: DigitlessLiteral) -> Self {
        self.digitless = policy;
        self
    }

    /// Byte offset of the next unread character.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of currently open parenthesis groups.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the next byte without consuming it, or `None` at end of input.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    /// Returns the full character at the cursor, or `None` at end of input.
    ///
    /// The cursor only ever advances over ASCII bytes, so it always sits on a
    /// character boundary.
    #[must_use]
    pub fn current_char(&self) -> Option<char> {
        self.input.get(self.position..).and_then(|rest| rest.chars().next())
    }

    /// Consumes one byte. Does nothing at end of input.
    pub fn bump(&mut self) {
        if self.position < self.input.len() {
            self.position += 1;
        }
    }

    /// Consumes `expected` if it is the next byte.
    ///
    /// # Returns
    /// `true` if the byte was consumed.
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Skips over spaces. Other whitespace is not part of the grammar.
    pub fn skip_spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.bump();
        }
    }

    /// Consumes a `(` and records one more open group.
    pub fn open_group(&mut self) {
        debug_assert_eq!(self.peek(), Some(b'('));
        self.bump();
        self.depth += 1;
    }

    /// Consumes a `)` and closes the innermost open group.
    ///
    /// # Errors
    /// Returns `UnmatchedParenthesis` if the cursor is not on `)` or no group
    /// is open.
    pub fn close_group(&mut self) -> ParseResult<()> {
        let position = self.position;
        if self.peek() != Some(b')') {
            return Err(EvalError::UnmatchedParenthesis { position });
        }
        self.depth = self.depth
                         .checked_sub(1)
                         .ok_or(EvalError::UnmatchedParenthesis { position })?;
        self.bump();
        Ok(())
    }
}

/// Returns `true` if `c` is an ASCII digit `0`-`9`.
///
/// # Example
/// ```
/// use reckon::interpreter::scanner::is_digit;
///
/// assert!(is_digit(b'7'));
/// assert!(!is_digit(b'.'));
/// ```
#[must_use]
pub const fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Returns `true` if `c` is one of the four binary operators `+ - / *`.
#[must_use]
pub const fn is_operator(c: u8) -> bool {
    matches!(c, b'+' | b'-' | b'/' | b'*')
}

fn to_digit(c: u8) -> f64 {
    f64::from(c - b'0')
}

/// Reads a numeric literal starting at the cursor.
///
/// Accepts an optional leading `-`, then the longest run of digits and
/// decimal points. The first `.` starts the fractional part. A second `.`
/// ends the literal right there and is left unconsumed, so `12.3.5` reads as
/// `12.3` with the cursor on the second `.`.
///
/// Each fractional digit is scaled as it is read, so arbitrarily long
/// fractions stay finite.
///
/// # Parameters
/// - `cursor`: Positioned at the first character of the literal.
///
/// # Returns
/// The literal's value. The cursor is left just past the last consumed
/// character.
///
/// # Errors
/// Returns `MalformedLiteral` if nothing was consumed, or if no digit was
/// read and the cursor rejects digitless literals.
///
/// # Example
/// ```
/// use reckon::{
///     interpreter::scanner::{Cursor, read_number},
///     options::DigitlessLiteral,
/// };
///
/// let mut cursor = Cursor::new("12.3.5");
/// assert!((read_number(&mut cursor).unwrap() - 12.3).abs() < 1e-12);
/// assert_eq!(cursor.position(), 4);
///
/// let mut cursor = Cursor::new("-.5");
/// assert_eq!(read_number(&mut cursor).unwrap(), -0.5);
///
/// assert!(read_number(&mut Cursor::new("+1")).is_err());
/// assert!(read_number(&mut Cursor::new(".")).is_err());
///
/// let mut cursor = Cursor::new(".").with_digitless_literal(DigitlessLiteral::Zero);
/// assert_eq!(read_number(&mut cursor).unwrap(), 0.0);
/// ```
pub fn read_number(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    let start = cursor.position();
    let found = cursor.current_char();

    let sign = if cursor.eat(b'-') { -1.0 } else { 1.0 };

    let mut mantissa = 0.0;
    let mut fraction = 0.0;
    let mut divisor = 1.0;
    let mut in_fraction = false;
    let mut digits = 0_usize;

    while let Some(c) = cursor.peek() {
        if is_digit(c) {
            if in_fraction {
                divisor *= 10.0;
                fraction += to_digit(c) / divisor;
            } else {
                mantissa = mantissa * 10.0 + to_digit(c);
            }
            digits += 1;
        } else if c == b'.' {
            if in_fraction {
                break;
            }
            in_fraction = true;
        } else {
            break;
        }
        cursor.bump();
    }

    let empty = cursor.position() == start;
    if empty || (digits == 0 && cursor.digitless == DigitlessLiteral::Reject) {
        return Err(EvalError::MalformedLiteral { position: start,
                                                 found });
    }

    let value = sign * (mantissa + fraction);
    log::trace!("literal {value} at {start}..{}", cursor.position());
    Ok(value)
}
