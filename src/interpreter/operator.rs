use crate::{
    error::EvalError,
    interpreter::{parser::core::ParseResult, scanner::is_operator},
};

/// The four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Maps a byte to its operator, or `None` if it is not one of `+ - * /`.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::from_byte(b'/'), Some(Operator::Div));
    /// assert_eq!(Operator::from_byte(b')'), None);
    /// ```
    #[must_use]
    pub const fn from_byte(c: u8) -> Option<Self> {
        if !is_operator(c) {
            return None;
        }
        Some(match c {
                 b'+' => Self::Add,
                 b'-' => Self::Sub,
                 b'*' => Self::Mul,
                 _ => Self::Div,
             })
    }

    /// `+` and `-`, which bind looser than `*` and `/`.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// `*` and `/`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    /// Applies the operator to two operands.
    ///
    /// # Parameters
    /// - `left`, `right`: The operands.
    /// - `position`: Byte offset of the operator, for error reporting.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if this is `/` and `right` is zero. No `inf`
    /// or `NaN` is ever produced from a zero divisor.
    ///
    /// # Example
    /// ```
    /// use reckon::{error::EvalError, interpreter::operator::Operator};
    ///
    /// assert_eq!(Operator::Sub.apply(1.0, 3.0, 0), Ok(-2.0));
    /// assert_eq!(Operator::Div.apply(1.0, -0.0, 7),
    ///            Err(EvalError::DivisionByZero { position: 7 }));
    /// ```
    pub fn apply(self, left: f64, right: f64, position: usize) -> ParseResult<f64> {
        Ok(match self {
               Self::Add => left + right,
               Self::Sub => left - right,
               Self::Mul => left * right,
               Self::Div => {
                   if right == 0.0 {
                       return Err(EvalError::DivisionByZero { position });
                   }
                   left / right
               },
           })
    }
}
