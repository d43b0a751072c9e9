/// Character-level scanning.
///
/// Holds the `Cursor` shared by every level of the descent, the character
/// classifiers, and the numeric literal reader. There is no token stream:
/// the parser reads straight from the cursor.
pub mod scanner;
/// The arithmetic operators and how they combine two values.
pub mod operator;
/// The recursive-descent parser.
///
/// Parses and evaluates in the same pass. Each precedence level is one
/// function; a parenthesized group recurses back to the top level.
///
/// # Responsibilities
/// - Applies precedence and left-associativity.
/// - Tracks parenthesis nesting through the shared cursor.
/// - Reports malformed input as a typed error at the point it is found.
pub mod parser;
