/// Parser entry point and shared result type.
///
/// Defines `ParseResult` and `parse_expression`, the rule invoked for the
/// whole input and again for every parenthesized group.
pub mod core;

/// Binary operator chains.
///
/// Folds left-associative `+`/`-` chains over terms and `*`/`/` chains over
/// atoms, computing the value as each operator is consumed.
pub mod binary;

/// Atoms.
///
/// Signed numeric literals and parenthesized sub-expressions, the highest
/// precedence level.
pub mod atom;
