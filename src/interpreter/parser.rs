/// Token cursor used by every parsing function.
///
/// Holds the token sequence and a settable index so that the assignment rule
/// can look ahead and backtrack.
pub mod cursor;

/// Entry points for expression parsing.
///
/// Contains the top-level `parse_source` routine, the trailing-token check
/// and the assignment rule, which is the lowest precedence level.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level from logical OR down to exponentiation,
/// all sharing a left-associative loop.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals, parenthesized expressions, variable
/// references and function calls.
pub mod unary;

/// Parsing utilities.
///
/// Helpers shared by several rules, such as comma-separated argument lists
/// and closing-parenthesis checks.
pub mod utils;
