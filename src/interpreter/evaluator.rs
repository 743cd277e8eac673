/// Core evaluation logic for expressions.
///
/// Declares the [`core::ExecutionContext`] capability and the tree-walking
/// `Expr::eval`.
pub mod core;

/// Unary operator evaluation.
///
/// Handles negation, logical not and bitwise complement.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements arithmetic, comparisons, logical and bitwise operators on
/// `f64` operands.
pub mod binary;

/// Builtin functions.
///
/// The native implementations of the standard library and the registry that
/// resolves a call by name and argument count.
pub mod function;

/// The standard execution context.
///
/// Combines the builtin constants, the function registry and a mutable store
/// of user variables.
pub mod library;
