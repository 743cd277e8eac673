//! # calculon
//!
//! calculon is an embeddable expression evaluator written in Rust.
//! It turns a single line of arithmetic, logical or bitwise notation into an
//! `f64`, resolving variables and function calls through a caller-supplied
//! execution context.
//!
//! ```
//! use calculon::{StandardLibrary, evaluate};
//!
//! let mut context = StandardLibrary::new();
//!
//! assert_eq!(evaluate("2 + 3 * 4", &mut context).unwrap(), 14.0);
//! assert_eq!(evaluate("x = fib(10)", &mut context).unwrap(), 55.0);
//! assert_eq!(evaluate("x // 2 | 1", &mut context).unwrap(), 27.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// the syntactic structure of an expression as a tree. The AST is built by the
/// parser and evaluated against an execution context.
///
/// # Responsibilities
/// - Defines the closed set of expression nodes.
/// - Attaches source offsets to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating an expression. Lexical, syntax and runtime errors are distinct
/// types so callers can match on the stage that failed.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source offsets and detailed messages.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the stages of expression evaluation.
///
/// This module ties together lexing, parsing and evaluation, and hosts the
/// execution context abstraction with its standard implementation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides the building blocks behind [`parse`] and [`evaluate`].
pub mod interpreter;
/// General utilities for numeric parsing and conversion.
///
/// # Responsibilities
/// - Parse numerals independently of the host locale.
/// - Convert between `f64` and integer types without silent surprises.
pub mod util;

pub use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        evaluator::{core::ExecutionContext, library::StandardLibrary},
        lexer::{Token, TokenKind, tokenize},
    },
};

/// Parses a single-line expression into an AST.
///
/// # Errors
/// Returns a [`error::ParseError`] holding either the lexical error or the
/// syntax error, each with the byte offset where it was detected.
///
/// # Examples
/// ```
/// use calculon::{Expr, parse};
///
/// let expr = parse("(2 + 3) * 4").unwrap();
/// assert!(matches!(expr, Expr::BinaryOp { .. }));
///
/// assert!(parse("1 +").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, error::ParseError> {
    interpreter::parser::core::parse_source(source)
}

/// Parses `source` and evaluates it against `context`.
///
/// The context is borrowed mutably because an assignment stores its value in
/// it; the same context can be reused so that variables persist between
/// calls.
///
/// # Errors
/// Returns an error if tokenizing, parsing or evaluation fails. A failure
/// part-way through evaluation keeps any assignment that already happened.
///
/// # Examples
/// ```
/// use calculon::{Error, StandardLibrary, error::RuntimeError, evaluate};
///
/// let mut context = StandardLibrary::new();
///
/// assert_eq!(evaluate("x = 5", &mut context).unwrap(), 5.0);
/// assert_eq!(evaluate("x + 1", &mut context).unwrap(), 6.0);
///
/// let error = evaluate("pi = 3", &mut context).unwrap_err();
/// assert!(matches!(error, Error::Runtime(RuntimeError::ConstantReassignment { .. })));
/// ```
pub fn evaluate<C>(source: &str, context: &mut C) -> Result<f64, Error>
    where C: ExecutionContext + ?Sized
{
    tracing::debug!(source, "evaluating expression");

    let expr = parse(source)?;
    let value = expr.eval(context)?;

    tracing::debug!(source, value, "evaluated expression");
    Ok(value)
}
