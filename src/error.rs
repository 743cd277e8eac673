/// Lexing and parsing errors.
///
/// Defines the errors that can occur while turning source text into tokens
/// and tokens into an expression tree. Every variant records the byte offset
/// in the source at which the problem was detected.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while an expression tree is
/// evaluated against an execution context: unknown names, constant
/// reassignment, wrong argument counts and domain errors of builtins.
pub mod runtime_error;

pub use parse_error::{LexError, ParseError, SyntaxError};
pub use runtime_error::RuntimeError;

/// Any failure of [`crate::evaluate`].
///
/// Parse failures and runtime failures stay distinct so callers can tell a
/// malformed expression apart from one that could not be evaluated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The source could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression was well formed but evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Parse(error.into())
    }
}

impl From<SyntaxError> for Error {
    fn from(error: SyntaxError) -> Self {
        Self::Parse(error.into())
    }
}
