use crate::{
    error::LexError,
    interpreter::lexer::{Token, TokenKind, tokenize},
};

/// A position within a fully materialized token sequence.
///
/// The sequence comes straight from [`tokenize`] and therefore always ends
/// with a [`TokenKind::EndOfInput`] token, so
/// [`TokenCursor::current`] is always valid and [`TokenCursor::advance`]
/// never moves past the end marker.
///
/// # Example
/// ```
/// use calculon::interpreter::{lexer::TokenKind, parser::cursor::TokenCursor};
///
/// let mut cursor = TokenCursor::from_source("x = 1").unwrap();
/// let start = cursor.position();
///
/// assert_eq!(cursor.advance().kind, TokenKind::Equals);
/// cursor.reset(start);
/// assert_eq!(cursor.current().text, "x");
/// ```
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    index:  usize,
}

impl TokenCursor {
    /// Tokenizes `source` and places the cursor at the first token.
    pub fn from_source(source: &str) -> Result<Self, LexError> {
        Ok(Self { tokens: tokenize(source)?,
                  index:  0, })
    }

    /// The token under the cursor.
    #[must_use]
    pub fn current(&self) -> &Token {
        &self.tokens[self.index]
    }

    /// Moves to the next token and returns it. Stays on the end marker once
    /// it has been reached.
    pub fn advance(&mut self) -> &Token {
        if self.index + 1 < self.tokens.len() {
            self.index += 1;
        }
        self.current()
    }

    /// Returns `true` if the current token has the given kind.
    #[must_use]
    pub fn at(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Index of the current token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.index
    }

    /// Moves the cursor back (or forward) to a position obtained from
    /// [`TokenCursor::position`]. Out-of-range positions clamp to the end
    /// marker.
    pub fn reset(&mut self, position: usize) {
        self.index = position.min(self.tokens.len() - 1);
    }
}
