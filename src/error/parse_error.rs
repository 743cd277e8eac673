/// Errors raised while scanning source text into tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("Unknown character '{character}' at position {offset}.")]
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        offset:    usize,
    },
}

impl LexError {
    /// Byte offset in the source where lexing stopped.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnknownCharacter { offset, .. } => *offset,
        }
    }
}

/// Errors raised while building the expression tree from tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// A token appeared where an operand was required.
    #[error("Unexpected token '{token}' at position {offset}.")]
    UnexpectedToken {
        /// Text of the token encountered.
        token:  String,
        /// Byte offset of the token.
        offset: usize,
    },
    /// The input ended where an operand was required.
    #[error("Unexpected end of input at position {offset}.")]
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        offset: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected closing parenthesis ')' at position {offset}, found {token}.")]
    ExpectedClosingParen {
        /// Text of the token found instead (or `end of input`).
        token:  String,
        /// Byte offset of that token.
        offset: usize,
    },
    /// A complete expression was followed by more tokens.
    #[error("Extra tokens after expression at position {offset}: {token}")]
    UnexpectedTrailingTokens {
        /// Text of the first extra token.
        token:  String,
        /// Byte offset of that token.
        offset: usize,
    },
    /// A numeric literal that the decimal parser rejected.
    #[error("Invalid number '{text}' at position {offset}.")]
    InvalidNumber {
        /// The literal text.
        text:   String,
        /// Byte offset of the literal.
        offset: usize,
    },
}

impl SyntaxError {
    /// Byte offset in the source where parsing stopped.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedToken { offset, .. }
            | Self::UnexpectedEndOfInput { offset }
            | Self::ExpectedClosingParen { offset, .. }
            | Self::UnexpectedTrailingTokens { offset, .. }
            | Self::InvalidNumber { offset, .. } => *offset,
        }
    }
}

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The tokenizer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The parser rejected the token sequence.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    /// Byte offset in the source where the failure was detected.
    ///
    /// ## Example
    /// ```
    /// use calculon::parse;
    ///
    /// let error = parse("1 $ 2").unwrap_err();
    /// assert_eq!(error.offset(), 2);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Lex(error) => error.offset(),
            Self::Syntax(error) => error.offset(),
        }
    }
}
