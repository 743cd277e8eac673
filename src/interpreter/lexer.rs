use logos::Logos;

use crate::{
    error::LexError,
    util::num::{exponent_len, normalize_numeral},
};

/// Classifies a lexical token in the source input.
///
/// Every one-character operator that can also begin a two-character operator
/// is declared next to its longer form; the lexer always prefers the longest
/// match, so `**` is `DoubleStar` and a lone `*` is `Star`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    /// Marks the end of the token sequence. Never produced by the scanner
    /// itself; [`tokenize`] appends it.
    EndOfInput,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `%`
    #[token("%")]
    Percent,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `^`
    #[token("^")]
    Caret,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `~`
    #[token("~")]
    Tilde,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// Identifier tokens; variable or function names such as `x`, `sqrt` or
    /// `π`. A letter followed by letters and digits, in any script.
    #[regex(r"\p{L}[\p{L}\p{N}]*")]
    Identifier,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// Numeric literal tokens, such as `3.14`, `.5`, `3.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?", lex_exponent)]
    #[regex(r"\.[0-9]*", lex_exponent)]
    Number,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use TokenKind::{
            Ampersand, Bang, BangEqual, Caret, Comma, DoubleAmpersand, DoublePipe, DoubleSlash,
            DoubleStar, EndOfInput, EqualEqual, Equals, False, Greater, GreaterEqual, Identifier,
            LParen, Less, LessEqual, Minus, Number, Percent, Pipe, Plus, RParen, ShiftLeft,
            ShiftRight, Slash, Star, Tilde, True,
        };
        let text = match self {
            EndOfInput => "end of input",
            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            DoubleSlash => "//",
            Percent => "%",
            DoubleStar => "**",
            DoubleAmpersand => "&&",
            DoublePipe => "||",
            Bang => "!",
            BangEqual => "!=",
            EqualEqual => "==",
            Greater => ">",
            GreaterEqual => ">=",
            Less => "<",
            LessEqual => "<=",
            Ampersand => "&",
            Pipe => "|",
            Caret => "^",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            Tilde => "~",
            LParen => "(",
            RParen => ")",
            Comma => ",",
            Equals => "=",
            Identifier => "identifier",
            True => "true",
            False => "false",
            Number => "number",
        };
        write!(f, "{text}")
    }
}

/// A classified lexical unit together with its text and source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The token text. Numerals are stored in normalized form (`3.` becomes
    /// `3.0`); the end marker has empty text.
    pub text:   String,
    /// Byte offset of the first character of the token in the source.
    pub offset: usize,
}

impl Token {
    /// Text used to describe this token in error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::EndOfInput {
            self.kind.to_string()
        } else {
            self.text.clone()
        }
    }
}

/// Extends a numeral match over a following exponent.
///
/// The exponent is only consumed when at least one digit follows the marker
/// and its optional sign; otherwise the marker is left for the next token.
fn lex_exponent(lex: &mut logos::Lexer<TokenKind>) {
    let exponent = exponent_len(lex.remainder());
    lex.bump(exponent);
}

/// Converts source text into a token sequence terminated by
/// [`TokenKind::EndOfInput`].
///
/// Whitespace is skipped. The end marker carries the length of the source as
/// its offset.
///
/// # Errors
/// Returns [`LexError::UnknownCharacter`] for the first character that cannot
/// start a token.
///
/// # Example
/// ```
/// use calculon::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("2 ** 3.").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::DoubleStar, TokenKind::Number, TokenKind::EndOfInput]);
/// assert_eq!(tokens[2].text, "3.0");
/// assert_eq!(tokens[3].offset, 7);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let offset = lexer.span().start;
        let Ok(kind) = result else {
            let character = source[offset..].chars().next().unwrap_or_default();
            return Err(LexError::UnknownCharacter { character, offset });
        };

        let text = match kind {
            TokenKind::Number => normalize_numeral(lexer.slice()),
            _ => lexer.slice().to_string(),
        };
        tokens.push(Token { kind, text, offset });
    }

    tracing::trace!(count = tokens.len(), "tokenized expression");

    tokens.push(Token { kind:   TokenKind::EndOfInput,
                        text:   String::new(),
                        offset: source.len(), });
    Ok(tokens)
}
