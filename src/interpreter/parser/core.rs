use crate::{
    ast::Expr,
    error::{ParseError, SyntaxError},
    interpreter::{
        lexer::TokenKind,
        parser::{binary::parse_logical_or, cursor::TokenCursor},
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Tokenizes and parses a complete expression.
///
/// # Errors
/// Returns [`ParseError::Lex`] if the source cannot be tokenized and
/// [`ParseError::Syntax`] if the tokens do not form exactly one expression.
pub fn parse_source(source: &str) -> Result<Expr, ParseError> {
    let mut cursor = TokenCursor::from_source(source)?;
    Ok(parse_expression(&mut cursor)?)
}

/// Parses a full expression and requires that all tokens are consumed.
///
/// Grammar: `expression := assignment EOF`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first token.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// `UnexpectedTrailingTokens` if anything but the end marker follows the
/// expression.
pub fn parse_expression(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    let expr = parse_assignment(cursor)?;

    let token = cursor.current();
    if token.kind != TokenKind::EndOfInput {
        return Err(SyntaxError::UnexpectedTrailingTokens { token:  token.describe(),
                                                           offset: token.offset, });
    }

    Ok(expr)
}

/// Parses an assignment or falls through to logical OR.
///
/// An identifier immediately followed by `=` starts an assignment whose
/// right-hand side is parsed at the logical OR level. Otherwise the cursor is
/// restored to where it started. Assignment is not associative: `a = b = 1`
/// fails on the second `=`, but `a = (b = 1)` works because parentheses
/// re-enter this rule.
///
/// Grammar: `assignment := IDENT "=" logical_or | logical_or`
///
/// # Parameters
/// - `cursor`: Token cursor.
///
/// # Returns
/// An [`Expr::Assignment`] or whatever the lower levels produce.
pub fn parse_assignment(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    let start = cursor.position();

    if cursor.at(TokenKind::Identifier) {
        let name = cursor.current().text.clone();
        let offset = cursor.current().offset;

        if cursor.advance().kind == TokenKind::Equals {
            cursor.advance();
            let value = parse_logical_or(cursor)?;
            return Ok(Expr::Assignment { name,
                                         value: Box::new(value),
                                         offset });
        }
    }

    cursor.reset(start);
    parse_logical_or(cursor)
}
