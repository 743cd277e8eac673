use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::TokenKind,
        parser::{core::ParseResult, cursor::TokenCursor},
    },
};

/// Parses a comma-separated list of items up to and including a closing `)`.
///
/// The cursor must be positioned just after the opening parenthesis. An
/// immediately encountered `)` produces an empty list.
///
/// Grammar (simplified): `list := ")" | item ("," item)* ")"`
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the first item or `)`.
/// - `parse_item`: Function used to parse each list element.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `SyntaxError` if an item fails to parse or the list is not
/// closed by `)`.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    cursor: &mut TokenCursor,
    parse_item: fn(&mut TokenCursor) -> ParseResult<T>)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if cursor.at(TokenKind::RParen) {
        cursor.advance();
        return Ok(items);
    }

    loop {
        items.push(parse_item(cursor)?);
        if cursor.at(TokenKind::Comma) {
            cursor.advance();
            continue;
        }
        break;
    }

    expect_closing_paren(cursor)?;
    Ok(items)
}

/// Consumes a closing parenthesis.
///
/// # Errors
/// `ExpectedClosingParen` naming the token found instead.
pub(in crate::interpreter::parser) fn expect_closing_paren(cursor: &mut TokenCursor)
                                                           -> ParseResult<()> {
    let token = cursor.current();
    if token.kind != TokenKind::RParen {
        return Err(SyntaxError::ExpectedClosingParen { token:  token.describe(),
                                                       offset: token.offset, });
    }
    cursor.advance();
    Ok(())
}
