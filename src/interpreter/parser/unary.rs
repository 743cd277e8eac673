use crate::{
    ast::{Expr, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, parse_assignment},
            cursor::TokenCursor,
            utils::{expect_closing_paren, parse_comma_separated},
        },
    },
    util::num::parse_numeral,
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`  (no-op, produces no node)
/// - `-`  (numeric negation)
/// - `~`  (bitwise complement)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "~" | "!") unary
///            | primary
/// ```
/// # Parameters
/// - `cursor`: Token cursor.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub fn parse_unary(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    let token = cursor.current();
    let offset = token.offset;

    let op = match token.kind {
        TokenKind::Plus => {
            cursor.advance();
            return parse_unary(cursor);
        },
        TokenKind::Minus => UnaryOperator::Negate,
        TokenKind::Tilde => UnaryOperator::Complement,
        TokenKind::Bang => UnaryOperator::Not,
        _ => return parse_primary(cursor),
    };

    cursor.advance();
    let expr = parse_unary(cursor)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       offset })
}

/// Parses a primary expression.
///
/// Primary expressions are:
/// - numeric literals (`3.14`, `.5`, `2e10`)
/// - boolean literals (`true` is `1`, `false` is `0`)
/// - parenthesized expressions, which start again at the assignment level
/// - identifiers, either a variable reference or, when followed by `(`, a
///   function call
///
/// # Parameters
/// - `cursor`: Token cursor.
///
/// # Returns
/// The parsed primary expression.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the input ends here.
/// - `UnexpectedToken` for any other token that cannot start an operand.
/// - `ExpectedClosingParen` if a parenthesized expression is not closed.
pub fn parse_primary(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    let token = cursor.current();
    let offset = token.offset;

    match token.kind {
        TokenKind::Number => {
            let value =
                parse_numeral(&token.text).ok_or_else(|| SyntaxError::InvalidNumber { text: token.text.clone(),
                                                                                      offset })?;
            cursor.advance();
            Ok(Expr::Literal { value, offset })
        },
        TokenKind::True | TokenKind::False => {
            let value = if token.kind == TokenKind::True { 1.0 } else { 0.0 };
            cursor.advance();
            Ok(Expr::Literal { value, offset })
        },
        TokenKind::LParen => {
            cursor.advance();
            let expr = parse_assignment(cursor)?;
            expect_closing_paren(cursor)?;
            Ok(expr)
        },
        TokenKind::Identifier => {
            let name = token.text.clone();

            if cursor.advance().kind != TokenKind::LParen {
                return Ok(Expr::Variable { name, offset });
            }
            cursor.advance();

            let arguments = parse_comma_separated(cursor, parse_assignment)?;
            Ok(Expr::FunctionCall { name,
                                    arguments,
                                    offset })
        },
        TokenKind::EndOfInput => Err(SyntaxError::UnexpectedEndOfInput { offset }),
        _ => Err(SyntaxError::UnexpectedToken { token: token.text.clone(),
                                                offset }),
    }
}
