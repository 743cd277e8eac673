use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::{core::ParseResult, cursor::TokenCursor, unary::parse_unary},
    },
};

/// Parses one left-associative precedence level.
///
/// Parses an operand with `next`, then keeps folding `operand (op operand)*`
/// into a left-leaning tree as long as the current token maps to an operator
/// accepted by `accepts`.
///
/// # Parameters
/// - `cursor`: Token cursor.
/// - `next`: Parser for the next-higher precedence level.
/// - `accepts`: Selects the operators that belong to this level.
fn parse_left_associative(cursor: &mut TokenCursor,
                          next: fn(&mut TokenCursor) -> ParseResult<Expr>,
                          accepts: fn(BinaryOperator) -> bool)
                          -> ParseResult<Expr> {
    let mut left = next(cursor)?;
    loop {
        let token = cursor.current();
        if let Some(op) = token_to_binary_operator(token.kind)
           && accepts(op)
        {
            let offset = token.offset;
            cursor.advance();
            let right = next(cursor)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    offset };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses logical OR expressions.
///
/// Grammar: `or := and ("||" and)*`
pub fn parse_logical_or(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    parse_left_associative(cursor, parse_logical_and, |op| op == BinaryOperator::Or)
}

/// Parses logical AND expressions.
///
/// Grammar: `and := bit_or ("&&" bit_or)*`
pub fn parse_logical_and(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    parse_left_associative(cursor, parse_bitwise_or, |op| op == BinaryOperator::And)
}

/// Parses bitwise OR and XOR, which share a precedence level.
///
/// Grammar: `bit_or := bit_and (("|" | "^") bit_and)*`
pub fn parse_bitwise_or(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    parse_left_associative(cursor, parse_bitwise_and, |op| {
        matches!(op, BinaryOperator::BitOr | BinaryOperator::BitXor)
    })
}

/// Parses bitwise AND.
///
/// Grammar: `bit_and := equality ("&" equality)*`
pub fn parse_bitwise_and(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    parse_left_associative(cursor, parse_equality, |op| op == BinaryOperator::BitAnd)
}

/// Parses equality comparisons.
///
/// Grammar: `equality := relational (("==" | "!=") relational)*`
pub fn parse_equality(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    parse_left_associative(cursor, parse_relational, |op| {
        matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
    })
}

/// Parses relational comparisons.
///
/// Grammar: `relational := shift (("<" | "<=" | ">" | ">=") shift)*`
pub fn parse_relational(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    parse_left_associative(cursor, parse_shift, |op| {
        matches!(op,
                 BinaryOperator::Less
                 | BinaryOperator::LessEqual
                 | BinaryOperator::Greater
                 | BinaryOperator::GreaterEqual)
    })
}

/// Parses bit shifts.
///
/// Grammar: `shift := additive (("<<" | ">>") additive)*`
pub fn parse_shift(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    parse_left_associative(cursor, parse_additive, |op| {
        matches!(op, BinaryOperator::ShiftLeft | BinaryOperator::ShiftRight)
    })
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    parse_left_associative(cursor, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication-level expressions.
///
/// Grammar: `multiplicative := power (("*" | "/" | "//" | "%") power)*`
pub fn parse_multiplicative(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    parse_left_associative(cursor, parse_power, |op| {
        matches!(op,
                 BinaryOperator::Mul
                 | BinaryOperator::Div
                 | BinaryOperator::IntDiv
                 | BinaryOperator::Mod)
    })
}

/// Parses exponentiation expressions.
///
/// Exponentiation shares the left-associative loop of the other levels, so
/// `2 ** 3 ** 2` parses as `(2 ** 3) ** 2`.
///
/// Grammar: `power := unary ("**" unary)*`
pub fn parse_power(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    parse_left_associative(cursor, parse_unary, |op| op == BinaryOperator::Pow)
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for tokens that never act as binary operators, including
/// `!`, `~` and `=`.
///
/// # Example
/// ```
/// use calculon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::DoubleSlash),
///            Some(BinaryOperator::IntDiv));
/// assert_eq!(token_to_binary_operator(TokenKind::Tilde), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::DoublePipe => Some(BinaryOperator::Or),
        TokenKind::DoubleAmpersand => Some(BinaryOperator::And),
        TokenKind::Pipe => Some(BinaryOperator::BitOr),
        TokenKind::Caret => Some(BinaryOperator::BitXor),
        TokenKind::Ampersand => Some(BinaryOperator::BitAnd),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::ShiftLeft => Some(BinaryOperator::ShiftLeft),
        TokenKind::ShiftRight => Some(BinaryOperator::ShiftRight),
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::DoubleSlash => Some(BinaryOperator::IntDiv),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::DoubleStar => Some(BinaryOperator::Pow),
        _ => None,
    }
}
