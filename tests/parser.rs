use calculon::{
    Expr,
    ast::{BinaryOperator, UnaryOperator},
    error::{ParseError, SyntaxError},
    parse,
};

fn lit(value: f64, offset: usize) -> Expr {
    Expr::Literal { value, offset }
}

fn var(name: &str, offset: usize) -> Expr {
    Expr::Variable { name: name.to_string(),
                     offset }
}

fn bin(left: Expr, op: BinaryOperator, right: Expr, offset: usize) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     offset }
}

fn syntax_error(src: &str) -> SyntaxError {
    match parse(src) {
        Err(ParseError::Syntax(e)) => e,
        other => panic!("`{src}` should be a syntax error, got {other:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(parse("2 + 3 * 4").unwrap(),
               bin(lit(2.0, 0),
                   BinaryOperator::Add,
                   bin(lit(3.0, 4), BinaryOperator::Mul, lit(4.0, 8), 6),
                   2));
}

#[test]
fn power_groups_to_the_left() {
    assert_eq!(parse("2 ** 3 ** 2").unwrap(),
               bin(bin(lit(2.0, 0), BinaryOperator::Pow, lit(3.0, 5), 2),
                   BinaryOperator::Pow,
                   lit(2.0, 10),
                   7));
}

#[test]
fn each_level_maps_to_its_operator() {
    let cases = [("a || b", BinaryOperator::Or),
                 ("a && b", BinaryOperator::And),
                 ("a | b", BinaryOperator::BitOr),
                 ("a ^ b", BinaryOperator::BitXor),
                 ("a & b", BinaryOperator::BitAnd),
                 ("a == b", BinaryOperator::Equal),
                 ("a != b", BinaryOperator::NotEqual),
                 ("a < b", BinaryOperator::Less),
                 ("a <= b", BinaryOperator::LessEqual),
                 ("a > b", BinaryOperator::Greater),
                 ("a >= b", BinaryOperator::GreaterEqual),
                 ("a << b", BinaryOperator::ShiftLeft),
                 ("a >> b", BinaryOperator::ShiftRight),
                 ("a - b", BinaryOperator::Sub),
                 ("a / b", BinaryOperator::Div),
                 ("a // b", BinaryOperator::IntDiv),
                 ("a % b", BinaryOperator::Mod)];

    for (src, op) in cases {
        let Expr::BinaryOp { op: parsed, .. } = parse(src).unwrap() else {
            panic!("`{src}` did not parse to a binary operation");
        };
        assert_eq!(parsed, op, "wrong operator for `{src}`");
    }
}

#[test]
fn unary_plus_leaves_no_node() {
    assert_eq!(parse("+-x").unwrap(),
               Expr::UnaryOp { op:     UnaryOperator::Negate,
                               expr:   Box::new(var("x", 2)),
                               offset: 1, });
    assert_eq!(parse("+5").unwrap(), lit(5.0, 1));
}

#[test]
fn unary_binds_tighter_than_power() {
    let Expr::BinaryOp { left, op, .. } = parse("-2 ** 2").unwrap() else {
        panic!("expected a binary operation");
    };
    assert_eq!(op, BinaryOperator::Pow);
    assert!(matches!(*left, Expr::UnaryOp { op: UnaryOperator::Negate, .. }));
}

#[test]
fn assignment_needs_an_identifier_followed_by_equals() {
    assert_eq!(parse("x = 1 + 2").unwrap(),
               Expr::Assignment { name:   "x".to_string(),
                                  value:  Box::new(bin(lit(1.0, 4),
                                                       BinaryOperator::Add,
                                                       lit(2.0, 8),
                                                       6)),
                                  offset: 0, });

    assert_eq!(parse("x == 1").unwrap(),
               bin(var("x", 0), BinaryOperator::Equal, lit(1.0, 5), 2));
    assert_eq!(parse("x + 1").unwrap(),
               bin(var("x", 0), BinaryOperator::Add, lit(1.0, 4), 2));
}

#[test]
fn assignment_inside_parentheses_and_arguments() {
    assert!(matches!(parse("(y = 2) * 3").unwrap(), Expr::BinaryOp { .. }));

    let Expr::FunctionCall { name, arguments, .. } = parse("f(1, y = 2)").unwrap() else {
        panic!("expected a function call");
    };
    assert_eq!(name, "f");
    assert_eq!(arguments.len(), 2);
    assert!(matches!(arguments[1], Expr::Assignment { .. }));
}

#[test]
fn function_calls() {
    assert_eq!(parse("f()").unwrap(),
               Expr::FunctionCall { name:      "f".to_string(),
                                    arguments: vec![],
                                    offset:    0, });
    assert_eq!(parse("max(a, 2)").unwrap(),
               Expr::FunctionCall { name:      "max".to_string(),
                                    arguments: vec![var("a", 4), lit(2.0, 7)],
                                    offset:    0, });
    assert_eq!(parse("f (1)").unwrap(),
               Expr::FunctionCall { name:      "f".to_string(),
                                    arguments: vec![lit(1.0, 3)],
                                    offset:    0, });
}

#[test]
fn booleans_become_literals() {
    assert_eq!(parse("true").unwrap(), lit(1.0, 0));
    assert_eq!(parse("false").unwrap(), lit(0.0, 0));
}

#[test]
fn syntax_errors_carry_offsets() {
    assert_eq!(syntax_error(""), SyntaxError::UnexpectedEndOfInput { offset: 0 });
    assert_eq!(syntax_error("1 + "), SyntaxError::UnexpectedEndOfInput { offset: 4 });
    assert_eq!(syntax_error("x = "), SyntaxError::UnexpectedEndOfInput { offset: 4 });
    assert_eq!(syntax_error("(1 + 2"),
               SyntaxError::ExpectedClosingParen { token:  "end of input".to_string(),
                                                   offset: 6, });
    assert_eq!(syntax_error("f(1, 2"),
               SyntaxError::ExpectedClosingParen { token:  "end of input".to_string(),
                                                   offset: 6, });
    assert_eq!(syntax_error("f(1 2)"),
               SyntaxError::ExpectedClosingParen { token:  "2".to_string(),
                                                   offset: 4, });
    assert_eq!(syntax_error("1 2"),
               SyntaxError::UnexpectedTrailingTokens { token:  "2".to_string(),
                                                       offset: 2, });
    assert_eq!(syntax_error(")"),
               SyntaxError::UnexpectedToken { token:  ")".to_string(),
                                              offset: 0, });
    assert_eq!(syntax_error("f(,)"),
               SyntaxError::UnexpectedToken { token:  ",".to_string(),
                                              offset: 2, });
    assert_eq!(syntax_error("1 + * 2"),
               SyntaxError::UnexpectedToken { token:  "*".to_string(),
                                              offset: 4, });
}

#[test]
fn lexical_errors_surface_through_parse() {
    let error = parse("1 $").unwrap_err();

    assert!(matches!(error, ParseError::Lex(_)));
    assert_eq!(error.offset(), 2);
}

#[test]
fn parsing_is_repeatable() {
    let src = "a = sd(1, 2, 3) * -(b // 2) ** 2 >= ~c || !d";
    assert_eq!(parse(src).unwrap(), parse(src).unwrap());
}
