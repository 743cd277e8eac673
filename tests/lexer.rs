use calculon::{Token, TokenKind, error::LexError, tokenize};

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).unwrap_or_else(|e| panic!("`{src}` failed to tokenize: {e}"))
                 .into_iter()
                 .map(|t| t.kind)
                 .collect()
}

fn texts(src: &str) -> Vec<String> {
    tokenize(src).unwrap_or_else(|e| panic!("`{src}` failed to tokenize: {e}"))
                 .into_iter()
                 .filter(|t| t.kind != TokenKind::EndOfInput)
                 .map(|t| t.text)
                 .collect()
}

#[test]
fn two_character_operators_win_over_single_ones() {
    use TokenKind::*;

    assert_eq!(kinds("** // && || != == >= <= << >>"),
               vec![DoubleStar, DoubleSlash, DoubleAmpersand, DoublePipe, BangEqual, EqualEqual,
                    GreaterEqual, LessEqual, ShiftLeft, ShiftRight, EndOfInput]);
    assert_eq!(kinds("* / & | ! = > < + - % ^ ~ ( ) ,"),
               vec![Star, Slash, Ampersand, Pipe, Bang, Equals, Greater, Less, Plus, Minus,
                    Percent, Caret, Tilde, LParen, RParen, Comma, EndOfInput]);
}

#[test]
fn operators_need_no_whitespace() {
    use TokenKind::*;

    assert_eq!(kinds("a**b//c"),
               vec![Identifier, DoubleStar, Identifier, DoubleSlash, Identifier, EndOfInput]);
    assert_eq!(kinds("1<=-2"), vec![Number, LessEqual, Minus, Number, EndOfInput]);
    assert_eq!(kinds("***"), vec![DoubleStar, Star, EndOfInput]);
    assert_eq!(kinds("x=!y"), vec![Identifier, Equals, Bang, Identifier, EndOfInput]);
}

#[test]
fn numerals_follow_the_numeric_grammar() {
    assert_eq!(texts("42 3.14 .5 1e10 1.5e-3 2E+7"),
               vec!["42", "3.14", ".5", "1e10", "1.5e-3", "2E+7"]);
}

#[test]
fn trailing_decimal_point_gets_a_zero() {
    assert_eq!(texts("3."), vec!["3.0"]);
    assert_eq!(texts("."), vec![".0"]);
    assert_eq!(texts("1.e5"), vec!["1.0e5"]);
}

#[test]
fn incomplete_exponent_is_left_for_the_next_token() {
    use TokenKind::*;

    assert_eq!(kinds("2e"), vec![Number, Identifier, EndOfInput]);
    assert_eq!(texts("2e"), vec!["2", "e"]);
    assert_eq!(kinds("2e+"), vec![Number, Identifier, Plus, EndOfInput]);
    assert_eq!(kinds("2e-x"), vec![Number, Identifier, Minus, Identifier, EndOfInput]);
}

#[test]
fn second_decimal_point_starts_a_new_number() {
    assert_eq!(texts("1.2.3"), vec!["1.2", ".3"]);
}

#[test]
fn identifiers_and_keywords() {
    use TokenKind::*;

    assert_eq!(kinds("true false"), vec![True, False, EndOfInput]);
    assert_eq!(kinds("trueish True falsey"),
               vec![Identifier, Identifier, Identifier, EndOfInput]);
    assert_eq!(texts("log10 x2y"), vec!["log10", "x2y"]);
    assert_eq!(kinds("2x"), vec![Number, Identifier, EndOfInput]);
}

#[test]
fn identifiers_may_use_any_script() {
    use TokenKind::*;

    assert_eq!(kinds("π * r²"), vec![Identifier, Star, Identifier, EndOfInput]);
    assert_eq!(texts("größe2 Ωmega"), vec!["größe2", "Ωmega"]);

    let tokens = tokenize("π + 1").unwrap();
    assert_eq!(tokens[1].offset, 3);
    assert_eq!(tokens[2].offset, 5);
}

#[test]
fn tokens_carry_byte_offsets() {
    let tokens = tokenize("  ab + 12").unwrap();

    assert_eq!(tokens,
               vec![Token { kind:   TokenKind::Identifier,
                            text:   "ab".to_string(),
                            offset: 2, },
                    Token { kind:   TokenKind::Plus,
                            text:   "+".to_string(),
                            offset: 5, },
                    Token { kind:   TokenKind::Number,
                            text:   "12".to_string(),
                            offset: 7, },
                    Token { kind:   TokenKind::EndOfInput,
                            text:   String::new(),
                            offset: 9, },]);
}

#[test]
fn empty_input_yields_only_the_end_marker() {
    assert_eq!(kinds(""), vec![TokenKind::EndOfInput]);
    assert_eq!(kinds(" \t "), vec![TokenKind::EndOfInput]);
}

#[test]
fn unknown_characters_are_rejected() {
    assert_eq!(tokenize("1 $ 2"),
               Err(LexError::UnknownCharacter { character: '$',
                                                offset:    2, }));
    assert_eq!(tokenize("x @"),
               Err(LexError::UnknownCharacter { character: '@',
                                                offset:    2, }));
    assert_eq!(tokenize("a_b").unwrap_err().offset(), 1);
}
