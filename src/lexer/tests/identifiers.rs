use super::lex;
use crate::token::TokenType;

#[test]
fn ascii_identifier() {
    let tokens = lex("foo_bar1");
    assert_eq!(tokens[0].kind, TokenType::Identifier);
    assert_eq!(tokens[0].lexeme, "foo_bar1");
}

#[test]
fn non_ascii_identifier_is_accepted() {
    let tokens = lex("café");
    assert_eq!(tokens[0].kind, TokenType::Identifier);
    assert_eq!(tokens[0].lexeme, "café");
}

#[test]
fn underscore_prefixed_identifier() {
    let tokens = lex("_private");
    assert_eq!(tokens[0].kind, TokenType::Identifier);
}
