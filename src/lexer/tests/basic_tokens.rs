use super::{kinds, lex};
use crate::token::TokenType;

#[test]
fn empty_input_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenType::Eof]);
}

#[test]
fn single_identifier() {
    let tokens = lex("x");
    assert_eq!(tokens[0].kind, TokenType::Identifier);
    assert_eq!(tokens[0].lexeme, "x");
    assert_eq!(tokens[1].kind, TokenType::Eof);
}

#[test]
fn assignment_statement() {
    assert_eq!(
        kinds("x = 1"),
        vec![
            TokenType::Identifier,
            TokenType::Assign,
            TokenType::Integer,
            TokenType::Eof,
        ]
    );
}

#[test]
fn punctuation_is_recognized() {
    assert_eq!(
        kinds("([{}])"),
        vec![
            TokenType::LParen,
            TokenType::LBracket,
            TokenType::LBrace,
            TokenType::RBrace,
            TokenType::RBracket,
            TokenType::RParen,
            TokenType::Eof,
        ]
    );
}
