mod basic_tokens;
mod errors;
mod identifiers;

use crate::lexer::Lexer;
use crate::token::{Token, TokenType};

pub(super) fn lex(src: &str) -> Vec<Token> {
    Lexer::new(src, None).tokenize().expect("lex should succeed")
}

pub(super) fn kinds(src: &str) -> Vec<TokenType> {
    lex(src).into_iter().map(|t| t.kind).collect()
}
