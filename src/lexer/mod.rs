//! UTF-8-aware lexer producing a token vector from source text.

mod cursor;
mod error;
mod identifiers;
mod numbers;
mod operators;
mod skip;
mod strings;

#[cfg(test)]
mod tests;

pub use error::{LexerError, LexerErrorKind};

use crate::alias::AliasMap;
use crate::token::{Token, TokenType};

pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    aliases: Option<&'a AliasMap>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, aliases: Option<&'a AliasMap>) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
            aliases,
        }
    }

    pub fn set_aliases(mut self, aliases: &'a AliasMap) -> Self {
        self.aliases = Some(aliases);
        self
    }

    /// Scans the full input into a token vector terminated by `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_inline_whitespace();

            if self.at_block_comment_start() {
                self.skip_block_comment()?;
                continue;
            }
            if self.at_line_comment_start() {
                self.skip_line_comment();
                continue;
            }

            let (line, column) = (self.line, self.column);

            match self.current_char() {
                None => {
                    tokens.push(Token::new(TokenType::Eof, "", line, column));
                    return Ok(tokens);
                }
                Some('\n') => {
                    self.advance();
                    tokens.push(Token::new(TokenType::Newline, "\n", line, column));
                }
                Some('"') | Some('\'') => {
                    let quote = self.current_char().unwrap();
                    tokens.push(self.read_string(quote)?);
                }
                Some(c) if c.is_ascii_digit() => {
                    tokens.push(self.read_number()?);
                }
                _ if self.at_identifier_start() => {
                    tokens.push(self.read_identifier_or_keyword());
                }
                _ => {
                    tokens.push(self.read_operator_or_punctuation()?);
                }
            }
        }
    }
}
