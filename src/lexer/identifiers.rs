use super::Lexer;
use crate::token::{Token, TokenType};

fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_identifier_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

impl<'a> Lexer<'a> {
    pub(super) fn at_identifier_start(&self) -> bool {
        self.current_char().is_some_and(is_identifier_start)
    }

    /// Scans an identifier or keyword. Aliasing is tried first: if the
    /// lexeme matches an alias-map keyword whose target is itself a
    /// canonical keyword, that keyword wins; otherwise the lexeme is
    /// checked against the built-in keyword table, falling back to a plain
    /// identifier.
    pub(super) fn read_identifier_or_keyword(&mut self) -> Token {
        let start = self.pos;
        let (line, column) = (self.line, self.column);

        while self.current_char().is_some_and(is_identifier_continue) {
            self.advance();
        }

        let lexeme = self.input[start..self.pos].to_string();

        if let Some(aliases) = self.aliases {
            if let Some(target) = aliases.keywords.get(&lexeme) {
                if let Some(kind) = TokenType::keyword_for(target) {
                    return Token::new(kind, lexeme, line, column);
                }
            }
        }

        match TokenType::keyword_for(&lexeme) {
            Some(kind) => Token::new(kind, lexeme, line, column),
            None => Token::new(TokenType::Identifier, lexeme, line, column),
        }
    }
}
