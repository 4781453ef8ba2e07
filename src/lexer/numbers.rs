use super::error::{LexerError, LexerErrorKind};
use super::Lexer;
use crate::token::{Token, TokenType};

impl<'a> Lexer<'a> {
    /// Scans an integer, float, or `0x`-prefixed hex integer starting at the
    /// current (already-confirmed-digit) position. Leading sign is never
    /// part of the literal; `-3` lexes as two tokens.
    pub(super) fn read_number(&mut self) -> Result<Token, LexerError> {
        let start_byte = self.pos;
        let (line, column) = (self.line, self.column);

        if self.current_char() == Some('0') && matches!(self.peek_char(1), Some('x') | Some('X')) {
            self.advance();
            self.advance();
            let hex_start = self.pos;
            while self.current_char().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.advance();
            }
            if self.pos == hex_start {
                return Err(LexerError::new(
                    LexerErrorKind::InvalidNumber,
                    "expected hex digits after '0x'",
                    line,
                    column,
                ));
            }
            let lexeme = self.input[start_byte..self.pos].to_string();
            let digits = &self.input[hex_start..self.pos];
            if u64::from_str_radix(digits, 16).is_err() {
                return Err(LexerError::new(
                    LexerErrorKind::InvalidNumber,
                    format!("malformed hex integer literal '{lexeme}'"),
                    line,
                    column,
                ));
            }
            return Ok(Token::new(TokenType::Integer, lexeme, line, column));
        }

        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let mut is_float = false;

        if self.current_char() == Some('.') && self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance();
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if matches!(self.current_char(), Some('e') | Some('E')) {
            let mut lookahead = 1;
            if matches!(self.peek_char(1), Some('+') | Some('-')) {
                lookahead = 2;
            }
            if self.peek_char(lookahead).is_some_and(|c| c.is_ascii_digit()) {
                is_float = true;
                self.advance();
                if matches!(self.current_char(), Some('+') | Some('-')) {
                    self.advance();
                }
                while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            } else if lookahead == 2 {
                return Err(LexerError::new(
                    LexerErrorKind::InvalidNumber,
                    "expected digits after exponent sign",
                    line,
                    column,
                ));
            }
        }

        let lexeme = self.input[start_byte..self.pos].to_string();

        if is_float {
            if lexeme.parse::<f64>().is_err() {
                return Err(LexerError::new(
                    LexerErrorKind::InvalidNumber,
                    format!("malformed float literal '{lexeme}'"),
                    line,
                    column,
                ));
            }
            Ok(Token::new(TokenType::Float, lexeme, line, column))
        } else {
            if lexeme.parse::<i64>().is_err() {
                return Err(LexerError::new(
                    LexerErrorKind::InvalidNumber,
                    format!("integer literal '{lexeme}' out of range"),
                    line,
                    column,
                ));
            }
            Ok(Token::new(TokenType::Integer, lexeme, line, column))
        }
    }
}
