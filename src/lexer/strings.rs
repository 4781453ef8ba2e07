use super::error::{LexerError, LexerErrorKind};
use super::Lexer;
use crate::token::{Token, TokenType};

impl<'a> Lexer<'a> {
    /// Scans a string literal opened by `quote` (`"` or `'`), including the
    /// triple-quoted multi-line form. Returns a token whose lexeme is the
    /// unescaped string value (delimiters stripped).
    pub(super) fn read_string(&mut self, quote: char) -> Result<Token, LexerError> {
        let (line, column) = (self.line, self.column);
        let triple = format!("{quote}{quote}{quote}");

        if self.starts_with(&triple) {
            self.advance_by_str(&triple);
            return self.read_string_body(&triple, line, column, true);
        }

        self.advance();
        let delimiter = quote.to_string();
        self.read_string_body(&delimiter, line, column, false)
    }

    fn read_string_body(
        &mut self,
        closing: &str,
        line: usize,
        column: usize,
        multiline: bool,
    ) -> Result<Token, LexerError> {
        let mut value = String::new();
        loop {
            if self.starts_with(closing) {
                self.advance_by_str(closing);
                return Ok(Token::new(TokenType::String, value, line, column));
            }
            match self.current_char() {
                None => {
                    return Err(LexerError::new(
                        LexerErrorKind::UnterminatedString,
                        "unterminated string literal",
                        line,
                        column,
                    ));
                }
                Some('\n') if !multiline => {
                    return Err(LexerError::new(
                        LexerErrorKind::UnterminatedString,
                        "unterminated string literal",
                        line,
                        column,
                    ));
                }
                Some('\\') => {
                    let (esc_line, esc_col) = (self.line, self.column);
                    self.advance();
                    match self.current_char() {
                        Some('n') => {
                            value.push('\n');
                            self.advance();
                        }
                        Some('r') => {
                            value.push('\r');
                            self.advance();
                        }
                        Some('t') => {
                            value.push('\t');
                            self.advance();
                        }
                        Some('\\') => {
                            value.push('\\');
                            self.advance();
                        }
                        Some('"') => {
                            value.push('"');
                            self.advance();
                        }
                        Some('\'') => {
                            value.push('\'');
                            self.advance();
                        }
                        Some('0') => {
                            value.push('\0');
                            self.advance();
                        }
                        other => {
                            return Err(LexerError::new(
                                LexerErrorKind::UnknownEscapeSequence,
                                format!(
                                    "unknown escape sequence '\\{}'",
                                    other.map(String::from).unwrap_or_default()
                                ),
                                esc_line,
                                esc_col,
                            ));
                        }
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }
    }
}
