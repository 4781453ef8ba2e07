use super::error::{LexerError, LexerErrorKind};
use super::Lexer;

impl<'a> Lexer<'a> {
    /// Skips ASCII space, tab, and `\r`. Does NOT consume `\n`; newlines are
    /// significant tokens and are handled by the caller.
    pub(super) fn skip_inline_whitespace(&mut self) {
        while let Some(c) = self.current_char() {
            if c == ' ' || c == '\t' || c == '\r' {
                self.advance();
            } else {
                break;
            }
        }
    }

    pub(super) fn at_line_comment_start(&self) -> bool {
        self.starts_with("#") || self.starts_with("//")
    }

    pub(super) fn at_block_comment_start(&self) -> bool {
        self.starts_with("/*")
    }

    /// Consumes a `#` or `//` line comment up to but not including the
    /// terminating newline.
    pub(super) fn skip_line_comment(&mut self) {
        while let Some(c) = self.current_char() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Consumes a `/* ... */` block comment. Comments do not nest; the first
    /// `*/` closes regardless of intervening `/*`.
    pub(super) fn skip_block_comment(&mut self) -> Result<(), LexerError> {
        let (start_line, start_col) = (self.line, self.column);
        self.advance_by_str("/*");
        loop {
            if self.starts_with("*/") {
                self.advance_by_str("*/");
                return Ok(());
            }
            if self.is_eof() {
                return Err(LexerError::new(
                    LexerErrorKind::UnterminatedBlockComment,
                    "unterminated block comment",
                    start_line,
                    start_col,
                ));
            }
            self.advance();
        }
    }
}
