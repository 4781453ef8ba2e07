use super::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    pub(super) fn peek_char(&self, ahead: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(ahead)
    }

    pub(super) fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Advances one code point, updating byte position, line, and column.
    /// Column advances by one code point regardless of UTF-8 width.
    pub(super) fn advance(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes `c` if it is the current character, returning whether it matched.
    pub(super) fn eat(&mut self, c: char) -> bool {
        if self.current_char() == Some(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(super) fn starts_with(&self, s: &str) -> bool {
        self.input[self.pos..].starts_with(s)
    }

    /// Advances past `s` (which must match at the current position) updating
    /// line/column per contained character.
    pub(super) fn advance_by_str(&mut self, s: &str) {
        for _ in s.chars() {
            self.advance();
        }
    }
}
