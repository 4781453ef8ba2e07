use super::error::{ParseError, ParseErrorKind};
use super::{BlockStyle, Parser};
use crate::token::{Token, TokenType};

/// Statement terminators that substitute for an explicit `NEWLINE`: the
/// tokens that close an enclosing construct.
const BLOCK_TERMINATORS: &[TokenType] = &[
    TokenType::End,
    TokenType::Elif,
    TokenType::Else,
    TokenType::RBrace,
    TokenType::Catch,
    TokenType::Eof,
];

impl Parser {
    pub(super) fn current(&self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    pub(super) fn current_kind(&self) -> TokenType {
        self.current().kind
    }

    pub(super) fn current_line(&self) -> usize {
        self.current().line
    }

    pub(super) fn current_column(&self) -> usize {
        self.current().column
    }

    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenType::Eof)
    }

    pub(super) fn advance(&mut self) -> &Token {
        if !self.is_eof() {
            self.pos += 1;
        }
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Advances and returns the token that was current before advancing.
    pub(super) fn bump(&mut self) -> Token {
        let tok = self.current().clone();
        self.advance();
        tok
    }

    pub(super) fn check(&self, kind: TokenType) -> bool {
        self.current_kind() == kind
    }

    pub(super) fn skip_newlines(&mut self) {
        while self.check(TokenType::Newline) && !self.is_eof() {
            self.advance();
        }
    }

    pub(super) fn expect(&mut self, expected: TokenType) -> Result<Token, ParseError> {
        if self.current_kind() == expected {
            Ok(self.bump())
        } else {
            Err(self.unexpected(&format!("expected {}", expected.describe())))
        }
    }

    pub(super) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if self.current_kind() == TokenType::Identifier {
            Ok(self.bump().lexeme)
        } else {
            Err(self.unexpected("expected an identifier"))
        }
    }

    /// A statement must end in `NEWLINE` or one of the fixed block
    /// terminators; the terminator itself is not consumed (callers that
    /// need to fall through into the next construct inspect it themselves).
    pub(super) fn expect_statement_terminator(&mut self) -> Result<(), ParseError> {
        if self.check(TokenType::Newline) {
            self.advance();
            return Ok(());
        }
        if BLOCK_TERMINATORS.contains(&self.current_kind()) {
            return Ok(());
        }
        Err(ParseError::new(
            ParseErrorKind::MissingTerminator,
            format!(
                "expected a newline or end of block after statement, found {}",
                self.current_kind().describe()
            ),
            self.current_line(),
            self.current_column(),
        ))
    }

    pub(super) fn unexpected(&self, context: &str) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnexpectedToken,
            format!("{context}, found {}", self.current_kind().describe()),
            self.current_line(),
            self.current_column(),
        )
    }

    /// Snapshots the token cursor for a bounded backtrack.
    pub(super) fn checkpoint(&self) -> usize {
        self.pos
    }

    pub(super) fn restore(&mut self, checkpoint: usize) {
        self.pos = checkpoint;
    }

    /// Commits the file to a block delimiter style on first use. A later
    /// block opened with the other style is a hard error. Callers that
    /// parse a colon-only construct (`switch`) never call this.
    pub(super) fn commit_block_style(&mut self, style: BlockStyle) -> Result<(), ParseError> {
        match self.block_style {
            BlockStyle::Unknown => {
                self.block_style = style;
                Ok(())
            }
            current if current == style => Ok(()),
            _ => Err(ParseError::new(
                ParseErrorKind::MixedBlockStyle,
                "file mixes ':'/'end' and '{'/'}' block styles",
                self.current_line(),
                self.current_column(),
            )),
        }
    }
}
