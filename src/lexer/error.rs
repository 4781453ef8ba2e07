use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerErrorKind {
    UnterminatedString,
    UnterminatedBlockComment,
    InvalidNumber,
    UnknownEscapeSequence,
    UnexpectedCharacter,
    IncompleteOperator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LexerError {
    pub kind: LexerErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl LexerError {
    pub(super) fn new(kind: LexerErrorKind, message: impl Into<String>, line: usize, column: usize) -> Self {
        LexerError {
            kind,
            message: message.into(),
            line,
            column,
        }
    }

    pub fn kind(&self) -> LexerErrorKind {
        self.kind
    }
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

impl std::error::Error for LexerError {}
