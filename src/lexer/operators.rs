use super::error::{LexerError, LexerErrorKind};
use super::Lexer;
use crate::token::{Token, TokenType};

/// Canonical operator spellings, longest first so a greedy scan picks the
/// longest match.
const CANONICAL_OPERATORS: &[(&str, TokenType)] = &[
    ("<<", TokenType::LShift),
    ("<=", TokenType::Le),
    ("<-", TokenType::ChanArrow),
    (">>", TokenType::RShift),
    (">=", TokenType::Ge),
    ("==", TokenType::Eq),
    ("!=", TokenType::Ne),
    ("=>", TokenType::Arrow),
    ("**", TokenType::Power),
    ("+=", TokenType::PlusEq),
    ("-=", TokenType::MinusEq),
    ("*=", TokenType::StarEq),
    ("/=", TokenType::SlashEq),
    ("%=", TokenType::PercentEq),
    ("<", TokenType::Lt),
    (">", TokenType::Gt),
    ("=", TokenType::Assign),
    ("*", TokenType::Star),
    ("+", TokenType::Plus),
    ("-", TokenType::Minus),
    ("/", TokenType::Slash),
    ("%", TokenType::Percent),
    ("&", TokenType::Amp),
    ("|", TokenType::Pipe),
    ("^", TokenType::Caret),
    ("~", TokenType::Tilde),
    ("(", TokenType::LParen),
    (")", TokenType::RParen),
    ("{", TokenType::LBrace),
    ("}", TokenType::RBrace),
    ("[", TokenType::LBracket),
    ("]", TokenType::RBracket),
    (",", TokenType::Comma),
    (":", TokenType::Colon),
    (".", TokenType::Dot),
];

impl<'a> Lexer<'a> {
    /// Matches the canonical operator table against the current position,
    /// longest spelling first.
    fn match_canonical_operator(&self) -> Option<(&'static str, TokenType)> {
        CANONICAL_OPERATORS
            .iter()
            .find(|(spelling, _)| self.starts_with(spelling))
            .map(|&(spelling, kind)| (spelling, kind))
    }

    pub(super) fn read_operator_or_punctuation(&mut self) -> Result<Token, LexerError> {
        let (line, column) = (self.line, self.column);

        if let Some(aliases) = self.aliases {
            let longest_alias = aliases
                .operators
                .keys()
                .filter(|alias| self.starts_with(alias))
                .max_by_key(|alias| alias.len());
            if let Some(alias) = longest_alias {
                let target = aliases.operators[alias].clone();
                let lexeme = alias.clone();
                self.advance_by_str(alias);
                let kind = CANONICAL_OPERATORS
                    .iter()
                    .find(|(spelling, _)| *spelling == target)
                    .map(|&(_, kind)| kind)
                    .ok_or_else(|| {
                        LexerError::new(
                            LexerErrorKind::UnexpectedCharacter,
                            format!("operator alias '{alias}' targets unknown operator '{target}'"),
                            line,
                            column,
                        )
                    })?;
                return Ok(Token::new(kind, lexeme, line, column));
            }
        }

        if let Some((spelling, kind)) = self.match_canonical_operator() {
            self.advance_by_str(spelling);
            return Ok(Token::new(kind, spelling, line, column));
        }

        match self.current_char() {
            Some('!') => Err(LexerError::new(
                LexerErrorKind::UnexpectedCharacter,
                "unexpected '!'; use 'not' for logical negation, or '!=' for inequality",
                line,
                column,
            )),
            Some(c) => Err(LexerError::new(
                LexerErrorKind::UnexpectedCharacter,
                format!("unexpected character '{c}'"),
                line,
                column,
            )),
            None => Err(LexerError::new(
                LexerErrorKind::UnexpectedCharacter,
                "unexpected end of input",
                line,
                column,
            )),
        }
    }
}
