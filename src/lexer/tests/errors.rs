use crate::lexer::{Lexer, LexerErrorKind};

fn lex_err(src: &str) -> LexerErrorKind {
    Lexer::new(src, None).tokenize().unwrap_err().kind()
}

#[test]
fn unterminated_string_at_eof() {
    assert_eq!(lex_err(r#""abc"#), LexerErrorKind::UnterminatedString);
}

#[test]
fn unterminated_string_at_newline() {
    assert_eq!(lex_err("\"abc\n\""), LexerErrorKind::UnterminatedString);
}

#[test]
fn unknown_escape_sequence() {
    assert_eq!(lex_err(r#""bad \q escape""#), LexerErrorKind::UnknownEscapeSequence);
}

#[test]
fn unterminated_block_comment() {
    assert_eq!(lex_err("/* never closes"), LexerErrorKind::UnterminatedBlockComment);
}

#[test]
fn bare_bang_is_unexpected_character() {
    assert_eq!(lex_err("!"), LexerErrorKind::UnexpectedCharacter);
}

#[test]
fn hex_prefix_without_digits() {
    assert_eq!(lex_err("0x"), LexerErrorKind::InvalidNumber);
}

#[test]
fn exponent_without_digits() {
    assert_eq!(lex_err("1e+"), LexerErrorKind::InvalidNumber);
}

#[test]
fn integer_literal_out_of_range() {
    assert_eq!(lex_err("99999999999999999999"), LexerErrorKind::InvalidNumber);
}
