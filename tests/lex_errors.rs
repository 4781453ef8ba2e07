use moonc::lexer::{Lexer, LexerErrorKind};

fn lex_err_kind(source: &str) -> LexerErrorKind {
    Lexer::new(source, None).tokenize().unwrap_err().kind()
}

#[test]
fn unterminated_string_literal() {
    assert_eq!(lex_err_kind("x = \"unterminated"), LexerErrorKind::UnterminatedString);
}

#[test]
fn unterminated_block_comment() {
    assert_eq!(lex_err_kind("/* never closes\nx = 1\n"), LexerErrorKind::UnterminatedBlockComment);
}

#[test]
fn unknown_escape_sequence_in_string() {
    assert_eq!(lex_err_kind(r#"x = "\q""#), LexerErrorKind::UnknownEscapeSequence);
}

#[test]
fn malformed_hex_literal() {
    assert_eq!(lex_err_kind("x = 0xZZ"), LexerErrorKind::InvalidNumber);
}
