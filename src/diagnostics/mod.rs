//! Renders frontend errors as source-annotated diagnostics via `ariadne`.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::alias::ConfigError;
use crate::lexer::LexerError;
use crate::parser::ParseError;

/// The union of failures the CLI driver can report. File I/O and alias
/// loading are reported as plain messages; lexer/parser errors get a
/// source-annotated report since they carry a position within `source`.
#[derive(Debug)]
pub enum FrontendError {
    Lex(LexerError),
    Parse(ParseError),
    AliasConfig(ConfigError),
    FileRead { path: String, source: std::io::Error },
}

impl From<LexerError> for FrontendError {
    fn from(err: LexerError) -> Self {
        FrontendError::Lex(err)
    }
}

impl From<ParseError> for FrontendError {
    fn from(err: ParseError) -> Self {
        FrontendError::Parse(err)
    }
}

impl From<ConfigError> for FrontendError {
    fn from(err: ConfigError) -> Self {
        FrontendError::AliasConfig(err)
    }
}

/// Converts a 1-based (line, column) pair into a byte range ariadne can
/// label, by walking `source` line by line. Falls back to the end of the
/// source if the position is out of bounds.
fn line_column_to_byte_range(source: &str, line: usize, column: usize) -> Range<usize> {
    let mut offset = 0;
    for (idx, line_text) in source.split_inclusive('\n').enumerate() {
        if idx + 1 == line {
            let col_offset: usize = line_text
                .chars()
                .take(column.saturating_sub(1))
                .map(|c| c.len_utf8())
                .sum();
            let start = offset + col_offset;
            let end = (start + 1).min(offset + line_text.len()).max(start);
            return start..end;
        }
        offset += line_text.len();
    }
    end_of_source_range(source)
}

fn end_of_source_range(source: &str) -> Range<usize> {
    if source.is_empty() {
        0..0
    } else {
        source.len() - 1..source.len()
    }
}

fn print_range_report(
    filename: &str,
    source: &str,
    span: Range<usize>,
    short_message: &str,
    label_message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(short_message)
        .with_label(
            Label::new((filename, span))
                .with_message(label_message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

/// Renders `error` to stderr. Falls back to a plain `eprintln!` if the
/// rich report itself fails to write (e.g. a broken stderr pipe).
pub fn report_error(filename: &str, source: &str, error: &FrontendError) {
    match error {
        FrontendError::Lex(err) => {
            let span = line_column_to_byte_range(source, err.line, err.column);
            if print_range_report(filename, source, span, "lex error", &err.message).is_err() {
                eprintln!("{filename}: {err}");
            }
        }
        FrontendError::Parse(err) => {
            let span = line_column_to_byte_range(source, err.line, err.column);
            if print_range_report(filename, source, span, "parse error", &err.message).is_err() {
                eprintln!("{filename}: {err}");
            }
        }
        FrontendError::AliasConfig(err) => {
            eprintln!("{filename}: {err}");
        }
        FrontendError::FileRead { path, source } => {
            eprintln!("could not read {path}: {source}");
        }
    }
}
