//! Orchestrates alias loading, lexing, and parsing for the CLI. Codegen is
//! an external collaborator; this module stops at producing a [`Program`].

use std::path::Path;

use crate::alias::AliasMap;
use crate::ast::Program;
use crate::diagnostics::FrontendError;
use crate::lexer::Lexer;
use crate::parser::Parser;

/// Seam a real LLVM backend would implement. No implementation ships in
/// this crate; `moonc check` names it without calling it.
pub trait Backend {
    type Error: std::error::Error;

    fn compile(&mut self, program: &Program) -> Result<(), Self::Error>;
}

const UTF8_BOM: &str = "\u{feff}";

fn strip_bom(contents: String) -> String {
    match contents.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => contents,
    }
}

/// Reads `path`, optionally loads `aliases_path`, and runs the lexer and
/// parser. Returns the source text alongside the result so callers can
/// render diagnostics against it.
pub fn compile(path: &Path, aliases_path: Option<&Path>) -> (String, Result<Program, FrontendError>) {
    let source = match std::fs::read_to_string(path) {
        Ok(contents) => strip_bom(contents),
        Err(err) => {
            return (
                String::new(),
                Err(FrontendError::FileRead {
                    path: path.display().to_string(),
                    source: err,
                }),
            );
        }
    };

    let result = run_pipeline(&source, aliases_path);
    (source, result)
}

fn run_pipeline(source: &str, aliases_path: Option<&Path>) -> Result<Program, FrontendError> {
    let aliases = match aliases_path {
        Some(path) => Some(AliasMap::load(path)?),
        None => None,
    };

    let tokens = Lexer::new(source, aliases.as_ref()).tokenize()?;
    let program = Parser::new(tokens).parse()?;
    Ok(program)
}
