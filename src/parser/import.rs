use super::error::ParseError;
use super::Parser;
use crate::ast::{ImportDecl, Stmt, StmtKind};
use crate::token::TokenType;

/// A module path is either a string literal (`"net/http"`) or a single bare
/// identifier (`collections`) — never a dotted chain.
fn parse_module_path(parser: &mut Parser) -> Result<String, ParseError> {
    if parser.check(TokenType::String) || parser.check(TokenType::Identifier) {
        let tok = parser.current().clone();
        parser.advance();
        Ok(tok.lexeme)
    } else {
        Err(parser.unexpected("expected module path (string literal or identifier)"))
    }
}

/// The alias a plain `import "path/to/mod.moon"` gets when no `as` clause is
/// given: the path with any directory prefix and file extension stripped.
fn default_alias_for_path(path: &str) -> String {
    let stem = match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    };
    match stem.rfind('.') {
        Some(idx) => stem[..idx].to_string(),
        None => stem.to_string(),
    }
}

impl Parser {
    pub(super) fn parse_import_stmt(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        if self.check(TokenType::From) {
            self.advance();
            let path = parse_module_path(self)?;
            self.expect(TokenType::Import)?;

            let mut names = vec![self.parse_imported_name()?];
            while self.check(TokenType::Comma) {
                self.advance();
                names.push(self.parse_imported_name()?);
            }

            self.expect_statement_terminator()?;
            return Ok(Stmt::new(
                StmtKind::Import(ImportDecl::From { path, names }),
                line,
            ));
        }

        self.expect(TokenType::Import)?;
        let path = parse_module_path(self)?;
        let alias = if self.check(TokenType::As) {
            self.advance();
            self.expect_identifier()?
        } else {
            default_alias_for_path(&path)
        };
        self.expect_statement_terminator()?;
        Ok(Stmt::new(
            StmtKind::Import(ImportDecl::Module { path, alias: Some(alias) }),
            line,
        ))
    }

    fn parse_imported_name(&mut self) -> Result<(String, Option<String>), ParseError> {
        let name = self.expect_identifier()?;
        let alias = if self.check(TokenType::As) {
            self.advance();
            Some(self.expect_identifier()?)
        } else {
            None
        };
        Ok((name, alias))
    }
}
