use super::error::{ParseError, ParseErrorKind};
use super::Parser;
use crate::ast::{MethodDecl, Parameter, Stmt, StmtKind};
use crate::token::TokenType;

impl Parser {
    /// `(params)` shared by function declarations, method declarations, and
    /// (separately, in `expr.rs`) lambda parameter lists. Once a parameter
    /// carries a default, every later parameter must too.
    pub(super) fn parse_params(&mut self) -> Result<Vec<Parameter>, ParseError> {
        self.expect(TokenType::LParen)?;
        self.skip_newlines();
        let mut params = Vec::new();
        let mut seen_default = false;
        if !self.check(TokenType::RParen) {
            loop {
                self.skip_newlines();
                let (name, line, column) = {
                    let tok = self.current().clone();
                    (self.expect_identifier()?, tok.line, tok.column)
                };
                let default = if self.check(TokenType::Assign) {
                    self.advance();
                    seen_default = true;
                    Some(self.parse_expr()?)
                } else {
                    if seen_default {
                        return Err(ParseError::new(
                            ParseErrorKind::DefaultParameterOrder,
                            format!("parameter '{name}' without a default follows one that has a default"),
                            line,
                            column,
                        ));
                    }
                    None
                };
                params.push(Parameter { name, default });
                self.skip_newlines();
                if self.check(TokenType::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.skip_newlines();
        self.expect(TokenType::RParen)?;
        Ok(params)
    }

    pub(super) fn parse_func_decl(&mut self, exported: bool) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        if exported {
            self.expect(TokenType::Export)?;
        }
        if !matches!(self.current_kind(), TokenType::Func | TokenType::Function) {
            return Err(self.unexpected("expected 'func' or 'function'"));
        }
        self.advance();
        let name = self.expect_identifier()?;
        let params = self.parse_params()?;
        let body = self.parse_block()?;
        Ok(Stmt::new(
            StmtKind::FuncDecl {
                name,
                params,
                body,
                exported,
            },
            line,
        ))
    }

    pub(super) fn parse_class_decl(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        self.expect(TokenType::Class)?;
        let name = self.expect_identifier()?;
        let parent = if self.check(TokenType::Extends) {
            self.advance();
            Some(self.expect_identifier()?)
        } else {
            None
        };

        let mut methods = Vec::new();
        let body_tokens_are_braces = self.check(TokenType::LBrace);
        if body_tokens_are_braces {
            self.commit_block_style(super::BlockStyle::Braces)?;
            self.advance();
            self.skip_newlines();
            while !self.check(TokenType::RBrace) && !self.is_eof() {
                methods.push(self.parse_method_decl()?);
                self.skip_newlines();
            }
            self.expect(TokenType::RBrace)?;
        } else {
            self.commit_block_style(super::BlockStyle::ColonEnd)?;
            self.expect(TokenType::Colon)?;
            self.skip_newlines();
            while !self.check(TokenType::End) && !self.is_eof() {
                methods.push(self.parse_method_decl()?);
                self.skip_newlines();
            }
            self.expect(TokenType::End)?;
        }

        Ok(Stmt::new(
            StmtKind::ClassDecl {
                name,
                parent,
                methods,
            },
            line,
        ))
    }

    fn parse_method_decl(&mut self) -> Result<MethodDecl, ParseError> {
        let line = self.current_line();
        let is_static = if self.check(TokenType::Static) {
            self.advance();
            true
        } else {
            false
        };
        if !matches!(self.current_kind(), TokenType::Func | TokenType::Function) {
            return Err(self.unexpected("expected 'func' or 'function' in class body"));
        }
        self.advance();
        let name = self.expect_identifier()?;
        let params = self.parse_params()?;
        let body = self.parse_block()?;
        Ok(MethodDecl {
            name,
            params,
            body,
            is_static,
            line,
        })
    }
}
