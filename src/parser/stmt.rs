use super::error::ParseError;
use super::{BlockStyle, Parser};
use crate::ast::{BinaryOp, Expr, ExprKind, Stmt, StmtKind};
use crate::token::TokenType;

/// Parses a `<block>`, committing the file to whichever delimiter it opens
/// with. Callers that need a colon-only block (`switch`) do not go through
/// this function.
pub(super) fn parse_block(parser: &mut Parser) -> Result<Vec<Stmt>, ParseError> {
    if parser.check(TokenType::LBrace) {
        parser.commit_block_style(BlockStyle::Braces)?;
        parser.advance();
        parser.skip_newlines();
        let mut body = Vec::new();
        while !parser.check(TokenType::RBrace) && !parser.is_eof() {
            body.push(parser.parse_stmt()?);
            parser.skip_newlines();
        }
        parser.expect(TokenType::RBrace)?;
        Ok(body)
    } else if parser.check(TokenType::Colon) {
        parser.commit_block_style(BlockStyle::ColonEnd)?;
        parser.advance();
        parser.skip_newlines();
        let mut body = Vec::new();
        while !parser.check(TokenType::End) && !parser.is_eof() {
            body.push(parser.parse_stmt()?);
            parser.skip_newlines();
        }
        parser.expect(TokenType::End)?;
        Ok(body)
    } else {
        Err(parser.unexpected("expected a block opened with ':' or '{'"))
    }
}

/// Parses a colon/`end`-only block body, regardless of the file's committed
/// block style. Used for `switch`, which never participates in style
/// commitment.
fn parse_colon_block_until(parser: &mut Parser, terminators: &[TokenType]) -> Result<Vec<Stmt>, ParseError> {
    let mut body = Vec::new();
    while !terminators.contains(&parser.current_kind()) && !parser.is_eof() {
        body.push(parser.parse_stmt()?);
        parser.skip_newlines();
    }
    Ok(body)
}

impl Parser {
    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.skip_newlines();
        let stmt = match self.current_kind() {
            TokenType::If => self.parse_if_stmt(),
            TokenType::While => self.parse_while_stmt(),
            TokenType::For => self.parse_for_stmt(),
            TokenType::Export => self.parse_func_decl(true),
            TokenType::Func | TokenType::Function => self.parse_func_decl(false),
            TokenType::Return => self.parse_return_stmt(),
            TokenType::Break => {
                let line = self.current_line();
                self.advance();
                self.expect_statement_terminator()?;
                Ok(Stmt::new(StmtKind::Break, line))
            }
            TokenType::Continue => {
                let line = self.current_line();
                self.advance();
                self.expect_statement_terminator()?;
                Ok(Stmt::new(StmtKind::Continue, line))
            }
            TokenType::Try => self.parse_try_stmt(),
            TokenType::Throw => self.parse_throw_stmt(),
            TokenType::Switch => self.parse_switch_stmt(),
            TokenType::Class => self.parse_class_decl(),
            TokenType::Import | TokenType::From => self.parse_import_stmt(),
            TokenType::Moon => self.parse_moon_stmt(),
            TokenType::Global => self.parse_global_stmt(),
            _ => self.parse_expr_or_assign_stmt(),
        }?;
        Ok(stmt)
    }

    fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        self.advance();
        let cond = self.parse_expr()?;
        let then = self.parse_block()?;

        let mut elifs = Vec::new();
        while self.check(TokenType::Elif) {
            self.advance();
            let elif_cond = self.parse_expr()?;
            let elif_body = self.parse_block()?;
            elifs.push((elif_cond, elif_body));
        }

        let else_branch = if self.check(TokenType::Else) {
            self.advance();
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Stmt::new(
            StmtKind::If {
                cond,
                then,
                elifs,
                else_branch,
            },
            line,
        ))
    }

    fn parse_while_stmt(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        self.advance();
        let cond = self.parse_expr()?;
        let body = self.parse_block()?;
        Ok(Stmt::new(StmtKind::While { cond, body }, line))
    }

    /// `for ident in expr <block> end` or `for ident = start to end_ <block> end`.
    fn parse_for_stmt(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        self.advance();
        let var = self.expect_identifier()?;

        if self.check(TokenType::In) {
            self.advance();
            let iterable = self.parse_expr()?;
            let body = self.parse_block()?;
            return Ok(Stmt::new(StmtKind::ForIn { var, iterable, body }, line));
        }

        self.expect(TokenType::Assign)?;
        let start = self.parse_expr()?;
        self.expect(TokenType::To)?;
        let end = self.parse_expr()?;
        let body = self.parse_block()?;
        Ok(Stmt::new(
            StmtKind::ForRange { var, start, end, body },
            line,
        ))
    }

    fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        self.advance();
        let is_bare = matches!(self.current_kind(), TokenType::Newline)
            || self.current_kind() == TokenType::End
            || self.current_kind() == TokenType::Elif
            || self.current_kind() == TokenType::Else
            || self.current_kind() == TokenType::RBrace
            || self.current_kind() == TokenType::Catch
            || self.current_kind() == TokenType::Eof;
        let value = if is_bare { None } else { Some(self.parse_expr()?) };
        self.expect_statement_terminator()?;
        Ok(Stmt::new(StmtKind::Return(value), line))
    }

    fn parse_try_stmt(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        self.advance();
        let try_body = self.parse_block()?;
        self.expect(TokenType::Catch)?;
        let err_var = self.expect_identifier()?;
        let catch_body = self.parse_block()?;
        Ok(Stmt::new(
            StmtKind::Try {
                try_body,
                err_var,
                catch_body,
            },
            line,
        ))
    }

    fn parse_throw_stmt(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        self.advance();
        let value = self.parse_expr()?;
        self.expect_statement_terminator()?;
        Ok(Stmt::new(StmtKind::Throw(value), line))
    }

    /// `switch` always uses the colon/`end` style, independent of the
    /// file's committed block style.
    fn parse_switch_stmt(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        self.advance();
        let value = self.parse_expr()?;
        self.expect(TokenType::Colon)?;
        self.skip_newlines();

        let mut cases = Vec::new();
        let mut default_body = None;

        loop {
            match self.current_kind() {
                TokenType::Case => {
                    self.advance();
                    let mut values = vec![self.parse_expr()?];
                    while self.check(TokenType::Comma) {
                        self.advance();
                        values.push(self.parse_expr()?);
                    }
                    self.expect(TokenType::Colon)?;
                    self.skip_newlines();
                    let body = parse_colon_block_until(
                        self,
                        &[TokenType::Case, TokenType::Default, TokenType::End],
                    )?;
                    cases.push((values, body));
                }
                TokenType::Default => {
                    self.advance();
                    self.expect(TokenType::Colon)?;
                    self.skip_newlines();
                    let body = parse_colon_block_until(self, &[TokenType::End])?;
                    default_body = Some(body);
                }
                _ => break,
            }
        }

        self.expect(TokenType::End)?;
        Ok(Stmt::new(
            StmtKind::Switch {
                value,
                cases,
                default_body,
            },
            line,
        ))
    }

    fn parse_moon_stmt(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        self.advance();
        let expr = self.parse_expr()?;
        let call = match expr.kind {
            ExprKind::Call { .. } => expr,
            ExprKind::Lambda { .. } => {
                let lambda_line = expr.line;
                Expr::new(
                    ExprKind::Call {
                        callee: Box::new(expr),
                        args: Vec::new(),
                    },
                    lambda_line,
                )
            }
            _ => return Err(self.unexpected("expected a call after 'moon'")),
        };
        self.expect_statement_terminator()?;
        Ok(Stmt::new(StmtKind::Moon(call), line))
    }

    fn parse_global_stmt(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        self.advance();
        let mut names = vec![self.expect_identifier()?];
        while self.check(TokenType::Comma) {
            self.advance();
            names.push(self.expect_identifier()?);
        }
        self.expect_statement_terminator()?;
        Ok(Stmt::new(StmtKind::Global(names), line))
    }

    /// Dispatches to assignment, compound assignment, channel send, or a
    /// plain expression statement, based on what follows a general postfix
    /// expression (so `a[i] = x` and `obj.field += 1` are both assignable,
    /// not just bare identifiers).
    fn parse_expr_or_assign_stmt(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        let expr = self.parse_expr()?;

        let stmt_kind = match self.current_kind() {
            TokenType::Assign => {
                self.advance();
                let value = self.parse_expr()?;
                StmtKind::Assign { target: expr, value }
            }
            TokenType::PlusEq | TokenType::MinusEq | TokenType::StarEq | TokenType::SlashEq | TokenType::PercentEq => {
                let op = match self.current_kind() {
                    TokenType::PlusEq => BinaryOp::Add,
                    TokenType::MinusEq => BinaryOp::Sub,
                    TokenType::StarEq => BinaryOp::Mul,
                    TokenType::SlashEq => BinaryOp::Div,
                    TokenType::PercentEq => BinaryOp::Mod,
                    _ => unreachable!(),
                };
                self.advance();
                let rhs = self.parse_expr()?;
                let value = Expr::new(
                    ExprKind::Binary {
                        op,
                        lhs: Box::new(expr.clone()),
                        rhs: Box::new(rhs),
                    },
                    line,
                );
                StmtKind::Assign { target: expr, value }
            }
            TokenType::ChanArrow => {
                self.advance();
                let value = self.parse_expr()?;
                StmtKind::ChanSend { channel: expr, value }
            }
            _ => StmtKind::Expression(expr),
        };

        self.expect_statement_terminator()?;
        Ok(Stmt::new(stmt_kind, line))
    }
}
