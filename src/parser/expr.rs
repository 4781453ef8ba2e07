//! Expression grammar, implemented as one function per precedence level so
//! each rule traces directly back to the grammar it encodes:
//!
//! ```text
//! or      := and      ( 'or'  and )*
//! and     := bit_or   ( 'and' bit_or )*
//! bit_or  := bit_xor  ( '|'   bit_xor )*
//! bit_xor := bit_and  ( '^'   bit_and )*
//! bit_and := equality ( '&'   equality )*
//! equality:= compare  ( ('==' | '!=') compare )*
//! compare := shift    ( ('<'|'<='|'>'|'>=') shift )*
//! shift   := term     ( ('<<' | '>>') term )*
//! term    := factor   ( ('+' | '-') factor )*
//! factor  := power    ( ('*'|'/'|'%') power )*
//! power   := unary    ( '**' power )?        -- right-assoc
//! unary   := ('-'|'not'|'~') unary | '<-' unary | postfix
//! postfix := primary ( '(' args? ')' | '[' expr ']' | '.' IDENT )*
//! ```

use super::error::{ParseError, ParseErrorKind};
use super::{BlockStyle, Parser};
use crate::ast::{BinaryOp, Expr, ExprKind, LambdaBody, Parameter, UnaryOp};
use crate::token::TokenType;

macro_rules! left_assoc_level {
    ($name:ident, $next:ident, [$(($tok:pat, $op:expr)),+ $(,)?]) => {
        pub(super) fn $name(&mut self) -> Result<Expr, ParseError> {
            let mut lhs = self.$next()?;
            loop {
                let op = match self.current_kind() {
                    $($tok => $op,)+
                    _ => break,
                };
                self.advance();
                self.skip_newlines();
                let rhs = self.$next()?;
                let line = lhs.line;
                lhs = Expr::new(
                    ExprKind::Binary {
                        op,
                        lhs: Box::new(lhs),
                        rhs: Box::new(rhs),
                    },
                    line,
                );
            }
            Ok(lhs)
        }
    };
}

impl Parser {
    pub(super) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_or()
    }

    left_assoc_level!(parse_or, parse_and, [(TokenType::Or, BinaryOp::Or)]);
    left_assoc_level!(parse_and, parse_bit_or, [(TokenType::And, BinaryOp::And)]);
    left_assoc_level!(parse_bit_or, parse_bit_xor, [(TokenType::Pipe, BinaryOp::BitOr)]);
    left_assoc_level!(parse_bit_xor, parse_bit_and, [(TokenType::Caret, BinaryOp::BitXor)]);
    left_assoc_level!(parse_bit_and, parse_equality, [(TokenType::Amp, BinaryOp::BitAnd)]);
    left_assoc_level!(
        parse_equality,
        parse_compare,
        [(TokenType::Eq, BinaryOp::Eq), (TokenType::Ne, BinaryOp::Ne)]
    );
    left_assoc_level!(
        parse_compare,
        parse_shift,
        [
            (TokenType::Lt, BinaryOp::Lt),
            (TokenType::Le, BinaryOp::Le),
            (TokenType::Gt, BinaryOp::Gt),
            (TokenType::Ge, BinaryOp::Ge),
        ]
    );
    left_assoc_level!(
        parse_shift,
        parse_term,
        [(TokenType::LShift, BinaryOp::LShift), (TokenType::RShift, BinaryOp::RShift)]
    );
    left_assoc_level!(
        parse_term,
        parse_factor,
        [(TokenType::Plus, BinaryOp::Add), (TokenType::Minus, BinaryOp::Sub)]
    );
    left_assoc_level!(
        parse_factor,
        parse_power,
        [
            (TokenType::Star, BinaryOp::Mul),
            (TokenType::Slash, BinaryOp::Div),
            (TokenType::Percent, BinaryOp::Mod),
        ]
    );

    /// `**` is right-associative: recurses at the same level, not the next one.
    pub(super) fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_unary()?;
        if self.check(TokenType::Power) {
            self.advance();
            self.skip_newlines();
            let exponent = self.parse_power()?;
            let line = base.line;
            return Ok(Expr::new(
                ExprKind::Binary {
                    op: BinaryOp::Pow,
                    lhs: Box::new(base),
                    rhs: Box::new(exponent),
                },
                line,
            ));
        }
        Ok(base)
    }

    pub(super) fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let line = self.current_line();
        let op = match self.current_kind() {
            TokenType::Minus => Some(UnaryOp::Neg),
            TokenType::Not => Some(UnaryOp::Not),
            TokenType::Tilde => Some(UnaryOp::BitNot),
            _ => None,
        };
        if let Some(op) = op {
            self.advance();
            let operand = self.parse_unary()?;
            return Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                line,
            ));
        }
        if self.check(TokenType::ChanArrow) {
            self.advance();
            let channel = self.parse_unary()?;
            return Ok(Expr::new(ExprKind::ChanRecv { channel: Box::new(channel) }, line));
        }
        self.parse_postfix()
    }

    pub(super) fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.current_kind() {
                TokenType::LParen => {
                    let args = self.parse_call_args()?;
                    let line = expr.line;
                    expr = Expr::new(
                        ExprKind::Call {
                            callee: Box::new(expr),
                            args,
                        },
                        line,
                    );
                }
                TokenType::LBracket => {
                    self.advance();
                    self.skip_newlines();
                    let index = self.parse_expr()?;
                    self.skip_newlines();
                    self.expect(TokenType::RBracket)?;
                    let line = expr.line;
                    expr = Expr::new(
                        ExprKind::Index {
                            object: Box::new(expr),
                            index: Box::new(index),
                        },
                        line,
                    );
                }
                TokenType::Dot => {
                    self.advance();
                    let name = self.expect_identifier()?;
                    let line = expr.line;
                    expr = Expr::new(
                        ExprKind::Member {
                            object: Box::new(expr),
                            name,
                        },
                        line,
                    );
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    fn parse_call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.expect(TokenType::LParen)?;
        self.skip_newlines();
        let mut args = Vec::new();
        if !self.check(TokenType::RParen) {
            loop {
                self.skip_newlines();
                args.push(self.parse_expr()?);
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
        Ok(args)
    }

    pub(super) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let line = self.current_line();
        match self.current_kind() {
            TokenType::Integer => {
                let column = self.current_column();
                let lexeme = self.bump().lexeme;
                let value = parse_integer_lexeme(&lexeme, line, column)?;
                Ok(Expr::new(ExprKind::Integer(value), line))
            }
            TokenType::Float => {
                let lexeme = self.bump().lexeme;
                let value: f64 = lexeme
                    .parse()
                    .map_err(|_| self.unexpected("malformed float literal"))?;
                Ok(Expr::new(ExprKind::Float(value), line))
            }
            TokenType::String => {
                let lexeme = self.bump().lexeme;
                Ok(Expr::new(ExprKind::String(lexeme), line))
            }
            TokenType::True => {
                self.advance();
                Ok(Expr::new(ExprKind::Bool(true), line))
            }
            TokenType::False => {
                self.advance();
                Ok(Expr::new(ExprKind::Bool(false), line))
            }
            TokenType::Null => {
                self.advance();
                Ok(Expr::new(ExprKind::Null, line))
            }
            TokenType::SelfKw => {
                self.advance();
                Ok(Expr::new(ExprKind::SelfExpr, line))
            }
            TokenType::Super => {
                self.advance();
                self.expect(TokenType::Dot)?;
                let method = self.expect_identifier()?;
                let args = self.parse_call_args()?;
                Ok(Expr::new(ExprKind::Super { method, args }, line))
            }
            TokenType::New => {
                self.advance();
                let class_name = self.expect_identifier()?;
                let args = self.parse_call_args()?;
                Ok(Expr::new(ExprKind::New { class_name, args }, line))
            }
            TokenType::Identifier => {
                let name = self.bump().lexeme;
                Ok(Expr::new(ExprKind::Identifier(name), line))
            }
            TokenType::LBracket => self.parse_list_literal(),
            TokenType::LBrace => self.parse_dict_literal(),
            TokenType::LParen => self.parse_paren_or_lambda(),
            _ => Err(self.unexpected("expected an expression")),
        }
    }

    fn parse_list_literal(&mut self) -> Result<Expr, ParseError> {
        let line = self.current_line();
        self.expect(TokenType::LBracket)?;
        self.skip_newlines();
        let mut elements = Vec::new();
        if !self.check(TokenType::RBracket) {
            loop {
                self.skip_newlines();
                elements.push(self.parse_expr()?);
                self.skip_newlines();
                if self.check(TokenType::Comma) {
                    self.advance();
                    self.skip_newlines();
                } else {
                    break;
                }
            }
        }
        self.skip_newlines();
        self.expect(TokenType::RBracket)?;
        Ok(Expr::new(ExprKind::List { elements }, line))
    }

    fn parse_dict_literal(&mut self) -> Result<Expr, ParseError> {
        let line = self.current_line();
        self.expect(TokenType::LBrace)?;
        self.skip_newlines();
        let mut entries = Vec::new();
        if !self.check(TokenType::RBrace) {
            loop {
                self.skip_newlines();
                let key = self.parse_dict_key()?;
                self.skip_newlines();
                self.expect(TokenType::Colon)?;
                self.skip_newlines();
                let value = self.parse_expr()?;
                entries.push((key, value));
                self.skip_newlines();
                if self.check(TokenType::Comma) {
                    self.advance();
                    self.skip_newlines();
                } else {
                    break;
                }
            }
        }
        self.skip_newlines();
        self.expect(TokenType::RBrace)?;
        Ok(Expr::new(ExprKind::Dict { entries }, line))
    }

    /// A dict key is a string literal or a bare identifier lifted to a
    /// string literal; any other token is a `ParseErrorKind::InvalidDictKey`.
    fn parse_dict_key(&mut self) -> Result<Expr, ParseError> {
        let line = self.current_line();
        match self.current_kind() {
            TokenType::String => Ok(Expr::new(ExprKind::String(self.bump().lexeme), line)),
            TokenType::Identifier => Ok(Expr::new(ExprKind::String(self.bump().lexeme), line)),
            _ => Err(ParseError::new(
                ParseErrorKind::InvalidDictKey,
                format!(
                    "expected a string or identifier dict key, found {}",
                    self.current_kind().describe()
                ),
                self.current_line(),
                self.current_column(),
            )),
        }
    }

    /// After `(` in expression position: try a lambda parameter list
    /// followed by `=>`; on any mismatch, rewind and parse a parenthesized
    /// expression instead.
    fn parse_paren_or_lambda(&mut self) -> Result<Expr, ParseError> {
        let line = self.current_line();
        let checkpoint = self.checkpoint();
        if let Some(lambda) = self.try_parse_lambda(line)? {
            return Ok(lambda);
        }
        self.restore(checkpoint);

        self.expect(TokenType::LParen)?;
        self.skip_newlines();
        let inner = self.parse_expr()?;
        self.skip_newlines();
        self.expect(TokenType::RParen)?;
        Ok(Expr::new(inner.kind, line))
    }

    fn try_parse_lambda(&mut self, line: usize) -> Result<Option<Expr>, ParseError> {
        let Some(params) = self.try_parse_lambda_params() else {
            return Ok(None);
        };
        if !self.check(TokenType::Arrow) {
            return Ok(None);
        }
        self.advance();
        self.skip_newlines();

        let body = if self.check(TokenType::LBrace) {
            self.commit_block_style(BlockStyle::Braces)?;
            LambdaBody::Block(self.parse_block()?)
        } else if self.check(TokenType::Colon) {
            self.commit_block_style(BlockStyle::ColonEnd)?;
            self.advance();
            self.skip_newlines();
            let mut body = Vec::new();
            while !self.check(TokenType::End) && !self.is_eof() {
                body.push(self.parse_stmt()?);
                self.skip_newlines();
            }
            self.expect(TokenType::End)?;
            LambdaBody::Block(body)
        } else {
            LambdaBody::Expr(Box::new(self.parse_expr()?))
        };

        Ok(Some(Expr::new(ExprKind::Lambda { params, body }, line)))
    }

    /// Attempts to consume `(ident (, ident)*)`. Lambda parameters never
    /// carry defaults: seeing `=` inside the list aborts the attempt
    /// entirely (returns `None`, restored), falling back to parsing `(`
    /// as a parenthesized expression instead.
    fn try_parse_lambda_params(&mut self) -> Option<Vec<Parameter>> {
        let checkpoint = self.checkpoint();
        if !self.check(TokenType::LParen) {
            return None;
        }
        self.advance();
        self.skip_newlines();
        let mut params = Vec::new();
        if !self.check(TokenType::RParen) {
            loop {
                self.skip_newlines();
                let name = match self.current_kind() {
                    TokenType::Identifier => self.bump().lexeme,
                    _ => {
                        self.restore(checkpoint);
                        return None;
                    }
                };
                if self.check(TokenType::Assign) {
                    self.restore(checkpoint);
                    return None;
                }
                params.push(Parameter { name, default: None });
                self.skip_newlines();
                if self.check(TokenType::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.skip_newlines();
        if !self.check(TokenType::RParen) {
            self.restore(checkpoint);
            return None;
        }
        self.advance();
        Some(params)
    }
}

fn parse_integer_lexeme(lexeme: &str, line: usize, column: usize) -> Result<i64, ParseError> {
    let result = if let Some(hex) = lexeme.strip_prefix("0x").or_else(|| lexeme.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).map(|v| v as i64)
    } else {
        lexeme.parse::<i64>()
    };
    result.map_err(|_| {
        ParseError::new(
            ParseErrorKind::UnexpectedToken,
            format!("integer literal '{lexeme}' out of range"),
            line,
            column,
        )
    })
}
