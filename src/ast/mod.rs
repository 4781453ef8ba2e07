//! The closed AST the parser produces: expressions, statements, and the
//! top-level program, with no shared ownership anywhere in the tree.

mod expr;
mod program;
mod stmt;

pub use expr::{BinaryOp, Expr, ExprKind, LambdaBody, Parameter, UnaryOp};
pub use program::Program;
pub use stmt::{ImportDecl, MethodDecl, Stmt, StmtKind};
