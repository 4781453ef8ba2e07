use crate::ast::expr::{Expr, Parameter};

/// The two shapes of `import`: a plain module import, and a selective
/// `from ... import name (as alias)?, ...` form.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportDecl {
    Module {
        path: String,
        alias: Option<String>,
    },
    From {
        path: String,
        names: Vec<(String, Option<String>)>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub name: String,
    pub params: Vec<Parameter>,
    pub body: Vec<Stmt>,
    pub is_static: bool,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    Expression(Expr),
    Assign {
        target: Expr,
        value: Expr,
    },
    If {
        cond: Expr,
        then: Vec<Stmt>,
        elifs: Vec<(Expr, Vec<Stmt>)>,
        else_branch: Option<Vec<Stmt>>,
    },
    While {
        cond: Expr,
        body: Vec<Stmt>,
    },
    ForIn {
        var: String,
        iterable: Expr,
        body: Vec<Stmt>,
    },
    ForRange {
        var: String,
        start: Expr,
        end: Expr,
        body: Vec<Stmt>,
    },
    FuncDecl {
        name: String,
        params: Vec<Parameter>,
        body: Vec<Stmt>,
        exported: bool,
    },
    Return(Option<Expr>),
    Break,
    Continue,
    Try {
        try_body: Vec<Stmt>,
        err_var: String,
        catch_body: Vec<Stmt>,
    },
    Throw(Expr),
    Switch {
        value: Expr,
        cases: Vec<(Vec<Expr>, Vec<Stmt>)>,
        default_body: Option<Vec<Stmt>>,
    },
    ClassDecl {
        name: String,
        parent: Option<String>,
        methods: Vec<MethodDecl>,
    },
    Import(ImportDecl),
    Moon(Expr),
    ChanSend {
        channel: Expr,
        value: Expr,
    },
    Global(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: usize,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: usize) -> Self {
        Stmt { kind, line }
    }
}
