use super::parse;
use crate::ast::{BinaryOp, ExprKind, LambdaBody, StmtKind};

fn assign_value(src: &str) -> ExprKind {
    let program = parse(src);
    match &program.statements[0].kind {
        StmtKind::Assign { value, .. } => value.kind.clone(),
        other => panic!("expected assign statement, got {other:?}"),
    }
}

#[test]
fn lambda_with_two_params_and_expr_body() {
    let value = assign_value("f = (x, y) => x + y\n");
    let ExprKind::Lambda { params, body } = value else {
        panic!("expected lambda, got something else");
    };
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].name, "x");
    match body {
        LambdaBody::Expr(inner) => {
            assert!(matches!(inner.kind, ExprKind::Binary { op: BinaryOp::Add, .. }));
        }
        LambdaBody::Block(_) => panic!("expected expression body"),
    }
}

#[test]
fn parenthesized_arithmetic_is_not_a_lambda() {
    let value = assign_value("z = (1 + 2) * 3\n");
    let ExprKind::Binary { op: BinaryOp::Mul, lhs, .. } = value else {
        panic!("expected top-level '*'");
    };
    assert!(matches!(lhs.kind, ExprKind::Binary { op: BinaryOp::Add, .. }));
}

#[test]
fn zero_arg_lambda() {
    let value = assign_value("f = () => 1\n");
    assert!(matches!(value, ExprKind::Lambda { .. }));
}

#[test]
fn lambda_rejects_default_parameters_and_reparses_as_expression() {
    // (x = 1) is not a lambda (lambdas forbid defaults); it must fall back
    // to parsing as a parenthesized assignment-shaped expression attempt,
    // which fails here because '=' is not a valid expression operator.
    let err = super::parse_err("y = (x = 1) => x\n");
    assert_eq!(err.kind(), crate::parser::ParseErrorKind::UnexpectedToken);
}

#[test]
fn hyphen_greater_does_not_introduce_a_lambda() {
    // '->' is not an arrow spelling; it lexes as MINUS then GT, so this is
    // not a valid expression at all, let alone a lambda.
    let err = super::parse_err("f = (x) -> x + 1\n");
    assert_eq!(err.kind(), crate::parser::ParseErrorKind::UnexpectedToken);
}

#[test]
fn lambda_with_braced_block_body() {
    let program = parse("f = (x) => { return x }\n");
    let StmtKind::Assign { value, .. } = &program.statements[0].kind else {
        panic!("expected assign");
    };
    let ExprKind::Lambda { body, .. } = &value.kind else {
        panic!("expected lambda");
    };
    assert!(matches!(body, LambdaBody::Block(stmts) if stmts.len() == 1));
}
