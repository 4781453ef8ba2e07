use super::parse;
use crate::ast::{BinaryOp, ExprKind, StmtKind};

fn assign_value(src: &str) -> ExprKind {
    let program = parse(src);
    match &program.statements[0].kind {
        StmtKind::Assign { value, .. } => value.kind.clone(),
        other => panic!("expected assign statement, got {other:?}"),
    }
}

#[test]
fn arithmetic_precedence_and_power_associativity() {
    // x = 1 + 2 * 3 ** 2  =>  1 + (2 * (3 ** 2))
    let value = assign_value("x = 1 + 2 * 3 ** 2\n");
    let ExprKind::Binary { op: BinaryOp::Add, rhs, .. } = value else {
        panic!("expected top-level '+'");
    };
    let ExprKind::Binary { op: BinaryOp::Mul, rhs: pow, .. } = rhs.kind else {
        panic!("expected '*' under '+'");
    };
    assert!(matches!(pow.kind, ExprKind::Binary { op: BinaryOp::Pow, .. }));
}

#[test]
fn power_is_right_associative() {
    // a ** b ** c  =>  a ** (b ** c)
    let value = assign_value("x = a ** b ** c\n");
    let ExprKind::Binary { op: BinaryOp::Pow, rhs, .. } = value else {
        panic!("expected top-level '**'");
    };
    assert!(matches!(rhs.kind, ExprKind::Binary { op: BinaryOp::Pow, .. }));
}

#[test]
fn equal_precedence_is_left_associative() {
    // a - b - c => (a - b) - c
    let value = assign_value("x = a - b - c\n");
    let ExprKind::Binary { op: BinaryOp::Sub, lhs, .. } = value else {
        panic!("expected top-level '-'");
    };
    assert!(matches!(lhs.kind, ExprKind::Binary { op: BinaryOp::Sub, .. }));
}

#[test]
fn nested_member_access_chains_freely() {
    let value = assign_value("x = a.b.c\n");
    let ExprKind::Member { object, name } = value else {
        panic!("expected member access");
    };
    assert_eq!(name, "c");
    assert!(matches!(object.kind, ExprKind::Member { .. }));
}

#[test]
fn call_on_member_access() {
    let value = assign_value("x = a.b.c()\n");
    let ExprKind::Call { callee, args } = value else {
        panic!("expected call");
    };
    assert!(args.is_empty());
    assert!(matches!(callee.kind, ExprKind::Member { .. }));
}

#[test]
fn index_and_call_compose() {
    let value = assign_value("x = a[0](1, 2)\n");
    let ExprKind::Call { callee, args } = value else {
        panic!("expected call");
    };
    assert_eq!(args.len(), 2);
    assert!(matches!(callee.kind, ExprKind::Index { .. }));
}

#[test]
fn list_and_dict_literals() {
    let value = assign_value("x = [1, 2, 3]\n");
    let ExprKind::List { elements } = value else {
        panic!("expected list");
    };
    assert_eq!(elements.len(), 3);

    let value = assign_value("x = {a: 1, \"b\": 2}\n");
    let ExprKind::Dict { entries } = value else {
        panic!("expected dict");
    };
    assert_eq!(entries.len(), 2);
    assert!(matches!(&entries[0].0.kind, ExprKind::String(s) if s == "a"));
    assert!(matches!(&entries[1].0.kind, ExprKind::String(s) if s == "b"));
}
