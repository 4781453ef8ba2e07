use super::parse;
use crate::ast::{ExprKind, StmtKind};

#[test]
fn for_in_loop() {
    let program = parse("for item in items:\n  x = item\nend\n");
    let StmtKind::ForIn { var, .. } = &program.statements[0].kind else {
        panic!("expected for-in");
    };
    assert_eq!(var, "item");
}

#[test]
fn for_range_loop() {
    let program = parse("for i = 0 to 10:\n  x = i\nend\n");
    let StmtKind::ForRange { var, start, end, .. } = &program.statements[0].kind else {
        panic!("expected for-range");
    };
    assert_eq!(var, "i");
    assert!(matches!(start.kind, ExprKind::Integer(0)));
    assert!(matches!(end.kind, ExprKind::Integer(10)));
}

#[test]
fn try_catch() {
    let program = parse("try:\n  risky()\ncatch err:\n  log(err)\nend\n");
    let StmtKind::Try { err_var, .. } = &program.statements[0].kind else {
        panic!("expected try/catch");
    };
    assert_eq!(err_var, "err");
}

#[test]
fn index_and_member_assignment_targets() {
    let program = parse("a[0] = 1\nobj.field = 2\n");
    assert!(matches!(
        &program.statements[0].kind,
        StmtKind::Assign { target, .. } if matches!(target.kind, ExprKind::Index { .. })
    ));
    assert!(matches!(
        &program.statements[1].kind,
        StmtKind::Assign { target, .. } if matches!(target.kind, ExprKind::Member { .. })
    ));
}

#[test]
fn compound_assignment_desugars_to_binary_op() {
    let program = parse("x += 1\n");
    let StmtKind::Assign { value, .. } = &program.statements[0].kind else {
        panic!("expected assign");
    };
    assert!(matches!(
        value.kind,
        ExprKind::Binary { op: crate::ast::BinaryOp::Add, .. }
    ));
}

#[test]
fn global_statement_with_multiple_names() {
    let program = parse("global a, b, c\n");
    let StmtKind::Global(names) = &program.statements[0].kind else {
        panic!("expected global statement");
    };
    assert_eq!(names, &vec!["a".to_string(), "b".to_string(), "c".to_string()]);
}

#[test]
fn bare_return_has_no_value() {
    let program = parse("func f():\n  return\nend\n");
    let StmtKind::FuncDecl { body, .. } = &program.statements[0].kind else {
        panic!("expected func decl");
    };
    assert!(matches!(&body[0].kind, StmtKind::Return(None)));
}
