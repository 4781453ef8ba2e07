use super::{parse, parse_err};
use crate::ast::{BinaryOp, ExprKind, StmtKind};
use crate::parser::ParseErrorKind;

#[test]
fn s1_arithmetic_precedence() {
    let program = parse("x = 1 + 2 * 3 ** 2\n");
    assert_eq!(program.statements.len(), 1);
    let StmtKind::Assign { target, value } = &program.statements[0].kind else {
        panic!("expected assign");
    };
    assert!(matches!(&target.kind, ExprKind::Identifier(n) if n == "x"));
    assert!(matches!(value.kind, ExprKind::Binary { op: BinaryOp::Add, .. }));
}

#[test]
fn s2_if_elif_else_colon_style() {
    let src = "\
if a > 0:
  x = 1
elif a == 0:
  x = 0
else:
  x = -1
end
";
    let program = parse(src);
    assert_eq!(program.statements.len(), 1);
    let StmtKind::If { then, elifs, else_branch, .. } = &program.statements[0].kind else {
        panic!("expected if statement");
    };
    assert_eq!(then.len(), 1);
    assert_eq!(elifs.len(), 1);
    assert!(else_branch.is_some());
}

#[test]
fn s3_mixed_block_style_is_a_parse_error() {
    let src = "if a: x=1 end\nwhile b { x=2 }\n";
    let err = parse_err(src);
    assert_eq!(err.kind(), ParseErrorKind::MixedBlockStyle);
}

#[test]
fn s4a_lambda_vs_parenthesized_expression() {
    let program = parse("f = (x, y) => x + y\n");
    let StmtKind::Assign { value, .. } = &program.statements[0].kind else {
        panic!("expected assign");
    };
    assert!(matches!(value.kind, ExprKind::Lambda { .. }));
}

#[test]
fn s4b_parenthesized_expression_is_not_a_lambda() {
    let program = parse("z = (1 + 2) * 3\n");
    let StmtKind::Assign { value, .. } = &program.statements[0].kind else {
        panic!("expected assign");
    };
    assert!(matches!(value.kind, ExprKind::Binary { op: BinaryOp::Mul, .. }));
}

#[test]
fn s5_channel_send_vs_receive() {
    let program = parse("ch <- 42\nx = <- ch\n");
    assert_eq!(program.statements.len(), 2);
    assert!(matches!(&program.statements[0].kind, StmtKind::ChanSend { .. }));
    let StmtKind::Assign { value, .. } = &program.statements[1].kind else {
        panic!("expected assign");
    };
    assert!(matches!(value.kind, ExprKind::ChanRecv { .. }));
}

#[test]
fn s6_moon_wraps_a_bare_lambda_in_a_call() {
    let program = parse("moon (() => work())\n");
    let StmtKind::Moon(call) = &program.statements[0].kind else {
        panic!("expected moon statement");
    };
    let ExprKind::Call { callee, args } = &call.kind else {
        panic!("expected moon's payload to be a call");
    };
    assert!(args.is_empty());
    assert!(matches!(callee.kind, ExprKind::Lambda { .. }));
}

#[test]
fn brace_style_file_commits_to_braces() {
    let src = "if a { x = 1 }\n";
    let _ = parse(src);
}

#[test]
fn switch_always_uses_colon_style_even_in_a_brace_file() {
    let src = "\
if a { x = 1 }
switch x:
case 1:
  y = 1
default:
  y = 0
end
";
    let program = parse(src);
    assert_eq!(program.statements.len(), 2);
    assert!(matches!(&program.statements[1].kind, StmtKind::Switch { .. }));
}
