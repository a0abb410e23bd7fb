//! 文のセマンティック解析テスト

use super::*;
use shadelang::ast::build::*;
use shadelang::Type;

#[test]
fn test_if_requires_bool_condition() {
    // void main() { if (1) {} }
    assert_single_error(
        vec![function(
            "main",
            TypeSpec::Void,
            vec![],
            vec![],
            vec![if_stmt(int(1), block(vec![], vec![]), None)],
        )],
        |e| matches!(e, SemanticError::TestNotBoolean { ty, .. } if ty == "int"),
    );
}

#[test]
fn test_while_with_break() {
    // void main(bool running) { while (running) { break; } }
    assert_analysis_success(vec![function(
        "main",
        TypeSpec::Void,
        vec![var_decl("running", TypeSpec::Bool, None)],
        vec![],
        vec![while_stmt(
            var("running"),
            block(vec![], vec![Stmt::Break(Span::dummy())]),
        )],
    )]);
}

#[test]
fn test_break_outside_loop() {
    assert_single_error(
        vec![function(
            "main",
            TypeSpec::Void,
            vec![],
            vec![],
            vec![if_stmt(boolean(true), Stmt::Break(Span::dummy()), None)],
        )],
        |e| matches!(e, SemanticError::BreakOutsideLoop { .. }),
    );
}

#[test]
fn test_for_loop_checks_all_clauses() {
    // void main() { int i; for (i = 0; i < 4; i++) { break; } }
    let for_stmt = Stmt::For(ForStmt {
        init: Some(assign(AssignOp::Assign, var("i"), int(0))),
        cond: relational(RelationalOp::Lt, var("i"), int(4)),
        step: Some(postfix(ArithmeticOp::Increment, var("i"))),
        body: Box::new(block(vec![], vec![Stmt::Break(Span::dummy())])),
        span: Span::dummy(),
    });
    let program = assert_analysis_success(vec![function(
        "main",
        TypeSpec::Void,
        vec![],
        vec![var_decl("i", TypeSpec::Int, None)],
        vec![for_stmt],
    )]);

    match &body_stmts(&program, 0)[0] {
        Stmt::For(for_stmt) => {
            assert_eq!(for_stmt.cond.ty(), Some(Type::BOOL));
            assert_eq!(for_stmt.step.as_ref().and_then(Expr::ty), Some(Type::INT));
        }
        other => panic!("unexpected statement: {:?}", other),
    }
}

#[test]
fn test_return_type_is_not_compared() {
    // int f() { return true; } は報告しない
    assert_analysis_success(vec![function(
        "f",
        TypeSpec::Int,
        vec![],
        vec![],
        vec![return_stmt(Some(boolean(true)))],
    )]);
}

#[test]
fn test_return_value_is_still_checked() {
    assert_single_error(
        vec![function("f", TypeSpec::Int, vec![], vec![], vec![return_stmt(Some(var("missing")))])],
        |e| matches!(e, SemanticError::IdentifierNotDeclared { .. }),
    );
}

#[test]
fn test_diagnostics_follow_visit_order() {
    // int a = 1.0; void main() { b; } bool c = 1 < true;
    let (_, errors) = analyze_decls(vec![
        global_init("a", TypeSpec::Int, float(1.0)),
        function("main", TypeSpec::Void, vec![], vec![], vec![expr_stmt(var("b"))]),
        global_init("c", TypeSpec::Bool, relational(RelationalOp::Lt, int(1), boolean(true))),
    ]);

    assert_eq!(errors.len(), 3);
    assert!(matches!(errors[0], SemanticError::InvalidInitialization { .. }));
    assert!(matches!(errors[1], SemanticError::IdentifierNotDeclared { .. }));
    assert!(matches!(errors[2], SemanticError::IncompatibleOperands { .. }));
}
