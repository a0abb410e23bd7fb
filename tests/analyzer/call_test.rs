//! 関数呼び出しのセマンティック解析テスト

use super::*;
use shadelang::ast::build::*;
use shadelang::error::LookupReason;
use shadelang::Type;

/// float f(int a, float b);
fn prototype() -> Decl {
    Decl::Fn(fn_decl(
        "f",
        TypeSpec::Float,
        vec![var_decl("a", TypeSpec::Int, None), var_decl("b", TypeSpec::Float, None)],
        None,
    ))
}

fn call_args(program: &Program, index: usize) -> &[Expr] {
    match &init_of(program, index).kind {
        ExprKind::Call { args, .. } => args,
        other => panic!("unexpected expression: {:?}", other),
    }
}

#[test]
fn test_call_adopts_return_type() {
    let program = assert_analysis_success(vec![
        prototype(),
        global_init("r", TypeSpec::Float, call("f", vec![int(1), float(2.0)])),
    ]);

    assert_eq!(init_of(&program, 1).ty(), Some(Type::FLOAT));
    let args = call_args(&program, 1);
    assert_eq!(args[0].ty(), Some(Type::INT));
    assert_eq!(args[1].ty(), Some(Type::FLOAT));
}

#[test]
fn test_too_few_arguments() {
    let program = assert_single_error(
        vec![prototype(), global_init("r", TypeSpec::Float, call("f", vec![int(1)]))],
        |e| {
            matches!(
                e,
                SemanticError::TooFewArguments { name, expected: 2, found: 1, .. } if name == "f"
            )
        },
    );
    // 戻り値の型は採用される
    assert_eq!(init_of(&program, 1).ty(), Some(Type::FLOAT));
}

#[test]
fn test_too_many_arguments() {
    assert_single_error(
        vec![
            prototype(),
            global_init("r", TypeSpec::Float, call("f", vec![int(1), float(2.0), int(3)])),
        ],
        |e| matches!(e, SemanticError::TooManyArguments { expected: 2, found: 3, .. }),
    );
}

#[test]
fn test_arity_mismatch_leaves_arguments_unchecked() {
    // f(1, 2.0, missing): 未宣言の missing は報告されない
    let program = assert_single_error(
        vec![
            prototype(),
            global_init("r", TypeSpec::Float, call("f", vec![int(1), float(2.0), var("missing")])),
        ],
        |e| matches!(e, SemanticError::TooManyArguments { .. }),
    );

    let args = call_args(&program, 1);
    assert!(args.iter().all(|arg| arg.ty().is_none()));
}

#[test]
fn test_first_mismatch_stops_argument_checking() {
    // f(true, missing) は第1引数だけを報告し、第2引数は検査しない
    let program = assert_single_error(
        vec![
            prototype(),
            global_init("r", TypeSpec::Float, call("f", vec![boolean(true), var("missing")])),
        ],
        |e| {
            matches!(
                e,
                SemanticError::FormalTypeMismatch { index: 1, expected, found, .. }
                    if expected == "int" && found == "bool"
            )
        },
    );

    let args = call_args(&program, 1);
    assert_eq!(args[0].ty(), Some(Type::BOOL));
    assert_eq!(args[1].ty(), None);
}

#[test]
fn test_second_argument_mismatch() {
    assert_single_error(
        vec![prototype(), global_init("r", TypeSpec::Float, call("f", vec![int(1), int(2)]))],
        |e| matches!(e, SemanticError::FormalTypeMismatch { index: 2, .. }),
    );
}

#[test]
fn test_calling_a_variable() {
    // int x; int y = x(1);
    let program = assert_single_error(
        vec![
            global("x", TypeSpec::Int),
            global_init("y", TypeSpec::Int, call("x", vec![int(1)])),
        ],
        |e| matches!(e, SemanticError::NotAFunction { name, .. } if name == "x"),
    );

    // 型は未設定のまま
    assert_eq!(init_of(&program, 1).ty(), None);
}

#[test]
fn test_calling_undeclared_function() {
    let program = assert_single_error(vec![global_init("y", TypeSpec::Int, call("nope", vec![]))], |e| {
        matches!(
            e,
            SemanticError::IdentifierNotDeclared { reason: LookupReason::Function, .. }
        )
    });
    assert_eq!(init_of(&program, 0).ty(), Some(Type::ERROR));
}

#[test]
fn test_recursive_call_inside_body() {
    // int fact(int n) { return fact(n - 1); }
    assert_analysis_success(vec![function(
        "fact",
        TypeSpec::Int,
        vec![var_decl("n", TypeSpec::Int, None)],
        vec![],
        vec![return_stmt(Some(call(
            "fact",
            vec![arith(ArithmeticOp::Sub, var("n"), int(1))],
        )))],
    )]);
}

#[test]
fn test_local_variable_shadows_function() {
    // float f(int a, float b); void main() { int f; f(1, 2.0); }
    assert_single_error(
        vec![
            prototype(),
            function(
                "main",
                TypeSpec::Void,
                vec![],
                vec![var_decl("f", TypeSpec::Int, None)],
                vec![expr_stmt(call("f", vec![int(1), float(2.0)]))],
            ),
        ],
        |e| matches!(e, SemanticError::NotAFunction { .. }),
    );
}
