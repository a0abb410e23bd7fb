//! セマンティック解析テストの共通モジュール
//!
//! セマンティック解析テストで使用する共通のヘルパー関数を定義する。

use shadelang::analyzer::check_program;
use shadelang::ast::*;
use shadelang::error::SemanticError;

/// 宣言列からプログラムを組み立てて解析し、報告された診断を返す
pub fn analyze_decls(decls: Vec<Decl>) -> (Program, Vec<SemanticError>) {
    let mut program = Program::new(decls);
    let mut errors = Vec::new();
    check_program(&mut program, &mut errors).expect("Checking should not hit an internal error");
    (program, errors)
}

/// 解析に成功することを確認するヘルパー関数
pub fn assert_analysis_success(decls: Vec<Decl>) -> Program {
    let (program, errors) = analyze_decls(decls);
    assert!(errors.is_empty(), "Analysis should succeed, got: {:?}", errors);
    program
}

/// 診断がちょうど1件で、条件を満たすことを確認するヘルパー関数
pub fn assert_single_error<F>(decls: Vec<Decl>, check: F) -> Program
where
    F: Fn(&SemanticError) -> bool,
{
    let (program, errors) = analyze_decls(decls);
    assert_eq!(errors.len(), 1, "Expected exactly one diagnostic, got: {:?}", errors);
    assert!(check(&errors[0]), "Expected specific error type, got: {:?}", errors[0]);
    program
}

/// 変数宣言を作る
pub fn global(name: &str, ty: TypeSpec) -> Decl {
    Decl::Var(build::var_decl(name, ty, None))
}

/// 初期化子付きの変数宣言を作る
pub fn global_init(name: &str, ty: TypeSpec, init: Expr) -> Decl {
    Decl::Var(build::var_decl(name, ty, Some(init)))
}

/// 本体付きの関数宣言を作る
pub fn function(name: &str, return_type: TypeSpec, formals: Vec<VarDecl>, decls: Vec<VarDecl>, stmts: Vec<Stmt>) -> Decl {
    Decl::Fn(build::fn_decl(name, return_type, formals, Some(build::block(decls, stmts))))
}

/// `index`番目のトップレベル変数宣言の初期化子
pub fn init_of(program: &Program, index: usize) -> &Expr {
    match &program.decls[index] {
        Decl::Var(var) => var.init.as_ref().expect("declaration should have an initializer"),
        other => panic!("Expected a variable declaration, got: {:?}", other),
    }
}

/// `index`番目のトップレベル関数の本体にある文
pub fn body_stmts(program: &Program, index: usize) -> &[Stmt] {
    match &program.decls[index] {
        Decl::Fn(FnDecl {
            body: Some(Stmt::Block(block)),
            ..
        }) => &block.stmts,
        other => panic!("Expected a function with a block body, got: {:?}", other),
    }
}

// サブモジュールの宣言
#[cfg(test)]
mod access_test;
#[cfg(test)]
mod call_test;
#[cfg(test)]
mod statement_test;
