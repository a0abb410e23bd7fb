//! 意味解析器のメイン実装

use log::debug;

use crate::ast::*;
use crate::error::CheckResult;

use super::reporter::Reporter;
use super::symbol::ScopeStack;
use super::types::TypeRegistry;

// サブモジュール
mod access;
mod declarations;
mod expressions;
mod scope;
mod statements;

/// 意味解析器
///
/// 宣言を上から順に、式を下から上へ検査し、すべての式に型を書き込む。
/// 利用者向けの診断は`reporter`へ報告し、内部エラーのときだけ`Err`で中断する。
pub struct SemanticChecker<'r> {
    /// 型レジストリ
    pub registry: TypeRegistry,
    /// スコープスタック
    pub scopes: ScopeStack,
    /// 診断の報告先
    reporter: &'r mut dyn Reporter,
    /// 囲んでいるループの数（break文の検査用）
    loop_depth: usize,
}

impl<'r> SemanticChecker<'r> {
    pub fn new(reporter: &'r mut dyn Reporter) -> Self {
        Self {
            registry: TypeRegistry::new(),
            scopes: ScopeStack::new(),
            reporter,
            loop_depth: 0,
        }
    }

    /// プログラム全体を検査
    pub fn check_program(&mut self, program: &mut Program) -> CheckResult<()> {
        debug!("checking program with {} declarations", program.decls.len());

        for decl in &mut program.decls {
            self.check_decl(decl)?;
        }

        debug_assert_eq!(self.scopes.depth(), 1, "scope stack must return to the global scope");
        Ok(())
    }
}

/// プログラムを検査する
///
/// 診断が1件も報告されなければ成功を意味する。
pub fn check_program(program: &mut Program, reporter: &mut dyn Reporter) -> CheckResult<()> {
    SemanticChecker::new(reporter).check_program(program)
}
