//! スコープ管理とユーティリティ関数

use log::debug;

use crate::analyzer::symbol::Symbol;
use crate::analyzer::types::Type;
use crate::ast::Identifier;
use crate::error::CheckResult;

use super::SemanticChecker;

impl SemanticChecker<'_> {
    /// 新しいスコープの中で`f`を実行する
    ///
    /// `f`がエラーで抜けてもスコープは必ず破棄される。
    pub fn in_scope<T>(&mut self, f: impl FnOnce(&mut Self) -> CheckResult<T>) -> CheckResult<T> {
        self.scopes.push();
        debug!("enter scope (depth {})", self.scopes.depth());
        let result = f(self);
        debug!("exit scope (depth {})", self.scopes.depth());
        self.scopes.pop();
        result
    }

    /// ループ本体として`f`を実行する
    pub(super) fn in_loop<T>(&mut self, f: impl FnOnce(&mut Self) -> CheckResult<T>) -> CheckResult<T> {
        self.loop_depth += 1;
        let result = f(self);
        self.loop_depth -= 1;
        result
    }

    /// 現在のスコープにシンボルを登録する
    ///
    /// 同名の宣言があれば衝突を報告し、新しい宣言で置き換える。
    pub(super) fn declare(&mut self, name: &Identifier, symbol: Symbol) {
        if let Some(previous) = self.scopes.insert(symbol) {
            self.reporter.decl_conflict(name, previous.span);
        }
    }

    pub(super) fn type_name(&self, ty: Type) -> String {
        self.registry.name(ty)
    }
}
