//! 文の解析

use crate::ast::*;
use crate::error::CheckResult;

use super::SemanticChecker;

impl SemanticChecker<'_> {
    /// 関数本体の解析
    ///
    /// 本体の複文は仮引数と同じスコープを共有する。
    pub(super) fn check_fn_body(&mut self, body: &mut Stmt) -> CheckResult<()> {
        match body {
            Stmt::Block(block) => self.check_block_contents(block),
            other => self.check_stmt(other),
        }
    }

    pub fn check_stmt(&mut self, stmt: &mut Stmt) -> CheckResult<()> {
        match stmt {
            Stmt::Block(block) => self.in_scope(|checker| checker.check_block_contents(block)),
            Stmt::Expr(expr) => {
                self.check_expr(expr)?;
                Ok(())
            }
            Stmt::If(if_stmt) => {
                self.check_test(&mut if_stmt.cond)?;
                self.check_stmt(&mut if_stmt.then_branch)?;
                if let Some(else_branch) = &mut if_stmt.else_branch {
                    self.check_stmt(else_branch)?;
                }
                Ok(())
            }
            Stmt::While(while_stmt) => {
                self.check_test(&mut while_stmt.cond)?;
                self.in_loop(|checker| checker.check_stmt(&mut while_stmt.body))
            }
            Stmt::For(for_stmt) => {
                if let Some(init) = &mut for_stmt.init {
                    self.check_expr(init)?;
                }
                self.check_test(&mut for_stmt.cond)?;
                if let Some(step) = &mut for_stmt.step {
                    self.check_expr(step)?;
                }
                self.in_loop(|checker| checker.check_stmt(&mut for_stmt.body))
            }
            Stmt::Return(return_stmt) => {
                if let Some(value) = &mut return_stmt.value {
                    self.check_expr(value)?;
                }
                Ok(())
            }
            Stmt::Break(span) => {
                if self.loop_depth == 0 {
                    self.reporter.break_outside_loop(*span);
                }
                Ok(())
            }
        }
    }

    fn check_block_contents(&mut self, block: &mut StmtBlock) -> CheckResult<()> {
        for decl in &mut block.decls {
            self.check_var_decl(decl)?;
        }
        for stmt in &mut block.stmts {
            self.check_stmt(stmt)?;
        }
        Ok(())
    }

    /// 条件式はboolでなければならない
    fn check_test(&mut self, cond: &mut Expr) -> CheckResult<()> {
        let ty = self.check_expr(cond)?;
        if !ty.is_error() && !ty.is_bool() {
            let name = self.type_name(ty);
            self.reporter.test_not_boolean(name, cond.span);
        }
        Ok(())
    }
}
