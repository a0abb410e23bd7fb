//! 宣言（変数、関数）の解析

use log::debug;

use crate::analyzer::symbol::Symbol;
use crate::ast::*;
use crate::error::CheckResult;

use super::SemanticChecker;

impl SemanticChecker<'_> {
    pub fn check_decl(&mut self, decl: &mut Decl) -> CheckResult<()> {
        match decl {
            Decl::Var(var) => self.check_var_decl(var),
            Decl::Fn(func) => self.check_fn_decl(func),
        }
    }

    /// 変数宣言の解析
    pub fn check_var_decl(&mut self, decl: &mut VarDecl) -> CheckResult<()> {
        let ty = self.registry.resolve(&decl.ty);
        debug!("declare variable `{}`: {}", decl.name, self.type_name(ty));

        self.declare(&decl.name, Symbol::variable(&decl.name.name, ty, decl.name.span));

        if let Some(init) = &mut decl.init {
            let found = self.check_expr(init)?;
            // errorは既に報告済み
            if found != ty && !found.is_error() {
                let expected = self.type_name(ty);
                let found = self.type_name(found);
                self.reporter.invalid_initialization(&decl.name, expected, found);
            }
        }
        Ok(())
    }

    /// 関数宣言の解析
    ///
    /// 戻り値の型とreturn文の整合性は検査しない。
    pub fn check_fn_decl(&mut self, decl: &mut FnDecl) -> CheckResult<()> {
        let return_type = self.registry.resolve(&decl.return_type);
        let mut formals = Vec::with_capacity(decl.formals.len());
        for formal in &decl.formals {
            formals.push(self.registry.resolve(&formal.ty));
        }
        debug!("declare function `{}` with {} formals", decl.name, formals.len());

        self.declare(
            &decl.name,
            Symbol::function(&decl.name.name, return_type, formals.clone(), decl.name.span),
        );

        self.in_scope(|checker| {
            // 仮引数同士の重複は検査しない
            for (formal, ty) in decl.formals.iter().zip(formals) {
                checker
                    .scopes
                    .insert(Symbol::variable(&formal.name.name, ty, formal.name.span));
            }

            if let Some(body) = &mut decl.body {
                checker.check_fn_body(body)?;
            }
            Ok(())
        })
    }
}
