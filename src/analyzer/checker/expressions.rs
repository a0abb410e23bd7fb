//! 式の解析

use log::trace;

use crate::analyzer::symbol::SymbolKind;
use crate::analyzer::types::Type;
use crate::ast::*;
use crate::error::{CheckResult, InternalError, LookupReason};

use super::SemanticChecker;

impl SemanticChecker<'_> {
    /// 式を解析して型を書き込み、その型を返す
    ///
    /// 型が未設定のまま残った式（関数でない名前の呼び出し）は、親からはerrorとして扱う。
    pub fn check_expr(&mut self, expr: &mut Expr) -> CheckResult<Type> {
        let ty = self.infer_expr(expr)?;
        expr.ty = ty;
        Ok(ty.unwrap_or(Type::ERROR))
    }

    fn infer_expr(&mut self, expr: &mut Expr) -> CheckResult<Option<Type>> {
        let span = expr.span;
        let ty = match &mut expr.kind {
            ExprKind::IntConstant(_) => Type::INT,
            ExprKind::FloatConstant(_) => Type::FLOAT,
            ExprKind::BoolConstant(_) => Type::BOOL,
            ExprKind::Var(name) => self.check_var(name),
            ExprKind::Assign { op, left, right } => self.check_assign(*op, left, right, span)?,
            ExprKind::Arithmetic { op, left, right } => {
                self.check_arithmetic(*op, left.as_deref_mut(), right.as_deref_mut(), span)?
            }
            ExprKind::Relational { op, left, right } => {
                self.check_relational(*op, left, right, span)?
            }
            ExprKind::Equality { op, left, right } => self.check_equality(*op, left, right, span)?,
            ExprKind::Logical { op, left, right } => self.check_logical(*op, left, right, span)?,
            ExprKind::Conditional {
                cond,
                then_expr,
                else_expr,
            } => self.check_conditional(cond, then_expr, else_expr, span)?,
            ExprKind::ArrayAccess { base, subscript } => self.check_array_access(base, subscript)?,
            ExprKind::FieldAccess { base, field } => {
                self.check_field_access(base.as_deref_mut(), field, span)?
            }
            ExprKind::Call { base, callee, args } => {
                return self.check_call(base.as_deref_mut(), callee, args);
            }
        };
        Ok(Some(ty))
    }

    /// 変数参照の解決
    fn check_var(&mut self, name: &Identifier) -> Type {
        let found = self.scopes.find_variable(&name.name).and_then(|symbol| match symbol.kind {
            SymbolKind::Var { ty } => Some(ty),
            SymbolKind::Function { .. } => None,
        });
        match found {
            Some(ty) => ty,
            None => {
                self.reporter.identifier_not_declared(name, LookupReason::Variable);
                Type::ERROR
            }
        }
    }

    /// 両辺を左から順に解析する。どちらかがerrorなら`None`
    ///
    /// 左辺がerrorのときは右辺を解析しない。
    fn check_operands(&mut self, left: &mut Expr, right: &mut Expr) -> CheckResult<Option<(Type, Type)>> {
        let left = self.check_expr(left)?;
        if left.is_error() {
            return Ok(None);
        }
        let right = self.check_expr(right)?;
        if right.is_error() {
            return Ok(None);
        }
        Ok(Some((left, right)))
    }

    fn report_operands(&mut self, op: &str, left: Type, right: Type, span: Span) -> Type {
        let left = self.type_name(left);
        let right = self.type_name(right);
        self.reporter.incompatible_operands(op, left, right, span);
        Type::ERROR
    }

    fn check_equality(&mut self, op: EqualityOp, left: &mut Expr, right: &mut Expr, span: Span) -> CheckResult<Type> {
        let Some((l, r)) = self.check_operands(left, right)? else {
            return Ok(Type::ERROR);
        };
        if l != r {
            return Ok(self.report_operands(op.as_str(), l, r, span));
        }
        Ok(Type::BOOL)
    }

    fn check_relational(&mut self, op: RelationalOp, left: &mut Expr, right: &mut Expr, span: Span) -> CheckResult<Type> {
        let Some((l, r)) = self.check_operands(left, right)? else {
            return Ok(Type::ERROR);
        };
        // boolは型が一致していても比較できない
        if l != r || l.is_bool() {
            return Ok(self.report_operands(op.as_str(), l, r, span));
        }
        Ok(Type::BOOL)
    }

    fn check_logical(&mut self, op: LogicalOp, left: &mut Expr, right: &mut Expr, span: Span) -> CheckResult<Type> {
        let Some((l, r)) = self.check_operands(left, right)? else {
            return Ok(Type::ERROR);
        };
        if l != r || !l.is_bool() {
            return Ok(self.report_operands(op.as_str(), l, r, span));
        }
        Ok(Type::BOOL)
    }

    fn check_assign(&mut self, op: AssignOp, left: &mut Expr, right: &mut Expr, span: Span) -> CheckResult<Type> {
        let Some((l, r)) = self.check_operands(left, right)? else {
            return Ok(Type::ERROR);
        };
        if l != r || (op.is_compound() && l.is_bool()) {
            return Ok(self.report_operands(op.as_str(), l, r, span));
        }
        Ok(l)
    }

    /// 算術演算の解析
    ///
    /// 単項形式では存在する側だけを検査する。二項形式では型の不一致より先に
    /// 各辺のboolを検査する。
    fn check_arithmetic(
        &mut self,
        op: ArithmeticOp,
        mut left: Option<&mut Expr>,
        mut right: Option<&mut Expr>,
        span: Span,
    ) -> CheckResult<Type> {
        let op_str = op.as_str();

        let left_ty = match left.as_deref_mut() {
            Some(left) => {
                let ty = self.check_expr(left)?;
                if ty.is_error() {
                    return Ok(Type::ERROR);
                }
                if ty.is_bool() {
                    match right.as_deref_mut() {
                        None => {
                            let name = self.type_name(ty);
                            self.reporter.incompatible_operand(op_str, name, span);
                        }
                        Some(right) => {
                            let right_ty = self.check_expr(right)?;
                            if !right_ty.is_error() {
                                self.report_operands(op_str, ty, right_ty, span);
                            }
                        }
                    }
                    return Ok(Type::ERROR);
                }
                Some(ty)
            }
            None => None,
        };

        let right_ty = match right.as_deref_mut() {
            Some(right) => {
                let ty = self.check_expr(right)?;
                if ty.is_error() {
                    return Ok(Type::ERROR);
                }
                if ty.is_bool() {
                    match left_ty {
                        None => {
                            let name = self.type_name(ty);
                            self.reporter.incompatible_operand(op_str, name, span);
                        }
                        Some(left_ty) => {
                            self.report_operands(op_str, left_ty, ty, span);
                        }
                    }
                    return Ok(Type::ERROR);
                }
                Some(ty)
            }
            None => None,
        };

        match (left_ty, right_ty) {
            (Some(l), Some(r)) if l != r => Ok(self.report_operands(op_str, l, r, span)),
            (Some(ty), _) | (None, Some(ty)) => Ok(ty),
            (None, None) => Err(InternalError::MissingChild {
                node: "ArithmeticExpr",
                child: "operand",
                span,
            }),
        }
    }

    /// 条件演算子の解析
    fn check_conditional(
        &mut self,
        cond: &mut Expr,
        then_expr: &mut Expr,
        else_expr: &mut Expr,
        span: Span,
    ) -> CheckResult<Type> {
        let cond_ty = self.check_expr(cond)?;
        let mut valid = !cond_ty.is_error();
        if valid && !cond_ty.is_bool() {
            let name = self.type_name(cond_ty);
            self.reporter.test_not_boolean(name, cond.span);
            valid = false;
        }

        let then_ty = self.check_expr(then_expr)?;
        let else_ty = self.check_expr(else_expr)?;
        if then_ty.is_error() || else_ty.is_error() {
            return Ok(Type::ERROR);
        }
        if then_ty != else_ty {
            let then_name = self.type_name(then_ty);
            let else_name = self.type_name(else_ty);
            self.reporter.conditional_mismatch(then_name, else_name, span);
            return Ok(Type::ERROR);
        }
        Ok(if valid { then_ty } else { Type::ERROR })
    }

    /// 関数呼び出しの解析
    ///
    /// 名前が関数でなければ型を設定せずに戻る。実引数は個数が一致したときだけ
    /// 左から検査し、最初の型不一致で打ち切る。
    fn check_call(
        &mut self,
        base: Option<&mut Expr>,
        callee: &Identifier,
        args: &mut [Expr],
    ) -> CheckResult<Option<Type>> {
        if let Some(base) = base {
            self.check_expr(base)?;
        }

        let signature = self.scopes.find(&callee.name).map(|symbol| match &symbol.kind {
            SymbolKind::Function {
                return_type,
                formals,
            } => Some((*return_type, formals.clone())),
            SymbolKind::Var { .. } => None,
        });

        let (return_type, formals) = match signature {
            None => {
                self.reporter.identifier_not_declared(callee, LookupReason::Function);
                return Ok(Some(Type::ERROR));
            }
            Some(None) => {
                self.reporter.not_a_function(callee);
                return Ok(None);
            }
            Some(Some(signature)) => signature,
        };
        trace!("call `{}` with {} arguments", callee, args.len());

        if args.len() < formals.len() {
            self.reporter.too_few_arguments(callee, formals.len(), args.len());
        } else if args.len() > formals.len() {
            self.reporter.too_many_arguments(callee, formals.len(), args.len());
        } else {
            for (index, (arg, formal)) in args.iter_mut().zip(formals).enumerate() {
                let actual = self.check_expr(arg)?;
                if actual.is_error() {
                    break;
                }
                if actual != formal {
                    let expected = self.type_name(formal);
                    let found = self.type_name(actual);
                    self.reporter.formal_type_mismatch(callee, index + 1, expected, found);
                    break;
                }
            }
        }
        Ok(Some(return_type))
    }
}
