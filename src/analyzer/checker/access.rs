//! 配列アクセスとスウィズルの解析

use crate::analyzer::types::Type;
use crate::ast::*;
use crate::error::{CheckResult, InternalError};

use super::SemanticChecker;

/// スウィズルに使える成分名と、その成分の位置
fn component_index(c: char) -> Option<usize> {
    match c {
        'x' => Some(0),
        'y' => Some(1),
        'z' => Some(2),
        'w' => Some(3),
        _ => None,
    }
}

impl SemanticChecker<'_> {
    /// 配列アクセスの解析
    ///
    /// 基底は変数参照でなければならない。それ以外の形はパーサーの契約違反として扱う。
    pub(super) fn check_array_access(&mut self, base: &mut Expr, subscript: &mut Expr) -> CheckResult<Type> {
        let ExprKind::Var(name) = &base.kind else {
            return Err(InternalError::UnsupportedShape {
                node: "ArrayAccess",
                position: "base",
                found: base.kind.name().to_string(),
                span: base.span,
            });
        };
        let name = name.clone();

        let base_ty = self.check_expr(base)?;
        self.check_expr(subscript)?;

        // 未宣言なら変数参照の解析で報告済み
        if base_ty.is_error() {
            return Ok(Type::ERROR);
        }
        match self.registry.element_of(base_ty) {
            Some(elem) => Ok(elem),
            None => {
                self.reporter.not_an_array(&name);
                Ok(Type::ERROR)
            }
        }
    }

    /// スウィズルの解析
    ///
    /// 1文字なら`float`、2〜4文字なら同じ幅のベクトル型になる。
    pub(super) fn check_field_access(
        &mut self,
        base: Option<&mut Expr>,
        field: &Identifier,
        span: Span,
    ) -> CheckResult<Type> {
        let Some(base) = base else {
            return Err(InternalError::MissingChild {
                node: "FieldAccess",
                child: "base",
                span,
            });
        };

        let base_ty = self.check_expr(base)?;
        if base_ty.is_error() {
            return Ok(Type::ERROR);
        }
        let Some(width) = base_ty.vector_width() else {
            let name = self.type_name(base_ty);
            self.reporter.inaccessible_swizzle(field, name);
            return Ok(Type::ERROR);
        };

        let components: Option<Vec<usize>> = field.name.chars().map(component_index).collect();
        let components = match components {
            Some(components) if !components.is_empty() => components,
            _ => {
                self.reporter.invalid_swizzle(field);
                return Ok(Type::ERROR);
            }
        };

        if components.len() > 4 {
            self.reporter.oversized_vector(field);
            return Ok(Type::ERROR);
        }
        if components.iter().any(|&index| index >= width) {
            let name = self.type_name(base_ty);
            self.reporter.swizzle_out_of_bound(field, name);
            return Ok(Type::ERROR);
        }

        Ok(Type::vector_of_width(components.len()).unwrap_or(Type::ERROR))
    }
}
