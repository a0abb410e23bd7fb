//! 診断の報告先
//!
//! 意味解析器は診断の出力方法を知らない。[`Reporter`]を実装した報告先に
//! 1件ずつ渡すだけで、整形や表示は呼び出し側が決める。

use crate::ast::{Identifier, Span};
use crate::error::{ErrorCollector, LookupReason, SemanticError};

/// 診断の報告先
///
/// 実装が必要なのは[`Reporter::report`]だけで、診断の種類ごとのメソッドは
/// それを組み立てて呼び出す。
pub trait Reporter {
    fn report(&mut self, error: SemanticError);

    fn decl_conflict(&mut self, name: &Identifier, previous: Span) {
        self.report(SemanticError::DeclConflict {
            name: name.name.clone(),
            span: name.span,
            previous,
        });
    }

    fn invalid_initialization(&mut self, name: &Identifier, expected: String, found: String) {
        self.report(SemanticError::InvalidInitialization {
            name: name.name.clone(),
            expected,
            found,
            span: name.span,
        });
    }

    fn incompatible_operand(&mut self, op: &str, ty: String, span: Span) {
        self.report(SemanticError::IncompatibleOperand {
            op: op.to_string(),
            ty,
            span,
        });
    }

    fn incompatible_operands(&mut self, op: &str, left: String, right: String, span: Span) {
        self.report(SemanticError::IncompatibleOperands {
            op: op.to_string(),
            left,
            right,
            span,
        });
    }

    fn identifier_not_declared(&mut self, name: &Identifier, reason: LookupReason) {
        self.report(SemanticError::IdentifierNotDeclared {
            name: name.name.clone(),
            reason,
            span: name.span,
        });
    }

    fn not_an_array(&mut self, name: &Identifier) {
        self.report(SemanticError::NotAnArray {
            name: name.name.clone(),
            span: name.span,
        });
    }

    fn not_a_function(&mut self, name: &Identifier) {
        self.report(SemanticError::NotAFunction {
            name: name.name.clone(),
            span: name.span,
        });
    }

    fn too_few_arguments(&mut self, name: &Identifier, expected: usize, found: usize) {
        self.report(SemanticError::TooFewArguments {
            name: name.name.clone(),
            expected,
            found,
            span: name.span,
        });
    }

    fn too_many_arguments(&mut self, name: &Identifier, expected: usize, found: usize) {
        self.report(SemanticError::TooManyArguments {
            name: name.name.clone(),
            expected,
            found,
            span: name.span,
        });
    }

    /// `index`は1始まり
    fn formal_type_mismatch(&mut self, name: &Identifier, index: usize, expected: String, found: String) {
        self.report(SemanticError::FormalTypeMismatch {
            name: name.name.clone(),
            index,
            expected,
            found,
            span: name.span,
        });
    }

    fn inaccessible_swizzle(&mut self, field: &Identifier, ty: String) {
        self.report(SemanticError::InaccessibleSwizzle {
            field: field.name.clone(),
            ty,
            span: field.span,
        });
    }

    fn invalid_swizzle(&mut self, field: &Identifier) {
        self.report(SemanticError::InvalidSwizzle {
            field: field.name.clone(),
            span: field.span,
        });
    }

    fn oversized_vector(&mut self, field: &Identifier) {
        self.report(SemanticError::OversizedVector {
            field: field.name.clone(),
            span: field.span,
        });
    }

    fn swizzle_out_of_bound(&mut self, field: &Identifier, ty: String) {
        self.report(SemanticError::SwizzleOutOfBound {
            field: field.name.clone(),
            ty,
            span: field.span,
        });
    }

    fn test_not_boolean(&mut self, ty: String, span: Span) {
        self.report(SemanticError::TestNotBoolean { ty, span });
    }

    fn conditional_mismatch(&mut self, then_ty: String, else_ty: String, span: Span) {
        self.report(SemanticError::ConditionalMismatch {
            then_ty,
            else_ty,
            span,
        });
    }

    fn break_outside_loop(&mut self, span: Span) {
        self.report(SemanticError::BreakOutsideLoop { span });
    }
}

impl Reporter for ErrorCollector {
    fn report(&mut self, error: SemanticError) {
        self.add_error(error.into());
    }
}

impl Reporter for Vec<SemanticError> {
    fn report(&mut self, error: SemanticError) {
        self.push(error);
    }
}
