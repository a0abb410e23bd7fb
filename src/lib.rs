//! Shade Language Semantic Checker Library
//!
//! This library resolves names, assigns types and reports diagnostics for
//! already-parsed Shade programs.

pub mod analyzer;
pub mod ast;
pub mod compiler;
pub mod error;

// Re-export commonly used types
pub use analyzer::{check_program, Reporter, SemanticChecker, Type, TypeRegistry};
pub use ast::{Decl, Expr, ExprKind, Program, Stmt};
pub use compiler::CompilationState;
pub use error::{CheckResult, ErrorCollector, InternalError, SemanticError, ShadeError, ShadeResult};
