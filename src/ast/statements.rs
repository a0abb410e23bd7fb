//! 文の定義

use serde::{Deserialize, Serialize};

use super::{Expr, Span, VarDecl};

/// 文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Block(StmtBlock),
    Expr(Expr),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Return(ReturnStmt),
    Break(Span),
}

/// 複文（`{ ... }`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StmtBlock {
    #[serde(default)]
    pub decls: Vec<VarDecl>,
    #[serde(default)]
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

/// if文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub cond: Expr,
    pub then_branch: Box<Stmt>,
    #[serde(default)]
    pub else_branch: Option<Box<Stmt>>,
    pub span: Span,
}

/// while文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStmt {
    pub cond: Expr,
    pub body: Box<Stmt>,
    pub span: Span,
}

/// for文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStmt {
    #[serde(default)]
    pub init: Option<Expr>,
    pub cond: Expr,
    #[serde(default)]
    pub step: Option<Expr>,
    pub body: Box<Stmt>,
    pub span: Span,
}

/// return文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    #[serde(default)]
    pub value: Option<Expr>,
    pub span: Span,
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Block(block) => block.span,
            Stmt::Expr(expr) => expr.span,
            Stmt::If(stmt) => stmt.span,
            Stmt::While(stmt) => stmt.span,
            Stmt::For(stmt) => stmt.span,
            Stmt::Return(stmt) => stmt.span,
            Stmt::Break(span) => *span,
        }
    }
}
