//! 宣言の定義

use serde::{Deserialize, Serialize};

use super::{Expr, Identifier, Span, Stmt, TypeQualifier, TypeSpec};

/// トップレベルおよびブロック内の宣言
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decl {
    Var(VarDecl),
    Fn(FnDecl),
}

impl Decl {
    pub fn name(&self) -> &Identifier {
        match self {
            Decl::Var(var) => &var.name,
            Decl::Fn(func) => &func.name,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Decl::Var(var) => var.span,
            Decl::Fn(func) => func.span,
        }
    }
}

/// 変数宣言（関数の仮引数もこれで表す）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    pub name: Identifier,
    pub ty: TypeSpec,
    #[serde(default)]
    pub qualifier: Option<TypeQualifier>,
    #[serde(default)]
    pub init: Option<Expr>,
    pub span: Span,
}

/// 関数宣言
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FnDecl {
    pub name: Identifier,
    pub return_type: TypeSpec,
    #[serde(default)]
    pub return_qualifier: Option<TypeQualifier>,
    pub formals: Vec<VarDecl>,
    /// 本体。プロトタイプ宣言では`None`
    #[serde(default)]
    pub body: Option<Stmt>,
    pub span: Span,
}

impl FnDecl {
    /// パーサーが後から本体を取り付けるときに使う
    pub fn set_body(&mut self, body: Stmt) {
        self.body = Some(body);
    }
}
