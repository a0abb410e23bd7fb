//! プログラム構造

use serde::{Deserialize, Serialize};

use super::{Decl, Span};

/// ASTのルートノード（1つの翻訳単位を表す）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub decls: Vec<Decl>,
    #[serde(default)]
    pub span: Span,
}

impl Program {
    pub fn new(decls: Vec<Decl>) -> Self {
        let span = decls
            .iter()
            .map(Decl::span)
            .reduce(Span::join)
            .unwrap_or_default();
        Self { decls, span }
    }
}
