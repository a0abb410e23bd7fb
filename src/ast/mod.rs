//! Shade言語の抽象構文木（AST）定義
//!
//! 構文解析は外部のパーサーが担当し、このクレートはJSONなどで受け取った
//! 完成済みのASTに対して意味解析を行います。

use serde::{Deserialize, Serialize};

pub mod build;
mod declarations;
mod expressions;
mod program;
mod statements;
mod types;

pub use declarations::*;
pub use expressions::*;
pub use program::*;
pub use statements::*;
pub use types::*;

/// ソース上の位置情報（バイトオフセット）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn dummy() -> Self {
        Self { start: 0, end: 0 }
    }

    /// 2つのスパンを覆うスパンを作る
    pub fn join(self, other: Span) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// 識別子
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
