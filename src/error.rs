//! 統一的なエラーハンドリングモジュール
//!
//! このモジュールは、Shade意味解析器全体で使用されるエラー型と
//! エラー報告システムを提供します。
//!
//! エラーは2種類に分かれます。
//! - [`SemanticError`]: 利用者のプログラムに対する診断。報告後も解析は続行する。
//! - [`InternalError`]: ASTが想定する文法に従っていない場合の契約違反。解析を中断する。

use crate::ast::Span;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

/// Shadeの統一エラー型
#[derive(Error, Debug, Clone)]
pub enum ShadeError {
    /// 意味解析の診断
    #[error("{0}")]
    Semantic(#[from] SemanticError),

    /// 解析器の内部エラー
    #[error("内部エラー: {0}")]
    Internal(#[from] InternalError),

    /// ASTの読み込みエラー
    #[error("ASTの読み込みエラー: {0}")]
    Ast(String),

    /// ファイルI/Oエラー
    #[error("ファイル操作エラー: {0}")]
    Io(String),

    /// その他のエラー
    #[error("{0}")]
    Other(String),
}

/// 識別子を探していた文脈
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupReason {
    Variable,
    Function,
}

impl std::fmt::Display for LookupReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupReason::Variable => write!(f, "変数"),
            LookupReason::Function => write!(f, "関数"),
        }
    }
}

/// 意味解析の診断
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticError {
    #[error("'{name}' の宣言が既存の宣言と衝突しています")]
    DeclConflict { name: String, span: Span, previous: Span },

    #[error("'{name}' は {expected} 型ですが、{found} 型の値で初期化されています")]
    InvalidInitialization {
        name: String,
        expected: String,
        found: String,
        span: Span,
    },

    #[error("演算子 '{op}' に互換性のないオペランドです: {ty}")]
    IncompatibleOperand { op: String, ty: String, span: Span },

    #[error("演算子 '{op}' に互換性のないオペランドです: {left} {op} {right}")]
    IncompatibleOperands {
        op: String,
        left: String,
        right: String,
        span: Span,
    },

    #[error("{reason} '{name}' は宣言されていません")]
    IdentifierNotDeclared {
        name: String,
        reason: LookupReason,
        span: Span,
    },

    #[error("'{name}' は配列ではありません")]
    NotAnArray { name: String, span: Span },

    #[error("'{name}' は関数ではありません")]
    NotAFunction { name: String, span: Span },

    #[error("関数 '{name}' の引数が足りません: {expected}個を期待しましたが、{found}個しかありません")]
    TooFewArguments {
        name: String,
        expected: usize,
        found: usize,
        span: Span,
    },

    #[error("関数 '{name}' の引数が多すぎます: {expected}個を期待しましたが、{found}個あります")]
    TooManyArguments {
        name: String,
        expected: usize,
        found: usize,
        span: Span,
    },

    #[error("関数 '{name}' の第{index}引数の型が一致しません: {expected}を期待しましたが、{found}が渡されました")]
    FormalTypeMismatch {
        name: String,
        index: usize,
        expected: String,
        found: String,
        span: Span,
    },

    #[error("{ty} 型の値にはスウィズル '{field}' を適用できません")]
    InaccessibleSwizzle { field: String, ty: String, span: Span },

    #[error("不正なスウィズル '{field}' です")]
    InvalidSwizzle { field: String, span: Span },

    #[error("スウィズル '{field}' は4要素を超えるベクトルを作ります")]
    OversizedVector { field: String, span: Span },

    #[error("スウィズル '{field}' が {ty} 型の範囲外の要素を参照しています")]
    SwizzleOutOfBound { field: String, ty: String, span: Span },

    #[error("条件式は bool 型でなければなりませんが、{ty} 型です")]
    TestNotBoolean { ty: String, span: Span },

    #[error("条件演算子の分岐の型が一致しません: {then_ty} と {else_ty}")]
    ConditionalMismatch {
        then_ty: String,
        else_ty: String,
        span: Span,
    },

    #[error("ループの外で break は使えません")]
    BreakOutsideLoop { span: Span },
}

impl SemanticError {
    pub fn span(&self) -> Span {
        match self {
            SemanticError::DeclConflict { span, .. }
            | SemanticError::InvalidInitialization { span, .. }
            | SemanticError::IncompatibleOperand { span, .. }
            | SemanticError::IncompatibleOperands { span, .. }
            | SemanticError::IdentifierNotDeclared { span, .. }
            | SemanticError::NotAnArray { span, .. }
            | SemanticError::NotAFunction { span, .. }
            | SemanticError::TooFewArguments { span, .. }
            | SemanticError::TooManyArguments { span, .. }
            | SemanticError::FormalTypeMismatch { span, .. }
            | SemanticError::InaccessibleSwizzle { span, .. }
            | SemanticError::InvalidSwizzle { span, .. }
            | SemanticError::OversizedVector { span, .. }
            | SemanticError::SwizzleOutOfBound { span, .. }
            | SemanticError::TestNotBoolean { span, .. }
            | SemanticError::ConditionalMismatch { span, .. }
            | SemanticError::BreakOutsideLoop { span } => *span,
        }
    }

    /// ラベルに添える短い説明
    fn label_message(&self) -> &'static str {
        match self {
            SemanticError::DeclConflict { .. } => "重複した定義",
            SemanticError::InvalidInitialization { .. } => "初期化子の型が違います",
            SemanticError::IncompatibleOperand { .. }
            | SemanticError::IncompatibleOperands { .. } => "この演算は型が合いません",
            SemanticError::IdentifierNotDeclared { .. } => "この名前は定義されていません",
            SemanticError::NotAnArray { .. } => "添字アクセスできません",
            SemanticError::NotAFunction { .. } => "呼び出せません",
            SemanticError::TooFewArguments { .. } | SemanticError::TooManyArguments { .. } => {
                "引数の数が一致しません"
            }
            SemanticError::FormalTypeMismatch { .. } => "この引数の型が違います",
            SemanticError::InaccessibleSwizzle { .. } => "ベクトル型ではありません",
            SemanticError::InvalidSwizzle { .. } => "x, y, z, w 以外の文字があります",
            SemanticError::OversizedVector { .. } => "4文字までです",
            SemanticError::SwizzleOutOfBound { .. } => "範囲外の要素です",
            SemanticError::TestNotBoolean { .. } => "bool 型ではありません",
            SemanticError::ConditionalMismatch { .. } => "分岐の型が違います",
            SemanticError::BreakOutsideLoop { .. } => "ループの外です",
        }
    }
}

/// 内部エラー（ASTが文法上の前提を満たしていない）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InternalError {
    #[error("{node} に必要な子ノード {child} がありません")]
    MissingChild {
        node: &'static str,
        child: &'static str,
        span: Span,
    },

    #[error("{node} の {position} に {found} は置けません")]
    UnsupportedShape {
        node: &'static str,
        position: &'static str,
        found: String,
        span: Span,
    },
}

/// エラー情報とソースコードの位置情報を含むエラー
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    pub error: ShadeError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: ShadeError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// codespan-reportingのDiagnosticに変換
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let (message, labels) = match &self.error {
            ShadeError::Semantic(e) => {
                let span = e.span();
                let mut labels = vec![Label::primary(self.file_id, span.start..span.end)
                    .with_message(e.label_message())];
                if let SemanticError::DeclConflict { previous, .. } = e {
                    labels.push(
                        Label::secondary(self.file_id, previous.start..previous.end)
                            .with_message("以前の宣言"),
                    );
                }
                (e.to_string(), labels)
            }
            ShadeError::Internal(e) => {
                let span = match e {
                    InternalError::MissingChild { span, .. }
                    | InternalError::UnsupportedShape { span, .. } => *span,
                };
                (
                    format!("内部エラー: {}", e),
                    vec![Label::primary(self.file_id, span.start..span.end)],
                )
            }
            ShadeError::Ast(message) => (format!("ASTの読み込みエラー: {}", message), vec![]),
            ShadeError::Io(message) => (format!("ファイル操作エラー: {}", message), vec![]),
            ShadeError::Other(message) => (message.clone(), vec![]),
        };

        Diagnostic::error().with_message(message).with_labels(labels)
    }
}

/// 複数のエラーを蓄積するためのコレクター
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<DiagnosticError>,
    file_id: usize,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定ファイルの診断を集めるコレクター
    pub fn for_file(file_id: usize) -> Self {
        Self {
            errors: Vec::new(),
            file_id,
        }
    }

    /// エラーを追加
    pub fn add_error(&mut self, error: ShadeError) {
        self.errors.push(DiagnosticError::new(error, self.file_id));
    }

    /// エラーがあるかどうか
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// エラーの数
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// すべてのエラーを取得
    pub fn errors(&self) -> &[DiagnosticError] {
        &self.errors
    }

    /// 意味解析の診断だけを報告順に取得
    pub fn semantic_errors(&self) -> impl Iterator<Item = &SemanticError> {
        self.errors.iter().filter_map(|e| match &e.error {
            ShadeError::Semantic(semantic) => Some(semantic),
            _ => None,
        })
    }

    /// 最初のエラーを取得
    pub fn first_error(&self) -> Option<&DiagnosticError> {
        self.errors.first()
    }
}

/// Result型のエイリアス
pub type ShadeResult<T> = Result<T, ShadeError>;

/// 意味解析パスのResult型（内部エラーで中断する）
pub type CheckResult<T> = Result<T, InternalError>;

impl From<std::io::Error> for ShadeError {
    fn from(e: std::io::Error) -> Self {
        ShadeError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ShadeError {
    fn from(e: serde_json::Error) -> Self {
        ShadeError::Ast(e.to_string())
    }
}
