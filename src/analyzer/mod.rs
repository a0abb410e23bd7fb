//! セマンティック解析モジュール
//!
//! このモジュールは名前解決、型チェック、スウィズル検証を行います。

mod checker;
mod reporter;
mod symbol;
mod types;

// 公開API
pub use checker::{check_program, SemanticChecker};
pub use reporter::Reporter;
pub use symbol::{ScopeStack, ScopedTable, Symbol, SymbolKind};
pub use types::{Type, TypeRegistry};
