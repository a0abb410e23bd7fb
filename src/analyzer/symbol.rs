//! シンボルテーブルおよびスコープスタック

use indexmap::IndexMap;
use log::trace;

use super::types::Type;
use crate::ast::Span;

/// シンボル情報
///
/// 宣言ノードは所有せず、型付けに必要な情報だけを写し取る。
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// 宣言の位置（重複宣言の報告用）
    pub span: Span,
}

/// シンボルの種類
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolKind {
    Var { ty: Type },
    Function { return_type: Type, formals: Vec<Type> },
}

impl Symbol {
    pub fn variable(name: impl Into<String>, ty: Type, span: Span) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Var { ty },
            span,
        }
    }

    pub fn function(name: impl Into<String>, return_type: Type, formals: Vec<Type>, span: Span) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Function {
                return_type,
                formals,
            },
            span,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, SymbolKind::Function { .. })
    }
}

/// 1つのレキシカルスコープに対応する表
#[derive(Debug, Default)]
pub struct ScopedTable {
    symbols: IndexMap<String, Symbol>,
}

impl ScopedTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// シンボルを登録し、同名の既存シンボルがあれば置き換えてそれを返す
    pub fn insert(&mut self, symbol: Symbol) -> Option<Symbol> {
        self.symbols.insert(symbol.name.clone(), symbol)
    }

    pub fn find(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// 登録順にシンボルを列挙
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }
}

/// ネストの深さで添字付けされたスコープの並び
///
/// 添字0はグローバルスコープで、常に存在する。
#[derive(Debug)]
pub struct ScopeStack {
    tables: Vec<ScopedTable>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self {
            tables: vec![ScopedTable::new()],
        }
    }
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self) {
        self.tables.push(ScopedTable::new());
    }

    /// 最内スコープを破棄する。グローバルスコープは破棄しない。
    pub fn pop(&mut self) {
        if self.tables.len() > 1 {
            self.tables.pop();
        }
    }

    /// 現在のスコープ数（グローバルのみなら1）
    pub fn depth(&self) -> usize {
        self.tables.len()
    }

    /// 現在のスコープに登録し、置き換えたシンボルを返す
    pub fn insert(&mut self, symbol: Symbol) -> Option<Symbol> {
        self.current_mut().insert(symbol)
    }

    /// 現在のスコープだけを検索
    pub fn find_local(&self, name: &str) -> Option<&Symbol> {
        self.current().find(name)
    }

    /// 内側から外側へ検索し、最初に見つかったシンボルを返す
    pub fn find(&self, name: &str) -> Option<&Symbol> {
        let found = self.tables.iter().rev().find_map(|table| table.find(name));
        trace!("lookup `{}`: {}", name, if found.is_some() { "found" } else { "missing" });
        found
    }

    /// 内側から外側へ検索し、最初に見つかった変数シンボルを返す
    pub fn find_variable(&self, name: &str) -> Option<&Symbol> {
        self.tables
            .iter()
            .rev()
            .filter_map(|table| table.find(name))
            .find(|symbol| !symbol.is_function())
    }

    pub fn current(&self) -> &ScopedTable {
        // tablesはグローバルスコープを必ず含む
        &self.tables[self.tables.len() - 1]
    }

    fn current_mut(&mut self) -> &mut ScopedTable {
        let last = self.tables.len() - 1;
        &mut self.tables[last]
    }
}
