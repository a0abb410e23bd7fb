//! 解析パイプラインのメイン処理モジュール
//!
//! このモジュールは、外部パーサーが出力したASTの読み込みから意味解析、
//! 診断の表示までを管理します。

use crate::analyzer::check_program;
use crate::ast::Program;
use crate::error::{ErrorCollector, ShadeError, ShadeResult};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use colored::Colorize;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// 解析状態を管理する構造体
pub struct CompilationState {
    pub ast_file: String,
    pub program: Program,
    pub files: SimpleFiles<String, String>,
    pub file_id: usize,
    pub error_collector: ErrorCollector,
    /// スパンが指すソースコードが登録されているか
    has_source: bool,
}

impl CompilationState {
    /// ASTのJSONファイル（と任意で元のソースファイル）から解析状態を作成
    pub fn new<P: AsRef<Path>>(ast_file: P, source_file: Option<&Path>) -> ShadeResult<Self> {
        let ast_name = ast_file.as_ref().display().to_string();
        let json = fs::read_to_string(ast_file.as_ref())
            .map_err(|e| ShadeError::Io(format!("Failed to read AST file {}: {}", ast_name, e)))?;

        let source = match source_file {
            Some(path) => Some((
                path.display().to_string(),
                fs::read_to_string(path)
                    .map_err(|e| ShadeError::Io(format!("Failed to read source file: {}", e)))?,
            )),
            None => None,
        };

        Self::from_json(&ast_name, &json, source)
    }

    /// JSON文字列から解析状態を作成（テスト用）
    pub fn from_json(ast_name: &str, json: &str, source: Option<(String, String)>) -> ShadeResult<Self> {
        let program: Program = serde_json::from_str(json)?;
        debug!("loaded {} top-level declarations from {}", program.decls.len(), ast_name);

        let mut files = SimpleFiles::new();
        let has_source = source.is_some();
        let file_id = match source {
            Some((name, text)) => files.add(name, text),
            None => files.add(ast_name.to_string(), String::new()),
        };

        Ok(Self {
            ast_file: ast_name.to_string(),
            program,
            files,
            file_id,
            error_collector: ErrorCollector::for_file(file_id),
            has_source,
        })
    }

    /// 意味解析を実行し、診断がなければ`true`を返す
    pub fn check(&mut self) -> bool {
        info!("checking {}", self.ast_file);

        if let Err(e) = check_program(&mut self.program, &mut self.error_collector) {
            self.error_collector.add_error(ShadeError::Internal(e));
        }
        !self.has_errors()
    }

    /// 診断情報を報告
    pub fn report_diagnostics(&self, color: ColorChoice) -> ShadeResult<()> {
        if !self.has_source {
            for error in self.error_collector.errors() {
                eprintln!("{}: {}", "error".red().bold(), error.error);
                if let ShadeError::Semantic(semantic) = &error.error {
                    let span = semantic.span();
                    eprintln!("  {} {}:{}..{}", "-->".blue().bold(), self.ast_file, span.start, span.end);
                }
            }
            return Ok(());
        }

        let writer = StandardStream::stderr(color);
        let config = codespan_reporting::term::Config::default();
        for error in self.error_collector.errors() {
            let diagnostic = error.to_diagnostic();
            codespan_reporting::term::emit(&mut writer.lock(), &config, &self.files, &diagnostic)
                .map_err(|e| ShadeError::Io(format!("Failed to emit diagnostic: {}", e)))?;
        }
        Ok(())
    }

    /// エラーがあるかチェック
    pub fn has_errors(&self) -> bool {
        self.error_collector.has_errors()
    }

    /// エラー数を取得
    pub fn error_count(&self) -> usize {
        self.error_collector.error_count()
    }
}
