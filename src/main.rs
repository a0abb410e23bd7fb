use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codespan_reporting::term::termcolor::ColorChoice;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use shadelang::CompilationState;

#[derive(Parser)]
#[command(name = "shadelang")]
#[command(author, version, about = "Semantic checker for the Shade language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a parsed Shade program (AST as JSON) for semantic errors
    Check {
        /// The AST file produced by the parser
        input: PathBuf,

        /// Original source file, used to render diagnostics with context
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Dump the AST to stdout
        #[arg(long)]
        dump_ast: bool,

        /// Disable colored diagnostics
        #[arg(long)]
        no_color: bool,
    },

    /// Pretty-print a parsed Shade program
    Dump {
        /// The AST file produced by the parser
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger_builder(cli.verbose).init();

    let result = match cli.command {
        Commands::Check {
            input,
            source,
            dump_ast,
            no_color,
        } => check(input, source, dump_ast, no_color, cli.verbose),
        Commands::Dump { input } => dump(input),
    };

    match result {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// `RUST_LOG`を既定値`info`で読み、`--verbose`ならdebugまで出す
fn logger_builder(verbose: bool) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder
}

/// 意味解析を実行し、診断がなければ`true`を返す
fn check(input: PathBuf, source: Option<PathBuf>, dump_ast: bool, no_color: bool, verbose: bool) -> Result<bool> {
    if verbose {
        println!("{}: Checking {:?}", "info".blue().bold(), input);
    }

    let mut state = CompilationState::new(&input, source.as_deref())
        .with_context(|| format!("Failed to load {:?}", input))?;

    if dump_ast {
        println!("{}", "=== AST ===".blue().bold());
        println!("{}", serde_json::to_string_pretty(&state.program)?);
        println!();
    }

    let ok = state.check();
    let color = if no_color { ColorChoice::Never } else { ColorChoice::Auto };
    state.report_diagnostics(color)?;

    if ok {
        println!("{}: {:?} has no semantic errors", "success".green().bold(), input);
    } else {
        eprintln!(
            "\n{}: {} error(s) found",
            "check failed".red().bold(),
            state.error_count()
        );
    }
    Ok(ok)
}

fn dump(input: PathBuf) -> Result<bool> {
    let json = fs::read_to_string(&input).with_context(|| format!("Failed to read AST file: {:?}", input))?;
    let program: shadelang::Program = serde_json::from_str(&json).context("Failed to decode AST")?;

    for decl in &program.decls {
        match decl {
            shadelang::Decl::Var(var) => match &var.init {
                Some(init) => println!("{} {} = {};", var.ty, var.name, init),
                None => println!("{} {};", var.ty, var.name),
            },
            shadelang::Decl::Fn(func) => {
                let formals: Vec<String> = func
                    .formals
                    .iter()
                    .map(|formal| format!("{} {}", formal.ty, formal.name))
                    .collect();
                println!("{} {}({}) {{ ... }}", func.return_type, func.name, formals.join(", "));
            }
        }
    }
    Ok(true)
}
