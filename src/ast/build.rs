//! AST構築用のヘルパー
//!
//! 外部パーサーの代わりにテストや埋め込み先からASTを組み立てるための関数群。
//! 位置情報を持たないノードには[`Span::dummy`]を使う。

use super::*;

fn ident(name: &str) -> Identifier {
    Identifier::new(name, Span::dummy())
}

pub fn int(value: i64) -> Expr {
    Expr::new(ExprKind::IntConstant(value), Span::dummy())
}

pub fn float(value: f64) -> Expr {
    Expr::new(ExprKind::FloatConstant(value), Span::dummy())
}

pub fn boolean(value: bool) -> Expr {
    Expr::new(ExprKind::BoolConstant(value), Span::dummy())
}

pub fn var(name: &str) -> Expr {
    Expr::new(ExprKind::Var(ident(name)), Span::dummy())
}

pub fn assign(op: AssignOp, left: Expr, right: Expr) -> Expr {
    let span = left.span.join(right.span);
    Expr::new(
        ExprKind::Assign {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}

pub fn arith(op: ArithmeticOp, left: Expr, right: Expr) -> Expr {
    let span = left.span.join(right.span);
    Expr::new(
        ExprKind::Arithmetic {
            op,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        },
        span,
    )
}

/// 前置の単項演算（`-a`、`++a`）
pub fn prefix(op: ArithmeticOp, operand: Expr) -> Expr {
    let span = operand.span;
    Expr::new(
        ExprKind::Arithmetic {
            op,
            left: None,
            right: Some(Box::new(operand)),
        },
        span,
    )
}

/// 後置の単項演算（`a++`）
pub fn postfix(op: ArithmeticOp, operand: Expr) -> Expr {
    let span = operand.span;
    Expr::new(
        ExprKind::Arithmetic {
            op,
            left: Some(Box::new(operand)),
            right: None,
        },
        span,
    )
}

pub fn relational(op: RelationalOp, left: Expr, right: Expr) -> Expr {
    let span = left.span.join(right.span);
    Expr::new(
        ExprKind::Relational {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}

pub fn equality(op: EqualityOp, left: Expr, right: Expr) -> Expr {
    let span = left.span.join(right.span);
    Expr::new(
        ExprKind::Equality {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}

pub fn logical(op: LogicalOp, left: Expr, right: Expr) -> Expr {
    let span = left.span.join(right.span);
    Expr::new(
        ExprKind::Logical {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}

pub fn conditional(cond: Expr, then_expr: Expr, else_expr: Expr) -> Expr {
    let span = cond.span.join(else_expr.span);
    Expr::new(
        ExprKind::Conditional {
            cond: Box::new(cond),
            then_expr: Box::new(then_expr),
            else_expr: Box::new(else_expr),
        },
        span,
    )
}

pub fn index(base: Expr, subscript: Expr) -> Expr {
    let span = base.span.join(subscript.span);
    Expr::new(
        ExprKind::ArrayAccess {
            base: Box::new(base),
            subscript: Box::new(subscript),
        },
        span,
    )
}

pub fn field(base: Expr, name: &str) -> Expr {
    let span = base.span;
    Expr::new(
        ExprKind::FieldAccess {
            base: Some(Box::new(base)),
            field: ident(name),
        },
        span,
    )
}

pub fn call(callee: &str, args: Vec<Expr>) -> Expr {
    Expr::new(
        ExprKind::Call {
            base: None,
            callee: ident(callee),
            args,
        },
        Span::dummy(),
    )
}

pub fn var_decl(name: &str, ty: TypeSpec, init: Option<Expr>) -> VarDecl {
    VarDecl {
        name: ident(name),
        ty,
        qualifier: None,
        init,
        span: Span::dummy(),
    }
}

pub fn fn_decl(name: &str, return_type: TypeSpec, formals: Vec<VarDecl>, body: Option<Stmt>) -> FnDecl {
    FnDecl {
        name: ident(name),
        return_type,
        return_qualifier: None,
        formals,
        body,
        span: Span::dummy(),
    }
}

pub fn block(decls: Vec<VarDecl>, stmts: Vec<Stmt>) -> Stmt {
    Stmt::Block(StmtBlock {
        decls,
        stmts,
        span: Span::dummy(),
    })
}

pub fn expr_stmt(expr: Expr) -> Stmt {
    Stmt::Expr(expr)
}

pub fn return_stmt(value: Option<Expr>) -> Stmt {
    Stmt::Return(ReturnStmt {
        value,
        span: Span::dummy(),
    })
}

pub fn if_stmt(cond: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Stmt {
    Stmt::If(IfStmt {
        cond,
        then_branch: Box::new(then_branch),
        else_branch: else_branch.map(Box::new),
        span: Span::dummy(),
    })
}

pub fn while_stmt(cond: Expr, body: Stmt) -> Stmt {
    Stmt::While(WhileStmt {
        cond,
        body: Box::new(body),
        span: Span::dummy(),
    })
}

pub fn program(decls: Vec<Decl>) -> Program {
    Program::new(decls)
}
