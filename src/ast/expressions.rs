//! 式の定義

use serde::{Deserialize, Serialize};

use super::{Identifier, Span};
use crate::analyzer::Type;

/// 式
///
/// `ty`は意味解析が書き込む解決済みの型。解析前は`None`で、シリアライズされない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    #[serde(skip)]
    pub ty: Option<Type>,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self {
            kind,
            span,
            ty: None,
        }
    }

    /// 解決済みの型（未解析なら`None`）
    pub fn ty(&self) -> Option<Type> {
        self.ty
    }
}

/// 式の種類
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExprKind {
    IntConstant(i64),
    FloatConstant(f64),
    BoolConstant(bool),
    Var(Identifier),
    Assign {
        op: AssignOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// 単項形式（`-a`、`a++`）では片側だけが存在する
    Arithmetic {
        op: ArithmeticOp,
        #[serde(default)]
        left: Option<Box<Expr>>,
        #[serde(default)]
        right: Option<Box<Expr>>,
    },
    Relational {
        op: RelationalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Equality {
        op: EqualityOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Conditional {
        cond: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },
    ArrayAccess {
        base: Box<Expr>,
        subscript: Box<Expr>,
    },
    /// スウィズル（`v.xy`）
    FieldAccess {
        #[serde(default)]
        base: Option<Box<Expr>>,
        field: Identifier,
    },
    Call {
        #[serde(default)]
        base: Option<Box<Expr>>,
        callee: Identifier,
        args: Vec<Expr>,
    },
}

impl ExprKind {
    /// 内部エラー報告用のノード名
    pub fn name(&self) -> &'static str {
        match self {
            ExprKind::IntConstant(_) => "IntConstant",
            ExprKind::FloatConstant(_) => "FloatConstant",
            ExprKind::BoolConstant(_) => "BoolConstant",
            ExprKind::Var(_) => "VarExpr",
            ExprKind::Assign { .. } => "AssignExpr",
            ExprKind::Arithmetic { .. } => "ArithmeticExpr",
            ExprKind::Relational { .. } => "RelationalExpr",
            ExprKind::Equality { .. } => "EqualityExpr",
            ExprKind::Logical { .. } => "LogicalExpr",
            ExprKind::Conditional { .. } => "ConditionalExpr",
            ExprKind::ArrayAccess { .. } => "ArrayAccess",
            ExprKind::FieldAccess { .. } => "FieldAccess",
            ExprKind::Call { .. } => "Call",
        }
    }
}

/// 代入演算子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
}

impl AssignOp {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubAssign => "-=",
            AssignOp::MulAssign => "*=",
            AssignOp::DivAssign => "/=",
        }
    }

    /// `=`で始まらない複合代入かどうか
    pub fn is_compound(self) -> bool {
        !self.as_str().starts_with('=')
    }
}

/// 算術演算子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
    Increment,
    Decrement,
}

impl ArithmeticOp {
    pub fn as_str(self) -> &'static str {
        match self {
            ArithmeticOp::Add => "+",
            ArithmeticOp::Sub => "-",
            ArithmeticOp::Mul => "*",
            ArithmeticOp::Div => "/",
            ArithmeticOp::Increment => "++",
            ArithmeticOp::Decrement => "--",
        }
    }
}

/// 比較演算子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationalOp {
    Lt,
    Gt,
    Le,
    Ge,
}

impl RelationalOp {
    pub fn as_str(self) -> &'static str {
        match self {
            RelationalOp::Lt => "<",
            RelationalOp::Gt => ">",
            RelationalOp::Le => "<=",
            RelationalOp::Ge => ">=",
        }
    }
}

/// 等価演算子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EqualityOp {
    Eq,
    Ne,
}

impl EqualityOp {
    pub fn as_str(self) -> &'static str {
        match self {
            EqualityOp::Eq => "==",
            EqualityOp::Ne => "!=",
        }
    }
}

/// 論理演算子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn as_str(self) -> &'static str {
        match self {
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ExprKind::IntConstant(value) => write!(f, "{}", value),
            ExprKind::FloatConstant(value) => write!(f, "{}", value),
            ExprKind::BoolConstant(value) => write!(f, "{}", value),
            ExprKind::Var(id) => write!(f, "{}", id),
            ExprKind::Assign { op, left, right } => {
                write!(f, "{} {} {}", left, op.as_str(), right)
            }
            ExprKind::Arithmetic { op, left, right } => match (left, right) {
                (Some(left), Some(right)) => write!(f, "({} {} {})", left, op.as_str(), right),
                (Some(left), None) => write!(f, "({}{})", left, op.as_str()),
                (None, Some(right)) => write!(f, "({}{})", op.as_str(), right),
                (None, None) => write!(f, "{}", op.as_str()),
            },
            ExprKind::Relational { op, left, right } => {
                write!(f, "({} {} {})", left, op.as_str(), right)
            }
            ExprKind::Equality { op, left, right } => {
                write!(f, "({} {} {})", left, op.as_str(), right)
            }
            ExprKind::Logical { op, left, right } => {
                write!(f, "({} {} {})", left, op.as_str(), right)
            }
            ExprKind::Conditional {
                cond,
                then_expr,
                else_expr,
            } => write!(f, "({} ? {} : {})", cond, then_expr, else_expr),
            ExprKind::ArrayAccess { base, subscript } => write!(f, "{}[{}]", base, subscript),
            ExprKind::FieldAccess { base, field } => match base {
                Some(base) => write!(f, "{}.{}", base, field),
                None => write!(f, "{}", field),
            },
            ExprKind::Call { base, callee, .. } => match base {
                Some(base) => write!(f, "{}.{}(...)", base, callee),
                None => write!(f, "{}(...)", callee),
            },
        }
    }
}
