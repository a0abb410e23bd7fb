//! 型注釈の定義

use serde::{Deserialize, Serialize};

/// 宣言に書かれた型
///
/// 意味解析では [`crate::analyzer::TypeRegistry`] によって一意な型ハンドルへ解決される。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeSpec {
    Int,
    Float,
    Bool,
    Vec2,
    Vec3,
    Vec4,
    Void,
    /// 配列型（`float a[4]`）
    Array {
        elem: Box<TypeSpec>,
        size: Option<u32>,
    },
}

impl TypeSpec {
    pub fn array_of(elem: TypeSpec, size: Option<u32>) -> Self {
        TypeSpec::Array {
            elem: Box::new(elem),
            size,
        }
    }
}

/// 型修飾子
///
/// 修飾子は型付けには関与しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeQualifier {
    In,
    Out,
    Const,
    Uniform,
}

impl std::fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeSpec::Int => write!(f, "int"),
            TypeSpec::Float => write!(f, "float"),
            TypeSpec::Bool => write!(f, "bool"),
            TypeSpec::Vec2 => write!(f, "vec2"),
            TypeSpec::Vec3 => write!(f, "vec3"),
            TypeSpec::Vec4 => write!(f, "vec4"),
            TypeSpec::Void => write!(f, "void"),
            TypeSpec::Array { elem, size } => match size {
                Some(size) => write!(f, "{}[{}]", elem, size),
                None => write!(f, "{}[]", elem),
            },
        }
    }
}

impl std::fmt::Display for TypeQualifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeQualifier::In => write!(f, "in"),
            TypeQualifier::Out => write!(f, "out"),
            TypeQualifier::Const => write!(f, "const"),
            TypeQualifier::Uniform => write!(f, "uniform"),
        }
    }
}
