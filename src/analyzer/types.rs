//! 型レジストリ
//!
//! 型は[`TypeRegistry`]が払い出すハンドルで表現する。同じ型には常に同じハンドルが
//! 返されるため、型の等価性はハンドルの比較（同一性）だけで判定できる。

use std::collections::HashMap;

use crate::ast::TypeSpec;

/// インターン済みの型ハンドル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Type(u32);

impl Type {
    pub const INT: Type = Type(0);
    pub const FLOAT: Type = Type(1);
    pub const BOOL: Type = Type(2);
    pub const VEC2: Type = Type(3);
    pub const VEC3: Type = Type(4);
    pub const VEC4: Type = Type(5);
    pub const VOID: Type = Type(6);
    /// 型計算が既に失敗したことを表す番兵型
    pub const ERROR: Type = Type(7);

    pub fn is_error(self) -> bool {
        self == Type::ERROR
    }

    pub fn is_bool(self) -> bool {
        self == Type::BOOL
    }

    pub fn is_vector(self) -> bool {
        matches!(self, Type::VEC2 | Type::VEC3 | Type::VEC4)
    }

    /// ベクトル型の要素数
    pub fn vector_width(self) -> Option<usize> {
        match self {
            Type::VEC2 => Some(2),
            Type::VEC3 => Some(3),
            Type::VEC4 => Some(4),
            _ => None,
        }
    }

    /// 幅に対応するベクトル型（幅1はスカラーの`float`）
    pub fn vector_of_width(width: usize) -> Option<Type> {
        match width {
            1 => Some(Type::FLOAT),
            2 => Some(Type::VEC2),
            3 => Some(Type::VEC3),
            4 => Some(Type::VEC4),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeData {
    Int,
    Float,
    Bool,
    Vec2,
    Vec3,
    Vec4,
    Void,
    Error,
    Array(Type),
}

/// 翻訳単位ごとの型レジストリ
#[derive(Debug)]
pub struct TypeRegistry {
    types: Vec<TypeData>,
    arrays: HashMap<Type, Type>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        // 並びは`Type`の定数と一致させること
        let types = vec![
            TypeData::Int,
            TypeData::Float,
            TypeData::Bool,
            TypeData::Vec2,
            TypeData::Vec3,
            TypeData::Vec4,
            TypeData::Void,
            TypeData::Error,
        ];
        Self {
            types,
            arrays: HashMap::new(),
        }
    }
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 要素型に対する配列型を取得（なければ登録）
    ///
    /// 配列の長さは型の同一性に含めない。
    pub fn array_of(&mut self, elem: Type) -> Type {
        if let Some(&array) = self.arrays.get(&elem) {
            return array;
        }
        let array = Type(self.types.len() as u32);
        self.types.push(TypeData::Array(elem));
        self.arrays.insert(elem, array);
        array
    }

    /// 宣言に書かれた型を型ハンドルに解決
    pub fn resolve(&mut self, spec: &TypeSpec) -> Type {
        match spec {
            TypeSpec::Int => Type::INT,
            TypeSpec::Float => Type::FLOAT,
            TypeSpec::Bool => Type::BOOL,
            TypeSpec::Vec2 => Type::VEC2,
            TypeSpec::Vec3 => Type::VEC3,
            TypeSpec::Vec4 => Type::VEC4,
            TypeSpec::Void => Type::VOID,
            TypeSpec::Array { elem, .. } => {
                let elem = self.resolve(elem);
                self.array_of(elem)
            }
        }
    }

    /// 配列型なら要素型を返す
    pub fn element_of(&self, ty: Type) -> Option<Type> {
        match self.data(ty) {
            TypeData::Array(elem) => Some(elem),
            _ => None,
        }
    }

    pub fn is_array(&self, ty: Type) -> bool {
        self.element_of(ty).is_some()
    }

    /// 診断メッセージ用の型名
    pub fn name(&self, ty: Type) -> String {
        match self.data(ty) {
            TypeData::Int => "int".to_string(),
            TypeData::Float => "float".to_string(),
            TypeData::Bool => "bool".to_string(),
            TypeData::Vec2 => "vec2".to_string(),
            TypeData::Vec3 => "vec3".to_string(),
            TypeData::Vec4 => "vec4".to_string(),
            TypeData::Void => "void".to_string(),
            TypeData::Error => "error".to_string(),
            TypeData::Array(elem) => format!("{}[]", self.name(elem)),
        }
    }

    /// 登録済みの型の数
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn data(&self, ty: Type) -> TypeData {
        // ハンドルはこのレジストリからしか作られない
        self.types
            .get(ty.0 as usize)
            .copied()
            .unwrap_or(TypeData::Error)
    }
}
