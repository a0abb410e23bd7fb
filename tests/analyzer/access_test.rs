//! 配列アクセスとスウィズルのセマンティック解析テスト

use super::*;
use shadelang::ast::build::*;
use shadelang::Type;
use test_case::test_case;

#[test_case(TypeSpec::Vec2, "x", Type::FLOAT ; "vec2 single")]
#[test_case(TypeSpec::Vec2, "yx", Type::VEC2 ; "vec2 pair")]
#[test_case(TypeSpec::Vec3, "xyz", Type::VEC3 ; "vec3 triple")]
#[test_case(TypeSpec::Vec3, "zzzz", Type::VEC4 ; "vec3 widened")]
#[test_case(TypeSpec::Vec4, "wzyx", Type::VEC4 ; "vec4 reversed")]
fn test_valid_swizzle(base: TypeSpec, name: &str, expected: Type) {
    let program = assert_analysis_success(vec![
        global("v", base),
        global_init("t", TypeSpec::Bool, equality(EqualityOp::Eq, field(var("v"), name), field(var("v"), name))),
    ]);

    match &init_of(&program, 1).kind {
        ExprKind::Equality { left, .. } => assert_eq!(left.ty(), Some(expected)),
        other => panic!("unexpected expression: {:?}", other),
    }
}

#[test]
fn test_single_component_of_vec2_is_float() {
    // vec2 v; float f = v.x;
    let program = assert_analysis_success(vec![
        global("v", TypeSpec::Vec2),
        global_init("f", TypeSpec::Float, field(var("v"), "x")),
    ]);
    assert_eq!(init_of(&program, 1).ty(), Some(Type::FLOAT));
}

#[test_case(TypeSpec::Vec2, "z" ; "vec2 z")]
#[test_case(TypeSpec::Vec2, "xw" ; "vec2 w")]
#[test_case(TypeSpec::Vec3, "xyzw" ; "vec3 w")]
fn test_swizzle_out_of_bound(base: TypeSpec, name: &str) {
    let program = assert_single_error(
        vec![global("v", base), global_init("f", TypeSpec::Float, field(var("v"), name))],
        |e| matches!(e, SemanticError::SwizzleOutOfBound { .. }),
    );
    assert_eq!(init_of(&program, 1).ty(), Some(Type::ERROR));
}

#[test_case(TypeSpec::Vec2 ; "vec2")]
#[test_case(TypeSpec::Vec4 ; "vec4")]
fn test_oversized_swizzle(base: TypeSpec) {
    assert_single_error(
        vec![global("v", base), global_init("f", TypeSpec::Float, field(var("v"), "xyxyxy"))],
        |e| matches!(e, SemanticError::OversizedVector { field, .. } if field == "xyxyxy"),
    );
}

#[test_case("rgba" ; "color letters")]
#[test_case("x1" ; "digit")]
#[test_case("X" ; "uppercase")]
fn test_invalid_swizzle_letters(name: &str) {
    assert_single_error(
        vec![global("v", TypeSpec::Vec4), global_init("f", TypeSpec::Float, field(var("v"), name))],
        |e| matches!(e, SemanticError::InvalidSwizzle { .. }),
    );
}

#[test]
fn test_swizzle_on_scalar() {
    // float s; float f = s.x;
    assert_single_error(
        vec![global("s", TypeSpec::Float), global_init("f", TypeSpec::Float, field(var("s"), "x"))],
        |e| matches!(e, SemanticError::InaccessibleSwizzle { ty, .. } if ty == "float"),
    );
}

#[test]
fn test_swizzle_on_undeclared_base() {
    assert_single_error(vec![global_init("f", TypeSpec::Float, field(var("v"), "x"))], |e| {
        matches!(e, SemanticError::IdentifierNotDeclared { .. })
    });
}

#[test]
fn test_array_access_adopts_element_type() {
    // float a[4]; int i; float f = a[i];
    let program = assert_analysis_success(vec![
        global("a", TypeSpec::array_of(TypeSpec::Float, Some(4))),
        global("i", TypeSpec::Int),
        global_init("f", TypeSpec::Float, index(var("a"), var("i"))),
    ]);

    assert_eq!(init_of(&program, 2).ty(), Some(Type::FLOAT));
    match &init_of(&program, 2).kind {
        ExprKind::ArrayAccess { subscript, .. } => assert_eq!(subscript.ty(), Some(Type::INT)),
        other => panic!("unexpected expression: {:?}", other),
    }
}

#[test]
fn test_vector_array_swizzle() {
    // vec4 colors[2]; vec2 uv = colors[0].xy;
    let program = assert_analysis_success(vec![
        global("colors", TypeSpec::array_of(TypeSpec::Vec4, Some(2))),
        global_init("uv", TypeSpec::Vec2, field(index(var("colors"), int(0)), "xy")),
    ]);
    assert_eq!(init_of(&program, 1).ty(), Some(Type::VEC2));
}

#[test]
fn test_indexing_a_scalar() {
    // int i; int j = i[0];
    assert_single_error(
        vec![global("i", TypeSpec::Int), global_init("j", TypeSpec::Int, index(var("i"), int(0)))],
        |e| matches!(e, SemanticError::NotAnArray { name, .. } if name == "i"),
    );
}

#[test]
fn test_indexing_undeclared_name() {
    // 未宣言の報告だけで、配列でないという報告はしない
    assert_single_error(vec![global_init("j", TypeSpec::Int, index(var("nope"), int(0)))], |e| {
        matches!(e, SemanticError::IdentifierNotDeclared { name, .. } if name == "nope")
    });
}
