//! Type data extraction helpers.
//!
//! Convenience functions for pulling specific payloads out of `TypeData`
//! variants. Each takes a `TypeDatabase` and `TypeId` and returns the
//! relevant data if the type matches the expected variant.

use crate::db::TypeDatabase;
use crate::types::{
    ClassType, ClassTypeId, ClosureShapeId, IntrinsicKind, LiteralValue, TypeData, TypeId,
    TypeParamInfo,
};
use std::sync::Arc;

fn extract_type_data<T>(
    db: &dyn TypeDatabase,
    id: TypeId,
    extractor: impl Fn(&TypeData) -> Option<T>,
) -> Option<T> {
    db.lookup(id).as_ref().and_then(extractor)
}

/// Extract the class-reference id if this is a class type.
pub fn class_type_id(db: &dyn TypeDatabase, id: TypeId) -> Option<ClassTypeId> {
    extract_type_data(db, id, |data| match data {
        TypeData::Class(class_id) => Some(*class_id),
        _ => None,
    })
}

/// Resolve a class type to its declaration reference and arguments.
pub fn class_type_of(db: &dyn TypeDatabase, id: TypeId) -> Option<Arc<ClassType>> {
    class_type_id(db, id).map(|class_id| db.class_type(class_id))
}

/// Extract the closure-signature id if this is a structural closure type.
pub fn closure_shape_id(db: &dyn TypeDatabase, id: TypeId) -> Option<ClosureShapeId> {
    extract_type_data(db, id, |data| match data {
        TypeData::Closure(shape_id) => Some(*shape_id),
        _ => None,
    })
}

/// Extract the component type if this is an array type.
pub fn array_element_type(db: &dyn TypeDatabase, id: TypeId) -> Option<TypeId> {
    extract_type_data(db, id, |data| match data {
        TypeData::Array(component) => Some(*component),
        _ => None,
    })
}

/// Extract the intrinsic kind if this is an intrinsic type.
pub fn intrinsic_kind(db: &dyn TypeDatabase, id: TypeId) -> Option<IntrinsicKind> {
    extract_type_data(db, id, |data| match data {
        TypeData::Intrinsic(kind) => Some(*kind),
        _ => None,
    })
}

/// Extract the literal value if this is a literal-class type.
pub fn literal_class_value(db: &dyn TypeDatabase, id: TypeId) -> Option<LiteralValue> {
    extract_type_data(db, id, |data| match data {
        TypeData::LiteralClass(value) => Some(*value),
        _ => None,
    })
}

/// Extract the parameter info if this is a type-parameter reference.
pub fn type_param_info(db: &dyn TypeDatabase, id: TypeId) -> Option<TypeParamInfo> {
    extract_type_data(db, id, |data| match data {
        TypeData::TypeParameter(info) => Some(*info),
        _ => None,
    })
}

/// Check whether this is a literal-class type.
pub fn is_literal_class(db: &dyn TypeDatabase, id: TypeId) -> bool {
    literal_class_value(db, id).is_some()
}

/// Check whether this is a structural closure type.
pub fn is_closure_type(db: &dyn TypeDatabase, id: TypeId) -> bool {
    closure_shape_id(db, id).is_some()
}
