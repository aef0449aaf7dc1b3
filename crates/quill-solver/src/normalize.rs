//! Substitution-and-normalization of raw return types.
//!
//! `substitute_and_normalize` is the single step between a candidate's raw
//! return type and a mergeable result: apply the candidate's generic
//! bindings, validate the result is well formed, then apply spread
//! unwrapping (a call made through a list-spread receiver yields a list of
//! the per-element result). Pure: equal inputs always produce the equal
//! interned id.

use crate::db::TypeDatabase;
use crate::instantiate::{TypeSubstitution, instantiate_type};
use crate::types::{IntrinsicKind, LiteralValue, TypeData, TypeId};

/// Marker for a call made through one or more levels of list-spread
/// receivers (`xs*.run()`); each level wraps the result in one more list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpreadState {
    pub depth: u32,
}

impl SpreadState {
    /// A single spread level, the common case.
    pub fn single() -> Self {
        Self { depth: 1 }
    }

    pub fn nested(depth: u32) -> Self {
        Self { depth }
    }
}

/// Apply `subst` to `id`, check the result is well formed, then apply spread
/// unwrapping.
///
/// Returns `None` only when substitution produced a malformed type (a class
/// reference whose argument count contradicts its declaration). Callers
/// treat that as an internal invariant violation, not a recoverable
/// condition.
pub fn substitute_and_normalize(
    db: &dyn TypeDatabase,
    id: TypeId,
    subst: &TypeSubstitution,
    spread: Option<SpreadState>,
) -> Option<TypeId> {
    let substituted = instantiate_type(db, id, subst);
    if !is_well_formed(db, substituted) {
        return None;
    }
    let mut result = substituted;
    if let Some(spread) = spread {
        for _ in 0..spread.depth {
            result = db.list_of(result);
        }
    }
    Some(result)
}

fn is_well_formed(db: &dyn TypeDatabase, id: TypeId) -> bool {
    match db.lookup(id) {
        Some(TypeData::Class(class_id)) => {
            let class = db.class_type(class_id);
            if class.args.is_empty() {
                return true;
            }
            let def = db.class_def(class.def);
            class.args.len() == def.type_params.len()
                && class.args.iter().all(|&arg| is_well_formed(db, arg))
        }
        Some(TypeData::Array(component)) => is_well_formed(db, component),
        Some(TypeData::Wildcard(Some(bound))) => is_well_formed(db, bound),
        Some(TypeData::Closure(shape_id)) => {
            let shape = db.closure_shape(shape_id);
            shape.params.iter().all(|&param| is_well_formed(db, param))
                && is_well_formed(db, shape.return_type)
        }
        Some(_) => true,
        None => false,
    }
}

/// Box a primitive intrinsic to its `quill.lang` class; any other type is
/// returned unchanged.
pub fn box_primitive(db: &dyn TypeDatabase, id: TypeId) -> TypeId {
    let builtins = db.builtins();
    match db.lookup(id) {
        Some(TypeData::Intrinsic(IntrinsicKind::Int)) => builtins.int_class,
        Some(TypeData::Intrinsic(IntrinsicKind::Float)) => builtins.float_class,
        Some(TypeData::Intrinsic(IntrinsicKind::Bool)) => builtins.bool_class,
        _ => id,
    }
}

/// The class a literal-class type stands in for.
pub fn literal_backing_class(db: &dyn TypeDatabase, value: LiteralValue) -> TypeId {
    let builtins = db.builtins();
    match value {
        LiteralValue::String(_) => builtins.string_class,
        LiteralValue::Int(_) => builtins.int_class,
        LiteralValue::Bool(_) => builtins.bool_class,
    }
}
