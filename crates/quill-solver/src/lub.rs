//! Least upper bound under the assignability order.
//!
//! The merge step folds candidate result types through `least_upper_bound`
//! when two results are incomparable. The join is symmetric and its result
//! is assignable from both inputs; with single inheritance the common
//! superclass walk guarantees both properties.

use crate::db::TypeDatabase;
use crate::instantiate::{TypeSubstitution, instantiate_type};
use crate::normalize::{box_primitive, literal_backing_class};
use crate::subtype::is_assignable;
use crate::types::{IntrinsicKind, TypeData, TypeId};
use crate::visitor_extract::{class_type_of, closure_shape_id};

pub fn least_upper_bound(db: &dyn TypeDatabase, a: TypeId, b: TypeId) -> TypeId {
    if a == b {
        return a;
    }
    if is_assignable(db, a, b) {
        return a;
    }
    if is_assignable(db, b, a) {
        return b;
    }
    join_incomparable(db, a, b)
}

/// Join tolerating absent contributions: an absent side contributes nothing.
pub fn lub_nullable(
    db: &dyn TypeDatabase,
    a: Option<TypeId>,
    b: Option<TypeId>,
) -> Option<TypeId> {
    match (a, b) {
        (None, other) | (other, None) => other,
        (Some(a), Some(b)) => Some(least_upper_bound(db, a, b)),
    }
}

fn join_incomparable(db: &dyn TypeDatabase, a: TypeId, b: TypeId) -> TypeId {
    // Two incomparable closures join on their return types before any class
    // promotion: same-shaped signatures keep their structural form.
    if let (Some(a_shape), Some(b_shape)) = (closure_shape_id(db, a), closure_shape_id(db, b)) {
        let a_shape = db.closure_shape(a_shape);
        let b_shape = db.closure_shape(b_shape);
        let joined_return = least_upper_bound(db, a_shape.return_type, b_shape.return_type);
        if a_shape.params == b_shape.params {
            return db.closure(a_shape.params.clone(), joined_return);
        }
        return db.class(db.builtins().closure_def, vec![joined_return]);
    }

    let a = promote(db, a);
    let b = promote(db, b);
    if a == b {
        return a;
    }
    if is_assignable(db, a, b) {
        return a;
    }
    if is_assignable(db, b, a) {
        return b;
    }

    match (db.lookup(a), db.lookup(b)) {
        (Some(TypeData::Array(a_component)), Some(TypeData::Array(b_component))) => {
            db.array(least_upper_bound(db, a_component, b_component))
        }
        (Some(TypeData::Class(_)), Some(TypeData::Class(_))) => join_classes(db, a, b),
        _ => db.builtins().object,
    }
}

/// Rewrite non-class forms to their nearest class representation so the
/// common-superclass walk applies.
fn promote(db: &dyn TypeDatabase, id: TypeId) -> TypeId {
    match db.lookup(id) {
        Some(TypeData::LiteralClass(value)) => literal_backing_class(db, value),
        Some(TypeData::Intrinsic(
            IntrinsicKind::Int | IntrinsicKind::Float | IntrinsicKind::Bool,
        )) => box_primitive(db, id),
        Some(TypeData::Closure(shape_id)) => {
            let shape = db.closure_shape(shape_id);
            db.class(db.builtins().closure_def, vec![shape.return_type])
        }
        Some(TypeData::Wildcard(bound)) => bound.unwrap_or(db.builtins().object),
        _ => id,
    }
}

fn join_classes(db: &dyn TypeDatabase, a: TypeId, b: TypeId) -> TypeId {
    // Same declaration, incomparable arguments: join argument-wise.
    if let (Some(a_class), Some(b_class)) = (class_type_of(db, a), class_type_of(db, b))
        && a_class.def == b_class.def
        && a_class.args.len() == b_class.args.len()
    {
        let args: Vec<TypeId> = a_class
            .args
            .iter()
            .zip(&b_class.args)
            .map(|(&x, &y)| least_upper_bound(db, x, y))
            .collect();
        return db.class(a_class.def, args);
    }

    // Walk one side's superclass chain outward; the first ancestor that
    // covers the other side is the join. Single inheritance makes this
    // independent of which side is walked.
    let mut current = a;
    while let Some(class) = class_type_of(db, current) {
        if is_assignable(db, current, b) {
            return current;
        }
        let def = db.class_def(class.def);
        let Some(superclass) = def.extends else {
            break;
        };
        let subst = TypeSubstitution::from_args(&def.type_params, &class.args);
        current = instantiate_type(db, superclass, &subst);
    }
    db.builtins().object
}
