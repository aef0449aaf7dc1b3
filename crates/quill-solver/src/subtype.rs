//! Assignability.
//!
//! `is_assignable(db, target, source)` answers "is `target` assignable from
//! `source`", the partial order the merge step and the join are defined
//! over. Nominal class checks walk the single-inheritance chain with
//! substituted superclass arguments; class arguments are covariant with
//! wildcard targets accepting per their bound; closures are arity-strict
//! with contravariant parameters and covariant returns.

use crate::db::TypeDatabase;
use crate::instantiate::{TypeSubstitution, instantiate_type};
use crate::normalize::{box_primitive, literal_backing_class};
use crate::types::{ClassType, ClosureShapeId, IntrinsicKind, LiteralValue, TypeData, TypeId};
use crate::visitor_extract::class_type_of;

pub fn is_assignable(db: &dyn TypeDatabase, target: TypeId, source: TypeId) -> bool {
    if target == source {
        return true;
    }
    let (Some(t), Some(s)) = (db.lookup(target), db.lookup(source)) else {
        return false;
    };

    // null is assignable to every reference type
    if s == TypeData::Intrinsic(IntrinsicKind::Null) {
        return is_reference(&t);
    }

    match t {
        TypeData::Intrinsic(kind) => match s {
            TypeData::Intrinsic(source_kind) => kind == source_kind,
            TypeData::LiteralClass(LiteralValue::Int(_)) => kind == IntrinsicKind::Int,
            TypeData::LiteralClass(LiteralValue::Bool(_)) => kind == IntrinsicKind::Bool,
            _ => false,
        },
        // Distinct literal-class types never unify; the reflexive case is
        // covered by id equality above.
        TypeData::LiteralClass(_) => false,
        TypeData::Class(class_id) => {
            let class = db.class_type(class_id);
            if class.def == db.builtins().object_def {
                return !matches!(s, TypeData::Intrinsic(IntrinsicKind::Void));
            }
            class_assignable_from(db, target, &class, source, &s)
        }
        TypeData::Array(target_component) => match s {
            TypeData::Array(source_component) => {
                is_assignable(db, target_component, source_component)
            }
            _ => false,
        },
        TypeData::Wildcard(bound) => match bound {
            None => true,
            Some(bound) => is_assignable(db, bound, source),
        },
        // Only the reflexive case; a type parameter stands for an unknown
        // type, so nothing else is provably assignable to it.
        TypeData::TypeParameter(_) => false,
        TypeData::Closure(target_shape) => match s {
            TypeData::Closure(source_shape) => {
                closure_assignable(db, target_shape, source_shape)
            }
            _ => false,
        },
    }
}

fn is_reference(data: &TypeData) -> bool {
    matches!(
        data,
        TypeData::Class(_)
            | TypeData::Array(_)
            | TypeData::Closure(_)
            | TypeData::LiteralClass(_)
            | TypeData::Wildcard(_)
            | TypeData::Intrinsic(IntrinsicKind::Null)
    )
}

fn class_assignable_from(
    db: &dyn TypeDatabase,
    target_id: TypeId,
    target: &ClassType,
    source_id: TypeId,
    source: &TypeData,
) -> bool {
    match *source {
        TypeData::Class(_) => {
            // Walk the source hierarchy until the target's declaration shows
            // up, substituting superclass arguments along the way.
            let mut current = source_id;
            while let Some(class) = class_type_of(db, current) {
                if class.def == target.def {
                    return class_args_assignable(db, &target.args, &class.args);
                }
                let def = db.class_def(class.def);
                let Some(superclass) = def.extends else {
                    return false;
                };
                let subst = TypeSubstitution::from_args(&def.type_params, &class.args);
                current = instantiate_type(db, superclass, &subst);
            }
            false
        }
        TypeData::LiteralClass(value) => {
            is_assignable(db, target_id, literal_backing_class(db, value))
        }
        TypeData::Closure(shape_id) => {
            // A structural closure is an instance of the builtin closure
            // class parameterized by its return type.
            let shape = db.closure_shape(shape_id);
            let as_class = db.class(db.builtins().closure_def, vec![shape.return_type]);
            is_assignable(db, target_id, as_class)
        }
        TypeData::Intrinsic(IntrinsicKind::Int)
        | TypeData::Intrinsic(IntrinsicKind::Float)
        | TypeData::Intrinsic(IntrinsicKind::Bool) => {
            is_assignable(db, target_id, box_primitive(db, source_id))
        }
        TypeData::Wildcard(Some(bound)) => is_assignable(db, target_id, bound),
        _ => false,
    }
}

fn class_args_assignable(db: &dyn TypeDatabase, target_args: &[TypeId], source_args: &[TypeId]) -> bool {
    // A raw reference on either side leaves the arguments unchecked.
    if target_args.is_empty() || source_args.is_empty() {
        return true;
    }
    if target_args.len() != source_args.len() {
        return false;
    }
    target_args
        .iter()
        .zip(source_args)
        .all(|(&t, &s)| is_assignable(db, t, s))
}

fn closure_assignable(
    db: &dyn TypeDatabase,
    target_shape: ClosureShapeId,
    source_shape: ClosureShapeId,
) -> bool {
    let target = db.closure_shape(target_shape);
    let source = db.closure_shape(source_shape);
    target.params.len() == source.params.len()
        && target
            .params
            .iter()
            .zip(&source.params)
            .all(|(&t, &s)| is_assignable(db, s, t))
        && is_assignable(db, target.return_type, source.return_type)
}
