//! Generic substitution.
//!
//! `TypeSubstitution` maps type-parameter names to concrete types;
//! `instantiate_type` applies one structurally, producing freshly interned
//! types and never mutating its input. An empty substitution is the identity
//! and returns the input id unchanged without traversing it.

use crate::db::TypeDatabase;
use crate::types::{TypeData, TypeId};
use quill_common::interner::Atom;
use rustc_hash::FxHashMap;

/// A generic-parameter binding map.
#[derive(Clone, Debug, Default)]
pub struct TypeSubstitution {
    map: FxHashMap<Atom, TypeId>,
}

impl TypeSubstitution {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Zip parameter names with arguments. Extra parameters stay unbound;
    /// extra arguments are ignored.
    pub fn from_args(params: &[Atom], args: &[TypeId]) -> Self {
        let mut subst = Self::new();
        for (&param, &arg) in params.iter().zip(args) {
            subst.insert(param, arg);
        }
        subst
    }

    pub fn insert(&mut self, param: Atom, ty: TypeId) {
        self.map.insert(param, ty);
    }

    pub fn get(&self, param: Atom) -> Option<TypeId> {
        self.map.get(&param).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

/// Replace every bound type-parameter reference reachable within `id` with
/// its binding, recursing through class arguments, array components,
/// wildcard bounds, and closure signatures.
pub fn instantiate_type(db: &dyn TypeDatabase, id: TypeId, subst: &TypeSubstitution) -> TypeId {
    if subst.is_empty() {
        return id;
    }
    let Some(data) = db.lookup(id) else {
        return id;
    };
    match data {
        TypeData::TypeParameter(info) => subst.get(info.name).unwrap_or(id),
        TypeData::Class(class_id) => {
            let class = db.class_type(class_id);
            if class.args.is_empty() {
                return id;
            }
            let args: Vec<TypeId> = class
                .args
                .iter()
                .map(|&arg| instantiate_type(db, arg, subst))
                .collect();
            if args == class.args {
                id
            } else {
                db.class(class.def, args)
            }
        }
        TypeData::Array(component) => {
            let instantiated = instantiate_type(db, component, subst);
            if instantiated == component {
                id
            } else {
                db.array(instantiated)
            }
        }
        TypeData::Wildcard(Some(bound)) => {
            let instantiated = instantiate_type(db, bound, subst);
            if instantiated == bound {
                id
            } else {
                db.wildcard(Some(instantiated))
            }
        }
        TypeData::Closure(shape_id) => {
            let shape = db.closure_shape(shape_id);
            let params: Vec<TypeId> = shape
                .params
                .iter()
                .map(|&param| instantiate_type(db, param, subst))
                .collect();
            let return_type = instantiate_type(db, shape.return_type, subst);
            if params == shape.params && return_type == shape.return_type {
                id
            } else {
                db.closure(params, return_type)
            }
        }
        _ => id,
    }
}
