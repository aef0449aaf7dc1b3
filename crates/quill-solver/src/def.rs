//! Definition identifiers and storage.
//!
//! `DefId` is a solver-owned handle to a class declaration. Keeping the
//! declaration store inside the solver means types can be created and tested
//! without any surrounding resolver, and the store's append-only layout keeps
//! ids stable for the lifetime of one checking session.

use crate::types::TypeId;
use quill_common::interner::Atom;
use std::sync::Arc;
use std::sync::RwLock;

/// Solver-owned class-declaration identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DefId(pub u32);

/// A method member of a class declaration.
#[derive(Clone, Debug)]
pub struct MethodDef {
    pub name: Atom,
    /// Declared parameter types, in order.
    pub params: Vec<TypeId>,
    /// Declared return type, absent for untyped declarations.
    pub return_type: Option<TypeId>,
    /// Return type inferred from the method body, when available.
    pub inferred_return_type: Option<TypeId>,
    /// Names of the method's own generic parameters.
    pub type_params: Vec<Atom>,
}

impl MethodDef {
    /// The best-known return type: the body-inferred type when present,
    /// otherwise the declared one.
    pub fn smart_return_type(&self) -> Option<TypeId> {
        self.inferred_return_type.or(self.return_type)
    }
}

/// A class declaration: name, generic parameters, superclass, members.
///
/// Inheritance is single (`extends` only); the superclass reference may use
/// the declaring class's own type parameters (`class IntBox extends Box<Int>`
/// or `class MyList<E> extends List<E>`).
#[derive(Clone, Debug)]
pub struct ClassDef {
    pub name: Atom,
    pub type_params: Vec<Atom>,
    pub extends: Option<TypeId>,
    pub methods: Vec<MethodDef>,
}

/// Append-only class-declaration store.
pub struct DefinitionStore {
    defs: RwLock<Vec<Arc<ClassDef>>>,
}

impl DefinitionStore {
    pub fn new() -> Self {
        Self {
            defs: RwLock::new(Vec::new()),
        }
    }

    pub fn add(&self, def: ClassDef) -> DefId {
        let mut defs = self.defs.write().unwrap_or_else(|e| e.into_inner());
        let id = DefId(defs.len() as u32);
        defs.push(Arc::new(def));
        id
    }

    pub fn get(&self, id: DefId) -> Arc<ClassDef> {
        let defs = self.defs.read().unwrap_or_else(|e| e.into_inner());
        defs[id.0 as usize].clone()
    }

    pub fn len(&self) -> usize {
        self.defs.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
