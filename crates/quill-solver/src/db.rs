//! The `TypeDatabase` trait: the read/intern surface every structural
//! operation works against.
//!
//! All operations in this crate take `&dyn TypeDatabase` rather than the
//! concrete interner so callers can wrap or instrument the type model. The
//! trait is object-safe and all methods take `&self`; implementations must be
//! safe for concurrent reads (multiple call sites may be evaluated at once
//! with no extra coordination).

use crate::def::{ClassDef, DefId};
use crate::intern::Builtins;
use crate::types::{
    ClassType, ClassTypeId, ClosureShape, ClosureShapeId, LiteralValue, TypeData, TypeId,
    TypeParamInfo,
};
use quill_common::interner::Atom;
use std::sync::Arc;

pub trait TypeDatabase: Send + Sync {
    /// Resolve a `TypeId` to its variant. `None` only for ids that were never
    /// interned by this database.
    fn lookup(&self, id: TypeId) -> Option<TypeData>;

    /// Intern a type variant, returning the canonical id.
    fn intern(&self, data: TypeData) -> TypeId;

    fn class_type(&self, id: ClassTypeId) -> Arc<ClassType>;
    fn closure_shape(&self, id: ClosureShapeId) -> Arc<ClosureShape>;

    fn intern_class_type(&self, class: ClassType) -> TypeId;
    fn intern_closure_shape(&self, shape: ClosureShape) -> TypeId;

    fn class_def(&self, id: DefId) -> Arc<ClassDef>;
    fn add_class(&self, def: ClassDef) -> DefId;

    fn intern_string(&self, text: &str) -> Atom;
    fn resolve_atom(&self, atom: Atom) -> Arc<str>;

    /// Well-known declarations registered at construction.
    fn builtins(&self) -> Builtins;

    // ------------------------------------------------------------------
    // Factory conveniences
    // ------------------------------------------------------------------

    fn class(&self, def: DefId, args: Vec<TypeId>) -> TypeId {
        self.intern_class_type(ClassType { def, args })
    }

    fn array(&self, component: TypeId) -> TypeId {
        self.intern(TypeData::Array(component))
    }

    fn wildcard(&self, bound: Option<TypeId>) -> TypeId {
        self.intern(TypeData::Wildcard(bound))
    }

    fn type_param(&self, name: Atom) -> TypeId {
        self.intern(TypeData::TypeParameter(TypeParamInfo { name }))
    }

    fn literal(&self, value: LiteralValue) -> TypeId {
        self.intern(TypeData::LiteralClass(value))
    }

    fn closure(&self, params: Vec<TypeId>, return_type: TypeId) -> TypeId {
        self.intern_closure_shape(ClosureShape {
            params,
            return_type,
        })
    }

    /// `quill.util.List<element>`, the result shape of a spread call.
    fn list_of(&self, element: TypeId) -> TypeId {
        self.class(self.builtins().list_def, vec![element])
    }
}
