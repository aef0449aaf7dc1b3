//! Type traversal via the visitor pattern.
//!
//! `TypeVisitor` gives every structural query one dispatch point over the
//! `TypeData` variants instead of scattering `lookup` + `match` through the
//! codebase. Implementors override the variants they care about; everything
//! else falls through to `default_output`.
//!
//! The module also hosts the generics-presence query
//! (`contains_type_parameters`), which exists purely as a performance guard:
//! substitution is skipped when a type provably references no unresolved type
//! parameter.

use crate::db::TypeDatabase;
use crate::types::{
    ClassTypeId, ClosureShapeId, IntrinsicKind, LiteralValue, TypeData, TypeId, TypeParamInfo,
};

pub trait TypeVisitor {
    type Output;

    fn default_output() -> Self::Output;

    fn visit_type(&mut self, db: &dyn TypeDatabase, id: TypeId) -> Self::Output {
        match db.lookup(id) {
            Some(data) => self.visit_type_data(db, &data),
            None => Self::default_output(),
        }
    }

    fn visit_type_data(&mut self, db: &dyn TypeDatabase, data: &TypeData) -> Self::Output {
        match *data {
            TypeData::Intrinsic(kind) => self.visit_intrinsic(kind),
            TypeData::LiteralClass(value) => self.visit_literal_class(&value),
            TypeData::Class(id) => self.visit_class(db, id),
            TypeData::Array(component) => self.visit_array(db, component),
            TypeData::Wildcard(bound) => self.visit_wildcard(db, bound),
            TypeData::TypeParameter(info) => self.visit_type_parameter(&info),
            TypeData::Closure(id) => self.visit_closure(db, id),
        }
    }

    fn visit_intrinsic(&mut self, _kind: IntrinsicKind) -> Self::Output {
        Self::default_output()
    }

    fn visit_literal_class(&mut self, _value: &LiteralValue) -> Self::Output {
        Self::default_output()
    }

    fn visit_class(&mut self, _db: &dyn TypeDatabase, _id: ClassTypeId) -> Self::Output {
        Self::default_output()
    }

    fn visit_array(&mut self, _db: &dyn TypeDatabase, _component: TypeId) -> Self::Output {
        Self::default_output()
    }

    fn visit_wildcard(&mut self, _db: &dyn TypeDatabase, _bound: Option<TypeId>) -> Self::Output {
        Self::default_output()
    }

    fn visit_type_parameter(&mut self, _info: &TypeParamInfo) -> Self::Output {
        Self::default_output()
    }

    fn visit_closure(&mut self, _db: &dyn TypeDatabase, _id: ClosureShapeId) -> Self::Output {
        Self::default_output()
    }
}

/// Searches a type expression for any unresolved type-parameter reference.
///
/// Tri-state per variant: `Some(true)` means a parameter was found,
/// `None` means no information (nothing left to inspect down this branch).
/// Both fold to "no parameter" at the boolean boundary; the visitor only
/// ever needs to answer "might this type contain a parameter".
struct GenericsSearchVisitor;

impl TypeVisitor for GenericsSearchVisitor {
    type Output = Option<bool>;

    fn default_output() -> Self::Output {
        None
    }

    fn visit_type_parameter(&mut self, _info: &TypeParamInfo) -> Self::Output {
        Some(true)
    }

    fn visit_class(&mut self, db: &dyn TypeDatabase, id: ClassTypeId) -> Self::Output {
        let class = db.class_type(id);
        if class.args.is_empty() {
            return None;
        }
        for &arg in &class.args {
            if self.visit_type(db, arg) == Some(true) {
                return Some(true);
            }
        }
        None
    }

    fn visit_array(&mut self, db: &dyn TypeDatabase, component: TypeId) -> Self::Output {
        self.visit_type(db, component)
    }

    fn visit_wildcard(&mut self, db: &dyn TypeDatabase, bound: Option<TypeId>) -> Self::Output {
        bound.and_then(|b| self.visit_type(db, b))
    }

    fn visit_closure(&mut self, db: &dyn TypeDatabase, id: ClosureShapeId) -> Self::Output {
        // Substitution reaches through closure signatures, so the presence
        // check must too: skipping here would make the optimization change
        // observable output.
        let shape = db.closure_shape(id);
        for &param in &shape.params {
            if self.visit_type(db, param) == Some(true) {
                return Some(true);
            }
        }
        self.visit_type(db, shape.return_type)
    }
}

/// Whether `id` references an unresolved type parameter anywhere in its
/// structure. Used to skip substitution work; when in doubt callers must
/// assume substitution is needed.
pub fn contains_type_parameters(db: &dyn TypeDatabase, id: TypeId) -> bool {
    GenericsSearchVisitor.visit_type(db, id) == Some(true)
}
