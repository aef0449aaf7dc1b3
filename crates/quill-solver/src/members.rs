//! Member candidate lookup.
//!
//! Finds the method candidates a call-like access could target on a class
//! type, walking the inheritance chain and accumulating class-level generic
//! bindings, and computes a candidate's substituted return type. This is the
//! machinery behind invoking `call` on an invocable object.

use crate::db::TypeDatabase;
use crate::def::MethodDef;
use crate::instantiate::{TypeSubstitution, instantiate_type};
use crate::normalize::substitute_and_normalize;
use crate::types::TypeId;
use crate::visitor_extract::class_type_of;
use quill_common::interner::Atom;
use tracing::trace;

/// One method a call could target, with the substitution accumulated along
/// the inheritance chain from the receiver type down to the declaring class.
#[derive(Clone, Debug)]
pub struct MethodCandidate {
    pub method: MethodDef,
    pub substitution: TypeSubstitution,
}

/// All methods named `name` discoverable on `ty`, filtered to those
/// applicable to the given argument count when argument types are known.
pub fn method_candidates(
    db: &dyn TypeDatabase,
    ty: TypeId,
    name: Atom,
    arg_types: Option<&[TypeId]>,
) -> Vec<MethodCandidate> {
    let mut found = Vec::new();
    let mut current = ty;
    while let Some(class) = class_type_of(db, current) {
        let def = db.class_def(class.def);
        let subst = TypeSubstitution::from_args(&def.type_params, &class.args);
        for method in &def.methods {
            if method.name != name {
                continue;
            }
            if let Some(args) = arg_types
                && method.params.len() != args.len()
            {
                continue;
            }
            found.push(MethodCandidate {
                method: method.clone(),
                substitution: subst.clone(),
            });
        }
        match def.extends {
            Some(superclass) => current = instantiate_type(db, superclass, &subst),
            None => break,
        }
    }
    trace!(
        candidates = found.len(),
        name = %db.resolve_atom(name),
        "member candidate lookup"
    );
    found
}

/// A candidate's best-known return type with its class-level bindings
/// applied. Absent when the method has no known return type.
pub fn candidate_return_type(
    db: &dyn TypeDatabase,
    candidate: &MethodCandidate,
) -> Option<TypeId> {
    let raw = candidate.method.smart_return_type()?;
    substitute_and_normalize(db, raw, &candidate.substitution, None)
}
