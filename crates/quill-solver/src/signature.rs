//! Closure-signature operations.
//!
//! The curry family removes argument positions from a signature and interns
//! the derived closure type; `closure_return_type` resolves a signature's
//! declared return type against call-site argument types when that return
//! type depends on the signature's own generics.

use crate::db::TypeDatabase;
use crate::instantiate::{TypeSubstitution, instantiate_type};
use crate::types::{ClosureShape, TypeData, TypeId};
use crate::visitor::contains_type_parameters;

/// Where curry removes parameters from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CurryPosition {
    /// Remove from the front.
    Leading,
    /// Remove from the back.
    Trailing,
    /// Remove starting at a fixed parameter index.
    At(usize),
}

/// Produce the closure type left after removing `removed` parameters at
/// `position`. Removal saturates: asking for more parameters than the
/// signature has removes what is there.
pub fn curry_closure(
    db: &dyn TypeDatabase,
    shape: &ClosureShape,
    removed: usize,
    position: CurryPosition,
) -> TypeId {
    let mut params = shape.params.clone();
    match position {
        CurryPosition::Leading => {
            let n = removed.min(params.len());
            params.drain(..n);
        }
        CurryPosition::Trailing => {
            let n = removed.min(params.len());
            let keep = params.len() - n;
            params.truncate(keep);
        }
        CurryPosition::At(index) => {
            let start = index.min(params.len());
            let end = start.saturating_add(removed).min(params.len());
            params.drain(start..end);
        }
    }
    db.closure(params, shape.return_type)
}

/// The signature's declared return type, resolved against the call site's
/// argument types.
///
/// When the return type references the signature's free type parameters and
/// argument types are known, the parameters are bound by structurally
/// matching declared parameter types against argument types, then
/// substituted into the return type. Without argument context the declared
/// return type is used as is.
pub fn closure_return_type(
    db: &dyn TypeDatabase,
    shape: &ClosureShape,
    args: Option<&[TypeId]>,
) -> TypeId {
    let declared = shape.return_type;
    if !contains_type_parameters(db, declared) {
        return declared;
    }
    let Some(args) = args else {
        return declared;
    };
    let mut subst = TypeSubstitution::new();
    for (&param, &arg) in shape.params.iter().zip(args) {
        bind_structural(db, param, arg, &mut subst);
    }
    instantiate_type(db, declared, &subst)
}

/// Bind type parameters in `param` against the structure of `arg`. First
/// binding wins; mismatched structure binds nothing.
fn bind_structural(
    db: &dyn TypeDatabase,
    param: TypeId,
    arg: TypeId,
    subst: &mut TypeSubstitution,
) {
    match db.lookup(param) {
        Some(TypeData::TypeParameter(info)) => {
            if subst.get(info.name).is_none() {
                subst.insert(info.name, arg);
            }
        }
        Some(TypeData::Array(param_component)) => {
            if let Some(TypeData::Array(arg_component)) = db.lookup(arg) {
                bind_structural(db, param_component, arg_component, subst);
            }
        }
        Some(TypeData::Class(param_class)) => {
            if let Some(TypeData::Class(arg_class)) = db.lookup(arg) {
                let param_class = db.class_type(param_class);
                let arg_class = db.class_type(arg_class);
                if param_class.def == arg_class.def
                    && param_class.args.len() == arg_class.args.len()
                {
                    for (&p, &a) in param_class.args.iter().zip(&arg_class.args) {
                        bind_structural(db, p, a, subst);
                    }
                }
            }
        }
        Some(TypeData::Closure(param_shape)) => {
            if let Some(TypeData::Closure(arg_shape)) = db.lookup(arg) {
                let param_shape = db.closure_shape(param_shape);
                let arg_shape = db.closure_shape(arg_shape);
                for (&p, &a) in param_shape.params.iter().zip(&arg_shape.params) {
                    bind_structural(db, p, a, subst);
                }
                bind_structural(db, param_shape.return_type, arg_shape.return_type, subst);
            }
        }
        Some(TypeData::Wildcard(Some(bound))) => bind_structural(db, bound, arg, subst),
        _ => {}
    }
}
