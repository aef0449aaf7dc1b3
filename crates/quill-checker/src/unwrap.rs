//! Invocable-value unwrapping.
//!
//! When the invoked value is not a method (a variable holding a closure, a
//! property whose value is invocable, an arbitrary expression), its return
//! type is extracted from the value's own type: closure signatures unwrap to
//! their return type, references to the built-in closure class unwrap to
//! their single type argument, and ordinary class types resolve through
//! their `call` members.

use crate::expr::CallSite;
use quill_solver::{
    TypeDatabase, TypeId, candidate_return_type, class_type_of, closure_return_type,
    closure_shape_id, lub_nullable, method_candidates,
};

/// What to produce when a type is not recognized as invocable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// The call's type is unknown.
    ReturnUnknown,
    /// The original type is still a valid, directly usable result (e.g. an
    /// accessor returning a non-invocable value).
    ReturnOriginal,
}

/// Extract the return type of invoking a value of type `ty`.
pub fn invocable_return_type(
    db: &dyn TypeDatabase,
    ty: TypeId,
    policy: FallbackPolicy,
    call: &CallSite,
) -> Option<TypeId> {
    if let Some(shape_id) = closure_shape_id(db, ty) {
        let shape = db.closure_shape(shape_id);
        return Some(closure_return_type(
            db,
            &shape,
            call.argument_types().as_deref(),
        ));
    }

    if let Some(class) = class_type_of(db, ty) {
        if class.def == db.builtins().closure_def {
            // A reference to the closure class parameterized by exactly its
            // return type; any other parameterization is unrecognized.
            if class.args.len() == 1 {
                return Some(class.args[0]);
            }
            return fallback(ty, policy);
        }

        // An ordinary class is invocable through its `call` members. Each
        // applicable overload contributes its substituted return type; the
        // contributions are joined, tolerating absent ones. No members, no
        // type.
        let call_name = db.intern_string("call");
        let arg_types = call.argument_types();
        let candidates = method_candidates(db, ty, call_name, arg_types.as_deref());
        let mut result = None;
        for candidate in &candidates {
            let contributed = candidate_return_type(db, candidate);
            result = lub_nullable(db, result, contributed);
        }
        return result;
    }

    fallback(ty, policy)
}

fn fallback(ty: TypeId, policy: FallbackPolicy) -> Option<TypeId> {
    match policy {
        FallbackPolicy::ReturnOriginal => Some(ty),
        FallbackPolicy::ReturnUnknown => None,
    }
}
