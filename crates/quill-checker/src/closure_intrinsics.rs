//! The closure intrinsic operations.
//!
//! Six well-known operations on the built-in closure class reinterpret the
//! receiver closure's own signature instead of using the method's declared
//! return type. The set is closed, so the dispatch is an exhaustive match
//! over `ClosureIntrinsic` rather than open-ended name lookup.

use crate::expr::{CallSite, NameRef};
use crate::decl::MethodRef;
use quill_solver::{
    CurryPosition, LiteralValue, TypeDatabase, TypeId, closure_return_type, closure_shape_id,
    curry_closure,
};
use tracing::trace;

/// The closure operations with specialized return types.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClosureIntrinsic {
    Call,
    Curry,
    NCurry,
    RCurry,
    Memoize,
    Trampoline,
}

impl ClosureIntrinsic {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "call" => Some(Self::Call),
            "curry" => Some(Self::Curry),
            "ncurry" => Some(Self::NCurry),
            "rcurry" => Some(Self::RCurry),
            "memoize" => Some(Self::Memoize),
            "trampoline" => Some(Self::Trampoline),
            _ => None,
        }
    }
}

/// Specialized return type for a call to a closure intrinsic.
///
/// Applies only when the resolved method is declared on the built-in closure
/// class itself, the reference has a qualifier, and the qualifier's static
/// type is a closure-signature type; otherwise `None` defers to the generic
/// method-return-type path.
pub(crate) fn closure_intrinsic_return_type(
    db: &dyn TypeDatabase,
    call: &CallSite,
    name_ref: &NameRef,
    method: &MethodRef,
) -> Option<TypeId> {
    let class = method.class?;
    if class != db.builtins().closure_def {
        return None;
    }
    let name = db.resolve_atom(method.def.name);
    let op = ClosureIntrinsic::from_name(&name)?;

    let qualifier = name_ref.qualifier?;
    let qualifier_type = qualifier.type_id?;
    let shape_id = closure_shape_id(db, qualifier_type)?;
    let shape = db.closure_shape(shape_id);

    trace!(op = ?op, "closure intrinsic");
    let result = match op {
        ClosureIntrinsic::Call => {
            closure_return_type(db, &shape, call.argument_types().as_deref())
        }
        ClosureIntrinsic::Curry | ClosureIntrinsic::Trampoline => {
            let args = call.argument_types()?;
            curry_closure(db, &shape, args.len(), CurryPosition::Leading)
        }
        ClosureIntrinsic::RCurry => {
            let args = call.argument_types()?;
            curry_closure(db, &shape, args.len(), CurryPosition::Trailing)
        }
        ClosureIntrinsic::Memoize => qualifier_type,
        ClosureIntrinsic::NCurry => match call.args.first().and_then(|arg| arg.literal) {
            Some(LiteralValue::Int(count)) if count >= 0 => {
                curry_closure(db, &shape, count as usize, CurryPosition::At(1))
            }
            // Missing, non-literal, non-integer, or negative count: the
            // expression may still be mid-edit, so leave the closure type
            // unchanged instead of failing.
            _ => qualifier_type,
        },
    };
    Some(result)
}
