//! Call-site shape.
//!
//! The resolver does not navigate a full expression tree; it only needs the
//! shape of the call: what is being invoked, the argument types (and literal
//! values, for the one intrinsic that reads a count), and whether the call
//! site is in a strict-compilation context.

use quill_common::interner::Atom;
use quill_solver::{LiteralValue, TypeId};
use smallvec::SmallVec;

/// An expression whose only relevant property here is its statically known
/// type, absent when unknown.
#[derive(Copy, Clone, Debug, Default)]
pub struct ExprRef {
    pub type_id: Option<TypeId>,
}

impl ExprRef {
    pub fn typed(type_id: TypeId) -> Self {
        Self {
            type_id: Some(type_id),
        }
    }

    pub fn untyped() -> Self {
        Self { type_id: None }
    }
}

/// A plain name reference, possibly qualified (`receiver.name`).
///
/// `type_id` is the reference expression's own resolved type; it backs the
/// variable-invocation path.
#[derive(Clone, Debug)]
pub struct NameRef {
    pub name: Atom,
    pub qualifier: Option<ExprRef>,
    pub type_id: Option<TypeId>,
}

impl NameRef {
    pub fn plain(name: Atom) -> Self {
        Self {
            name,
            qualifier: None,
            type_id: None,
        }
    }

    pub fn qualified(name: Atom, qualifier: ExprRef) -> Self {
        Self {
            name,
            qualifier: Some(qualifier),
            type_id: None,
        }
    }

    pub fn with_type(mut self, type_id: TypeId) -> Self {
        self.type_id = Some(type_id);
        self
    }
}

/// The invoked target of a call.
#[derive(Clone, Debug)]
pub enum InvokedExpr {
    /// A plain name reference; candidate iteration applies.
    Name(NameRef),
    /// Any other expression form (e.g. invoking the result of another
    /// call); resolved from the expression's own type alone.
    Other(ExprRef),
}

/// One call argument: its static type plus, when the argument is a literal
/// expression, its constant value.
#[derive(Copy, Clone, Debug)]
pub struct Argument {
    pub type_id: Option<TypeId>,
    pub literal: Option<LiteralValue>,
}

impl Argument {
    pub fn typed(type_id: TypeId) -> Self {
        Self {
            type_id: Some(type_id),
            literal: None,
        }
    }

    pub fn untyped() -> Self {
        Self {
            type_id: None,
            literal: None,
        }
    }

    pub fn literal(value: LiteralValue, type_id: TypeId) -> Self {
        Self {
            type_id: Some(type_id),
            literal: Some(value),
        }
    }
}

/// Whether the call site is compiled strictly.
///
/// Dynamic call sites treat `void` results as usable `null` values; strict
/// ones keep `void`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CompileMode {
    Dynamic,
    Static,
}

/// A call-like expression, as handed over by the surrounding pipeline.
#[derive(Clone, Debug)]
pub struct CallSite {
    pub invoked: InvokedExpr,
    pub args: Vec<Argument>,
    pub mode: CompileMode,
}

impl CallSite {
    pub fn new(invoked: InvokedExpr, args: Vec<Argument>, mode: CompileMode) -> Self {
        Self {
            invoked,
            args,
            mode,
        }
    }

    /// A dynamic-mode call, the common case.
    pub fn dynamic(invoked: InvokedExpr, args: Vec<Argument>) -> Self {
        Self::new(invoked, args, CompileMode::Dynamic)
    }

    /// The argument types in order, or `None` when any argument's type is
    /// unknown.
    pub fn argument_types(&self) -> Option<SmallVec<[TypeId; 4]>> {
        self.args.iter().map(|arg| arg.type_id).collect()
    }
}
