//! Resolved declarations and candidates.
//!
//! Overload resolution happens outside this crate; what arrives here is the
//! set of declarations a call site may target, each with its generic
//! bindings already computed.

use quill_common::interner::Atom;
use quill_solver::{DefId, MethodDef, SpreadState, TypeId, TypeSubstitution};

/// A method target together with its declaring class, when known.
#[derive(Clone, Debug)]
pub struct MethodRef {
    pub class: Option<DefId>,
    pub def: MethodDef,
}

/// A variable holding an invocable (or any other) value.
#[derive(Clone, Debug)]
pub struct VariableDecl {
    pub name: Atom,
    pub declared_type: Option<TypeId>,
}

/// The kinds of declaration a call can resolve to.
#[derive(Clone, Debug)]
pub enum Decl {
    Method(MethodRef),
    Variable(VariableDecl),
    /// A class reference; calls resolved here produce no type.
    Class(DefId),
}

/// One resolved declaration a call site might be invoking, with its generic
/// bindings. Produced by the external resolver; immutable during one
/// evaluation.
#[derive(Clone, Debug)]
pub struct ResolvedCandidate {
    pub element: Decl,
    /// Generic-parameter bindings for the candidate's context.
    pub substitution: TypeSubstitution,
    /// Whether the candidate was reached via property-accessor syntax.
    pub invoked_on_property: bool,
    /// Set when the call was made through a list-spread receiver.
    pub spread: Option<SpreadState>,
}

impl ResolvedCandidate {
    pub fn new(element: Decl) -> Self {
        Self {
            element,
            substitution: TypeSubstitution::new(),
            invoked_on_property: false,
            spread: None,
        }
    }

    pub fn with_substitution(mut self, substitution: TypeSubstitution) -> Self {
        self.substitution = substitution;
        self
    }

    pub fn on_property(mut self) -> Self {
        self.invoked_on_property = true;
        self
    }

    pub fn with_spread(mut self, spread: SpreadState) -> Self {
        self.spread = Some(spread);
        self
    }
}
