//! Structural type model for the Quill type checker.
//!
//! This crate owns the type representation and every structural operation
//! the call return-type core needs:
//!
//! - **Interning**: O(1) type equality via `TypeId` comparison
//! - **Assignability**: the nominal partial order merge decisions run over
//! - **Join**: least upper bound for incomparable candidate results
//! - **Substitution**: applying generic-parameter bindings structurally
//! - **Signatures**: curry and argument-context return-type resolution
//!
//! All operations are pure reads over `&dyn TypeDatabase`; the interner is
//! safe for concurrent use, so call sites can be evaluated in parallel with
//! no extra coordination.

pub mod db;
pub mod def;
pub mod format;
pub mod instantiate;
mod intern;
pub mod lub;
pub mod members;
pub mod normalize;
pub mod signature;
pub mod subtype;
pub mod types;
pub mod visitor;
pub mod visitor_extract;

pub use db::TypeDatabase;
pub use def::{ClassDef, DefId, DefinitionStore, MethodDef};
pub use format::TypeFormatter;
pub use instantiate::{TypeSubstitution, instantiate_type};
pub use intern::{Builtins, TypeInterner};
pub use lub::{least_upper_bound, lub_nullable};
pub use members::{MethodCandidate, candidate_return_type, method_candidates};
pub use normalize::{SpreadState, box_primitive, literal_backing_class, substitute_and_normalize};
pub use signature::{CurryPosition, closure_return_type, curry_closure};
pub use subtype::is_assignable;
pub use types::{
    ClassType, ClassTypeId, ClosureShape, ClosureShapeId, IntrinsicKind, LiteralValue, TypeData,
    TypeId, TypeParamInfo,
};
pub use visitor::{TypeVisitor, contains_type_parameters};
pub use visitor_extract::{
    array_element_type, class_type_id, class_type_of, closure_shape_id, intrinsic_kind,
    is_closure_type, is_literal_class, literal_class_value, type_param_info,
};

// Test modules live in ../tests and are loaded here so they compile as unit
// tests with crate-private access (autotests = false).
#[cfg(test)]
#[path = "../tests/instantiate_tests.rs"]
mod instantiate_tests;
#[cfg(test)]
#[path = "../tests/lub_tests.rs"]
mod lub_tests;
#[cfg(test)]
#[path = "../tests/members_tests.rs"]
mod members_tests;
#[cfg(test)]
#[path = "../tests/normalize_tests.rs"]
mod normalize_tests;
#[cfg(test)]
#[path = "../tests/signature_tests.rs"]
mod signature_tests;
#[cfg(test)]
#[path = "../tests/subtype_tests.rs"]
mod subtype_tests;
#[cfg(test)]
#[path = "../tests/visitor_tests.rs"]
mod visitor_tests;
