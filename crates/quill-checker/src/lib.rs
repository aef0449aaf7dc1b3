//! Call return-type resolution for the Quill type checker.
//!
//! Invoked by the surrounding checking pipeline once a call site has been
//! resolved to its candidate declarations. This crate decides, for each
//! candidate, what type the call evaluates to, and merges all candidate
//! results into one type under the assignability order. An unknown type is
//! an expected outcome, signalled as `None`, never as an error.

pub mod call_return;
pub mod closure_intrinsics;
pub mod decl;
pub mod expr;
pub mod unwrap;

pub use call_return::{CallReturnTypeResolver, ResolverOptions};
pub use closure_intrinsics::ClosureIntrinsic;
pub use decl::{Decl, MethodRef, ResolvedCandidate, VariableDecl};
pub use expr::{Argument, CallSite, CompileMode, ExprRef, InvokedExpr, NameRef};
pub use unwrap::{FallbackPolicy, invocable_return_type};

// Test modules live in ../tests and are loaded here so they compile as unit
// tests with crate-private access (autotests = false).
#[cfg(test)]
#[path = "../tests/call_return_tests.rs"]
mod call_return_tests;
#[cfg(test)]
#[path = "../tests/closure_intrinsics_tests.rs"]
mod closure_intrinsics_tests;
#[cfg(test)]
#[path = "../tests/unwrap_tests.rs"]
mod unwrap_tests;
