//! Call return-type resolution.
//!
//! The entry point of this crate: given a call expression and the resolved
//! candidates, compute the one type the call evaluates to, or `None` when no
//! type can be determined. `None` is an expected, common outcome meaning "no
//! type information here", never an error.

use crate::closure_intrinsics::closure_intrinsic_return_type;
use crate::decl::{Decl, ResolvedCandidate};
use crate::expr::{CallSite, CompileMode, InvokedExpr, NameRef};
use crate::unwrap::{FallbackPolicy, invocable_return_type};
use quill_solver::{
    TypeDatabase, TypeFormatter, TypeId, TypeSubstitution, box_primitive,
    contains_type_parameters, is_assignable, is_literal_class, least_upper_bound,
    substitute_and_normalize,
};
use tracing::{debug, error};

/// Resolver configuration, passed in explicitly so the core reads no ambient
/// state.
#[derive(Copy, Clone, Debug)]
pub struct ResolverOptions {
    /// When enabled, substitution is skipped for return types that provably
    /// contain no type parameter. Never changes observable output, only the
    /// work performed; disabled means substitution is always attempted.
    pub return_type_optimization: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            return_type_optimization: true,
        }
    }
}

pub struct CallReturnTypeResolver<'a> {
    db: &'a dyn TypeDatabase,
    options: ResolverOptions,
}

impl<'a> CallReturnTypeResolver<'a> {
    pub fn new(db: &'a dyn TypeDatabase) -> Self {
        Self::with_options(db, ResolverOptions::default())
    }

    pub fn with_options(db: &'a dyn TypeDatabase, options: ResolverOptions) -> Self {
        Self { db, options }
    }

    /// Compute the call's type from its resolved candidates.
    ///
    /// Every candidate must produce a type; one unresolvable candidate makes
    /// the whole call's type unknown, since an ambiguous call cannot be
    /// partially resolved. Multiple candidate results merge under the
    /// assignability order, joining incomparable results at their least
    /// upper bound.
    pub fn calculate_return_type(
        &self,
        call: &CallSite,
        candidates: &[ResolvedCandidate],
    ) -> Option<TypeId> {
        let name_ref = match &call.invoked {
            InvokedExpr::Name(name_ref) => name_ref,
            InvokedExpr::Other(expr) => {
                // The invoked target is itself an arbitrary expression;
                // resolve from its own type alone, failing hard.
                let ty = expr.type_id?;
                return invocable_return_type(self.db, ty, FallbackPolicy::ReturnUnknown, call);
            }
        };

        let identity = TypeSubstitution::new();
        let mut result: Option<TypeId> = None;
        for candidate in candidates {
            let raw = self.candidate_return_type(call, name_ref, candidate)?;

            // Dynamic call sites treat void results as usable null values.
            let nonvoid = if raw == TypeId::VOID && call.mode != CompileMode::Static {
                TypeId::NULL
            } else {
                raw
            };

            let normalized = if is_literal_class(self.db, nonvoid) {
                // Literal-class types carry no free generic parameters.
                nonvoid
            } else {
                let needs_substitutor = !self.options.return_type_optimization
                    || contains_type_parameters(self.db, nonvoid);
                let substitutor = if needs_substitutor {
                    &candidate.substitution
                } else {
                    &identity
                };
                match substitute_and_normalize(self.db, nonvoid, substitutor, candidate.spread) {
                    Some(ty) => ty,
                    None => {
                        let formatter = TypeFormatter::new(self.db);
                        error!(
                            return_type = %formatter.format(raw),
                            "substitution produced no type for a candidate return type"
                        );
                        nonvoid
                    }
                }
            };
            debug!(normalized = normalized.0, "candidate return type");

            result = Some(match result {
                None => normalized,
                Some(acc) if is_assignable(self.db, normalized, acc) => normalized,
                Some(acc) if is_assignable(self.db, acc, normalized) => acc,
                Some(acc) => least_upper_bound(self.db, acc, normalized),
            });
        }
        result
    }

    /// Per-candidate return type, dispatched on the declaration kind.
    fn candidate_return_type(
        &self,
        call: &CallSite,
        name_ref: &NameRef,
        candidate: &ResolvedCandidate,
    ) -> Option<TypeId> {
        match &candidate.element {
            Decl::Method(method) => {
                if candidate.invoked_on_property {
                    // Property-accessor syntax: the accessor's value may
                    // itself be invocable; if not, it is still a valid
                    // result.
                    let property_type = method.def.smart_return_type()?;
                    invocable_return_type(
                        self.db,
                        property_type,
                        FallbackPolicy::ReturnOriginal,
                        call,
                    )
                } else if let Some(ty) =
                    closure_intrinsic_return_type(self.db, call, name_ref, method)
                {
                    Some(ty)
                } else {
                    method.def.smart_return_type()
                }
            }
            Decl::Variable(variable) => {
                let ref_type = name_ref.type_id.map(|ty| box_primitive(self.db, ty));
                let ty = ref_type.or(variable.declared_type)?;
                invocable_return_type(self.db, ty, FallbackPolicy::ReturnUnknown, call)
            }
            Decl::Class(_) => None,
        }
    }
}
