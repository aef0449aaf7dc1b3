use crate::call_return::CallReturnTypeResolver;
use crate::closure_intrinsics::ClosureIntrinsic;
use crate::decl::{Decl, MethodRef, ResolvedCandidate};
use crate::expr::{Argument, CallSite, ExprRef, InvokedExpr, NameRef};
use quill_solver::{LiteralValue, MethodDef, TypeDatabase, TypeId, TypeInterner};

fn interner() -> TypeInterner {
    TypeInterner::new()
}

/// A resolved method on the built-in closure class. Its declared return type
/// is Object so tests can tell the intrinsic result from the generic
/// method-return-type fallback.
fn closure_method(db: &TypeInterner, name: &str) -> ResolvedCandidate {
    ResolvedCandidate::new(Decl::Method(MethodRef {
        class: Some(db.builtins().closure_def),
        def: MethodDef {
            name: db.intern_string(name),
            params: vec![],
            return_type: Some(db.builtins().object),
            inferred_return_type: None,
            type_params: vec![],
        },
    }))
}

/// `qualifier.name(args)` at a dynamic call site.
fn qualified_call(
    db: &TypeInterner,
    name: &str,
    qualifier_type: TypeId,
    args: Vec<Argument>,
) -> CallSite {
    CallSite::dynamic(
        InvokedExpr::Name(NameRef::qualified(
            db.intern_string(name),
            ExprRef::typed(qualifier_type),
        )),
        args,
    )
}

/// (Int, Float, Bool) -> String
fn ternary_closure(db: &TypeInterner) -> TypeId {
    let builtins = db.builtins();
    db.closure(
        vec![builtins.int_class, builtins.float_class, builtins.bool_class],
        builtins.string_class,
    )
}

#[test]
fn test_intrinsic_names() {
    assert_eq!(ClosureIntrinsic::from_name("call"), Some(ClosureIntrinsic::Call));
    assert_eq!(ClosureIntrinsic::from_name("curry"), Some(ClosureIntrinsic::Curry));
    assert_eq!(ClosureIntrinsic::from_name("ncurry"), Some(ClosureIntrinsic::NCurry));
    assert_eq!(ClosureIntrinsic::from_name("rcurry"), Some(ClosureIntrinsic::RCurry));
    assert_eq!(ClosureIntrinsic::from_name("memoize"), Some(ClosureIntrinsic::Memoize));
    assert_eq!(
        ClosureIntrinsic::from_name("trampoline"),
        Some(ClosureIntrinsic::Trampoline)
    );
    assert_eq!(ClosureIntrinsic::from_name("collect"), None);
}

#[test]
fn test_call_returns_the_signature_return_type() {
    let db = interner();
    let builtins = db.builtins();
    let resolver = CallReturnTypeResolver::new(&db);

    let closure = ternary_closure(&db);
    let call = qualified_call(
        &db,
        "call",
        closure,
        vec![
            Argument::typed(builtins.int_class),
            Argument::typed(builtins.float_class),
            Argument::typed(builtins.bool_class),
        ],
    );
    let candidate = closure_method(&db, "call");
    assert_eq!(
        resolver.calculate_return_type(&call, &[candidate]),
        Some(builtins.string_class)
    );
}

#[test]
fn test_call_resolves_a_generic_return_from_arguments() {
    let db = interner();
    let builtins = db.builtins();
    let resolver = CallReturnTypeResolver::new(&db);

    let t = db.type_param(db.intern_string("T"));
    let identity = db.closure(vec![t], t);
    let call = qualified_call(
        &db,
        "call",
        identity,
        vec![Argument::typed(builtins.string_class)],
    );
    let candidate = closure_method(&db, "call");
    assert_eq!(
        resolver.calculate_return_type(&call, &[candidate]),
        Some(builtins.string_class)
    );
}

#[test]
fn test_curry_drops_one_leading_parameter_per_argument() {
    let db = interner();
    let builtins = db.builtins();
    let resolver = CallReturnTypeResolver::new(&db);
    let closure = ternary_closure(&db);

    let one = qualified_call(
        &db,
        "curry",
        closure,
        vec![Argument::typed(builtins.int_class)],
    );
    assert_eq!(
        resolver.calculate_return_type(&one, &[closure_method(&db, "curry")]),
        Some(db.closure(
            vec![builtins.float_class, builtins.bool_class],
            builtins.string_class
        ))
    );

    let two = qualified_call(
        &db,
        "curry",
        closure,
        vec![
            Argument::typed(builtins.int_class),
            Argument::typed(builtins.float_class),
        ],
    );
    assert_eq!(
        resolver.calculate_return_type(&two, &[closure_method(&db, "curry")]),
        Some(db.closure(vec![builtins.bool_class], builtins.string_class))
    );
}

#[test]
fn test_rcurry_drops_trailing_parameters() {
    let db = interner();
    let builtins = db.builtins();
    let resolver = CallReturnTypeResolver::new(&db);
    let closure = ternary_closure(&db);

    let call = qualified_call(
        &db,
        "rcurry",
        closure,
        vec![Argument::typed(builtins.bool_class)],
    );
    assert_eq!(
        resolver.calculate_return_type(&call, &[closure_method(&db, "rcurry")]),
        Some(db.closure(
            vec![builtins.int_class, builtins.float_class],
            builtins.string_class
        ))
    );
}

#[test]
fn test_trampoline_without_arguments_keeps_the_signature() {
    let db = interner();
    let resolver = CallReturnTypeResolver::new(&db);
    let closure = ternary_closure(&db);

    let call = qualified_call(&db, "trampoline", closure, vec![]);
    assert_eq!(
        resolver.calculate_return_type(&call, &[closure_method(&db, "trampoline")]),
        Some(closure)
    );
}

#[test]
fn test_memoize_preserves_the_exact_closure_type() {
    let db = interner();
    let resolver = CallReturnTypeResolver::new(&db);
    let closure = ternary_closure(&db);

    let call = qualified_call(&db, "memoize", closure, vec![]);
    assert_eq!(
        resolver.calculate_return_type(&call, &[closure_method(&db, "memoize")]),
        Some(closure)
    );
}

#[test]
fn test_ncurry_drops_count_parameters_after_the_first() {
    let db = interner();
    let builtins = db.builtins();
    let resolver = CallReturnTypeResolver::new(&db);
    let closure = ternary_closure(&db);

    // ncurry(2, value): (Int, Float, Bool) -> String loses Float and Bool
    let call = qualified_call(
        &db,
        "ncurry",
        closure,
        vec![
            Argument::literal(LiteralValue::Int(2), TypeId::INT),
            Argument::typed(builtins.float_class),
        ],
    );
    assert_eq!(
        resolver.calculate_return_type(&call, &[closure_method(&db, "ncurry")]),
        Some(db.closure(vec![builtins.int_class], builtins.string_class))
    );
}

#[test]
fn test_ncurry_without_a_usable_count_leaves_the_closure_unchanged() {
    let db = interner();
    let builtins = db.builtins();
    let resolver = CallReturnTypeResolver::new(&db);
    let closure = ternary_closure(&db);
    let candidate = closure_method(&db, "ncurry");

    // No arguments at all
    let missing = qualified_call(&db, "ncurry", closure, vec![]);
    assert_eq!(
        resolver.calculate_return_type(&missing, std::slice::from_ref(&candidate)),
        Some(closure)
    );

    // First argument is not a literal
    let non_literal = qualified_call(
        &db,
        "ncurry",
        closure,
        vec![Argument::typed(builtins.int_class)],
    );
    assert_eq!(
        resolver.calculate_return_type(&non_literal, std::slice::from_ref(&candidate)),
        Some(closure)
    );

    // First argument is a literal of the wrong kind
    let wrong_kind = qualified_call(
        &db,
        "ncurry",
        closure,
        vec![Argument::literal(
            LiteralValue::String(db.intern_string("2")),
            builtins.string_class,
        )],
    );
    assert_eq!(
        resolver.calculate_return_type(&wrong_kind, std::slice::from_ref(&candidate)),
        Some(closure)
    );

    // Negative counts are not applied
    let negative = qualified_call(
        &db,
        "ncurry",
        closure,
        vec![Argument::literal(LiteralValue::Int(-1), TypeId::INT)],
    );
    assert_eq!(
        resolver.calculate_return_type(&negative, std::slice::from_ref(&candidate)),
        Some(closure)
    );
}

#[test]
fn test_methods_not_on_the_closure_class_use_their_declared_return() {
    let db = interner();
    let builtins = db.builtins();
    let resolver = CallReturnTypeResolver::new(&db);
    let closure = ternary_closure(&db);

    // Same name, but declared on an unrelated class
    let call = qualified_call(&db, "curry", closure, vec![]);
    let candidate = ResolvedCandidate::new(Decl::Method(MethodRef {
        class: Some(db.builtins().string_def),
        def: MethodDef {
            name: db.intern_string("curry"),
            params: vec![],
            return_type: Some(builtins.object),
            inferred_return_type: None,
            type_params: vec![],
        },
    }));
    assert_eq!(
        resolver.calculate_return_type(&call, &[candidate]),
        Some(builtins.object)
    );
}

#[test]
fn test_unqualified_calls_use_the_declared_return() {
    let db = interner();
    let builtins = db.builtins();
    let resolver = CallReturnTypeResolver::new(&db);

    let call = CallSite::dynamic(
        InvokedExpr::Name(NameRef::plain(db.intern_string("curry"))),
        vec![],
    );
    assert_eq!(
        resolver.calculate_return_type(&call, &[closure_method(&db, "curry")]),
        Some(builtins.object)
    );
}

#[test]
fn test_non_closure_qualifiers_use_the_declared_return() {
    let db = interner();
    let builtins = db.builtins();
    let resolver = CallReturnTypeResolver::new(&db);

    let call = qualified_call(&db, "curry", builtins.string_class, vec![]);
    assert_eq!(
        resolver.calculate_return_type(&call, &[closure_method(&db, "curry")]),
        Some(builtins.object)
    );
}

#[test]
fn test_curry_with_unknown_argument_types_uses_the_declared_return() {
    let db = interner();
    let builtins = db.builtins();
    let resolver = CallReturnTypeResolver::new(&db);
    let closure = ternary_closure(&db);

    let call = qualified_call(&db, "curry", closure, vec![Argument::untyped()]);
    assert_eq!(
        resolver.calculate_return_type(&call, &[closure_method(&db, "curry")]),
        Some(builtins.object)
    );
}
