use crate::TypeInterner;
use crate::db::TypeDatabase;
use crate::types::{LiteralValue, TypeId};
use crate::visitor::contains_type_parameters;

fn interner() -> TypeInterner {
    TypeInterner::new()
}

#[test]
fn test_type_parameter_is_detected() {
    let db = interner();
    let t = db.type_param(db.intern_string("T"));
    assert!(contains_type_parameters(&db, t));
}

#[test]
fn test_plain_types_report_no_parameters() {
    let db = interner();
    let builtins = db.builtins();

    assert!(!contains_type_parameters(&db, TypeId::INT));
    assert!(!contains_type_parameters(&db, TypeId::VOID));
    assert!(!contains_type_parameters(&db, builtins.string_class));
    let lit = db.literal(LiteralValue::Int(7));
    assert!(!contains_type_parameters(&db, lit));
}

#[test]
fn test_class_arguments_are_searched() {
    let db = interner();
    let builtins = db.builtins();
    let t = db.type_param(db.intern_string("T"));

    let list_t = db.class(builtins.list_def, vec![t]);
    assert!(contains_type_parameters(&db, list_t));

    let list_int = db.class(builtins.list_def, vec![builtins.int_class]);
    assert!(!contains_type_parameters(&db, list_int));

    // Nested occurrence
    let list_list_t = db.class(builtins.list_def, vec![list_t]);
    assert!(contains_type_parameters(&db, list_list_t));
}

#[test]
fn test_argument_less_class_stops_the_search() {
    let db = interner();
    let builtins = db.builtins();
    let list_raw = db.class(builtins.list_def, vec![]);
    assert!(!contains_type_parameters(&db, list_raw));
}

#[test]
fn test_array_component_is_searched() {
    let db = interner();
    let t = db.type_param(db.intern_string("T"));
    assert!(contains_type_parameters(&db, db.array(t)));
    assert!(!contains_type_parameters(&db, db.array(TypeId::INT)));
}

#[test]
fn test_wildcard_bound_is_searched() {
    let db = interner();
    let t = db.type_param(db.intern_string("T"));

    assert!(!contains_type_parameters(&db, db.wildcard(None)));
    assert!(contains_type_parameters(&db, db.wildcard(Some(t))));
    assert!(!contains_type_parameters(&db, db.wildcard(Some(TypeId::INT))));
}

#[test]
fn test_closure_signatures_are_searched() {
    // Substitution reaches through closure signatures, so the presence
    // check must agree with it for the optimization to stay invisible.
    let db = interner();
    let builtins = db.builtins();
    let t = db.type_param(db.intern_string("T"));

    let generic = db.closure(vec![t], t);
    assert!(contains_type_parameters(&db, generic));

    let generic_return = db.closure(vec![builtins.int_class], t);
    assert!(contains_type_parameters(&db, generic_return));

    let concrete = db.closure(vec![builtins.int_class], builtins.string_class);
    assert!(!contains_type_parameters(&db, concrete));
}
