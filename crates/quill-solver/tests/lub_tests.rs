use crate::TypeInterner;
use crate::db::TypeDatabase;
use crate::def::ClassDef;
use crate::lub::{least_upper_bound, lub_nullable};
use crate::subtype::is_assignable;
use crate::types::{LiteralValue, TypeId};

fn interner() -> TypeInterner {
    TypeInterner::new()
}

#[test]
fn test_comparable_types_join_at_the_broader_one() {
    let db = interner();
    let builtins = db.builtins();

    assert_eq!(
        least_upper_bound(&db, builtins.number, builtins.int_class),
        builtins.number
    );
    assert_eq!(
        least_upper_bound(&db, builtins.int_class, builtins.number),
        builtins.number
    );
}

#[test]
fn test_siblings_join_at_common_superclass() {
    let db = interner();
    let builtins = db.builtins();

    let joined = least_upper_bound(&db, builtins.int_class, builtins.float_class);
    assert_eq!(joined, builtins.number);
}

#[test]
fn test_join_is_symmetric_and_covers_both_sides() {
    let db = interner();
    let builtins = db.builtins();

    let pairs = [
        (builtins.int_class, builtins.float_class),
        (builtins.string_class, builtins.bool_class),
        (db.array(builtins.int_class), db.array(builtins.float_class)),
        (
            db.class(builtins.list_def, vec![builtins.int_class]),
            db.class(builtins.list_def, vec![builtins.string_class]),
        ),
    ];
    for (a, b) in pairs {
        let ab = least_upper_bound(&db, a, b);
        let ba = least_upper_bound(&db, b, a);
        assert_eq!(ab, ba);
        assert!(is_assignable(&db, ab, a));
        assert!(is_assignable(&db, ab, b));
    }
}

#[test]
fn test_unrelated_classes_join_at_object() {
    let db = interner();
    let builtins = db.builtins();

    assert_eq!(
        least_upper_bound(&db, builtins.string_class, builtins.bool_class),
        builtins.object
    );
}

#[test]
fn test_arrays_join_componentwise() {
    let db = interner();
    let builtins = db.builtins();

    let joined = least_upper_bound(
        &db,
        db.array(builtins.int_class),
        db.array(builtins.float_class),
    );
    assert_eq!(joined, db.array(builtins.number));
}

#[test]
fn test_same_class_joins_argument_wise() {
    let db = interner();
    let builtins = db.builtins();

    let list_int = db.class(builtins.list_def, vec![builtins.int_class]);
    let list_float = db.class(builtins.list_def, vec![builtins.float_class]);
    let joined = least_upper_bound(&db, list_int, list_float);
    assert_eq!(joined, db.class(builtins.list_def, vec![builtins.number]));
}

#[test]
fn test_closures_with_equal_parameters_keep_their_shape() {
    let db = interner();
    let builtins = db.builtins();

    let a = db.closure(vec![TypeId::INT], builtins.int_class);
    let b = db.closure(vec![TypeId::INT], builtins.float_class);
    let joined = least_upper_bound(&db, a, b);
    assert_eq!(joined, db.closure(vec![TypeId::INT], builtins.number));
}

#[test]
fn test_closures_with_different_parameters_join_at_closure_class() {
    let db = interner();
    let builtins = db.builtins();

    let a = db.closure(vec![TypeId::INT], builtins.int_class);
    let b = db.closure(vec![TypeId::BOOL, TypeId::BOOL], builtins.float_class);
    let joined = least_upper_bound(&db, a, b);
    assert_eq!(
        joined,
        db.class(builtins.closure_def, vec![builtins.number])
    );
}

#[test]
fn test_literals_join_at_backing_class() {
    let db = interner();
    let builtins = db.builtins();

    let a = db.literal(LiteralValue::String(db.intern_string("a")));
    let b = db.literal(LiteralValue::String(db.intern_string("b")));
    assert_eq!(least_upper_bound(&db, a, b), builtins.string_class);

    let one = db.literal(LiteralValue::Int(1));
    let two = db.literal(LiteralValue::Int(2));
    assert_eq!(least_upper_bound(&db, one, two), builtins.int_class);
}

#[test]
fn test_primitives_box_before_joining() {
    let db = interner();
    let builtins = db.builtins();

    assert_eq!(
        least_upper_bound(&db, TypeId::INT, TypeId::FLOAT),
        builtins.number
    );
}

#[test]
fn test_join_through_user_hierarchy() {
    let db = interner();
    let builtins = db.builtins();

    // class Shape; class Circle extends Shape; class Square extends Shape
    let shape_def = db.add_class(ClassDef {
        name: db.intern_string("demo.Shape"),
        type_params: vec![],
        extends: Some(builtins.object),
        methods: vec![],
    });
    let shape = db.class(shape_def, vec![]);
    let circle_def = db.add_class(ClassDef {
        name: db.intern_string("demo.Circle"),
        type_params: vec![],
        extends: Some(shape),
        methods: vec![],
    });
    let square_def = db.add_class(ClassDef {
        name: db.intern_string("demo.Square"),
        type_params: vec![],
        extends: Some(shape),
        methods: vec![],
    });

    let circle = db.class(circle_def, vec![]);
    let square = db.class(square_def, vec![]);
    assert_eq!(least_upper_bound(&db, circle, square), shape);
    assert_eq!(least_upper_bound(&db, square, circle), shape);
}

#[test]
fn test_lub_nullable_tolerates_absent_sides() {
    let db = interner();
    let builtins = db.builtins();

    assert_eq!(lub_nullable(&db, None, None), None);
    assert_eq!(
        lub_nullable(&db, Some(builtins.int_class), None),
        Some(builtins.int_class)
    );
    assert_eq!(
        lub_nullable(&db, None, Some(builtins.int_class)),
        Some(builtins.int_class)
    );
    assert_eq!(
        lub_nullable(&db, Some(builtins.int_class), Some(builtins.float_class)),
        Some(builtins.number)
    );
}

#[test]
fn test_null_joins_at_the_other_side() {
    let db = interner();
    let builtins = db.builtins();

    assert_eq!(
        least_upper_bound(&db, TypeId::NULL, builtins.string_class),
        builtins.string_class
    );
    assert_eq!(
        least_upper_bound(&db, builtins.string_class, TypeId::NULL),
        builtins.string_class
    );
}
