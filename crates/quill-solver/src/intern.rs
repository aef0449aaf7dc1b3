//! The concrete type interner.
//!
//! `TypeInterner` owns the type tables, the class-declaration store, and the
//! string interner, and registers the `quill.lang` builtins on construction.
//! Interning is deduplicating: structurally equal types always resolve to the
//! same `TypeId`, which is what makes id comparison a structural-equality
//! check everywhere else.

use crate::db::TypeDatabase;
use crate::def::{ClassDef, DefId, DefinitionStore, MethodDef};
use crate::types::{
    ClassType, ClassTypeId, ClosureShape, ClosureShapeId, IntrinsicKind, TypeData, TypeId,
};
use dashmap::DashMap;
use quill_common::interner::{Atom, Interner};
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use std::sync::RwLock;

/// Well-known declarations and their raw class types, registered by
/// `TypeInterner::new`. Copyable so callers can grab it once per evaluation.
#[derive(Copy, Clone, Debug)]
pub struct Builtins {
    pub object_def: DefId,
    pub number_def: DefId,
    pub int_def: DefId,
    pub float_def: DefId,
    pub bool_def: DefId,
    pub string_def: DefId,
    /// `quill.lang.Closure`, the built-in closure class. The closure
    /// intrinsics only apply to methods declared exactly here.
    pub closure_def: DefId,
    pub list_def: DefId,

    pub object: TypeId,
    pub number: TypeId,
    pub int_class: TypeId,
    pub float_class: TypeId,
    pub bool_class: TypeId,
    pub string_class: TypeId,
}

pub struct TypeInterner {
    strings: Interner,
    types: RwLock<Vec<TypeData>>,
    type_map: DashMap<TypeData, TypeId, FxBuildHasher>,
    class_types: RwLock<Vec<Arc<ClassType>>>,
    class_map: DashMap<Arc<ClassType>, ClassTypeId, FxBuildHasher>,
    closure_shapes: RwLock<Vec<Arc<ClosureShape>>>,
    closure_map: DashMap<Arc<ClosureShape>, ClosureShapeId, FxBuildHasher>,
    defs: DefinitionStore,
    builtins: Builtins,
}

impl TypeInterner {
    pub fn new() -> Self {
        let mut interner = Self {
            strings: Interner::new(),
            types: RwLock::new(Vec::new()),
            type_map: DashMap::with_hasher(FxBuildHasher),
            class_types: RwLock::new(Vec::new()),
            class_map: DashMap::with_hasher(FxBuildHasher),
            closure_shapes: RwLock::new(Vec::new()),
            closure_map: DashMap::with_hasher(FxBuildHasher),
            defs: DefinitionStore::new(),
            // Placeholder, replaced below once the builtin defs exist.
            builtins: Builtins {
                object_def: DefId(0),
                number_def: DefId(0),
                int_def: DefId(0),
                float_def: DefId(0),
                bool_def: DefId(0),
                string_def: DefId(0),
                closure_def: DefId(0),
                list_def: DefId(0),
                object: TypeId::VOID,
                number: TypeId::VOID,
                int_class: TypeId::VOID,
                float_class: TypeId::VOID,
                bool_class: TypeId::VOID,
                string_class: TypeId::VOID,
            },
        };

        // Intern order fixes the TypeId constants; see `types::TypeId`.
        let void = interner.intern(TypeData::Intrinsic(IntrinsicKind::Void));
        debug_assert_eq!(void, TypeId::VOID);
        let null = interner.intern(TypeData::Intrinsic(IntrinsicKind::Null));
        debug_assert_eq!(null, TypeId::NULL);
        let int = interner.intern(TypeData::Intrinsic(IntrinsicKind::Int));
        debug_assert_eq!(int, TypeId::INT);
        let float = interner.intern(TypeData::Intrinsic(IntrinsicKind::Float));
        debug_assert_eq!(float, TypeId::FLOAT);
        let bool_ = interner.intern(TypeData::Intrinsic(IntrinsicKind::Bool));
        debug_assert_eq!(bool_, TypeId::BOOL);

        interner.builtins = interner.register_builtins();
        interner
    }

    fn register_builtins(&self) -> Builtins {
        let simple = |name: &str, extends: Option<TypeId>| ClassDef {
            name: self.intern_string(name),
            type_params: Vec::new(),
            extends,
            methods: Vec::new(),
        };

        let object_def = self.add_class(simple("quill.lang.Object", None));
        let object = self.class(object_def, Vec::new());

        let number_def = self.add_class(simple("quill.lang.Number", Some(object)));
        let number = self.class(number_def, Vec::new());

        let int_def = self.add_class(simple("quill.lang.Int", Some(number)));
        let float_def = self.add_class(simple("quill.lang.Float", Some(number)));
        let bool_def = self.add_class(simple("quill.lang.Bool", Some(object)));
        let string_def = self.add_class(simple("quill.lang.String", Some(object)));

        // quill.lang.Closure<R> with its generic `call` member. The closure
        // intrinsics (curry and friends) are recognized by method identity in
        // the checker, so only `call` needs a declared signature here.
        let r_param = self.intern_string("R");
        let closure_def = self.add_class(ClassDef {
            name: self.intern_string("quill.lang.Closure"),
            type_params: vec![r_param],
            extends: Some(object),
            methods: vec![MethodDef {
                name: self.intern_string("call"),
                params: Vec::new(),
                return_type: Some(self.type_param(r_param)),
                inferred_return_type: None,
                type_params: Vec::new(),
            }],
        });

        let e_param = self.intern_string("E");
        let list_def = self.add_class(ClassDef {
            name: self.intern_string("quill.util.List"),
            type_params: vec![e_param],
            extends: Some(object),
            methods: Vec::new(),
        });

        Builtins {
            object_def,
            number_def,
            int_def,
            float_def,
            bool_def,
            string_def,
            closure_def,
            list_def,
            object,
            number,
            int_class: self.class(int_def, Vec::new()),
            float_class: self.class(float_def, Vec::new()),
            bool_class: self.class(bool_def, Vec::new()),
            string_class: self.class(string_def, Vec::new()),
        }
    }
}

impl TypeDatabase for TypeInterner {
    fn lookup(&self, id: TypeId) -> Option<TypeData> {
        let types = self.types.read().unwrap_or_else(|e| e.into_inner());
        types.get(id.0 as usize).copied()
    }

    fn intern(&self, data: TypeData) -> TypeId {
        *self.type_map.entry(data).or_insert_with(|| {
            let mut types = self.types.write().unwrap_or_else(|e| e.into_inner());
            let id = TypeId(types.len() as u32);
            types.push(data);
            id
        })
    }

    fn class_type(&self, id: ClassTypeId) -> Arc<ClassType> {
        let classes = self.class_types.read().unwrap_or_else(|e| e.into_inner());
        classes[id.0 as usize].clone()
    }

    fn closure_shape(&self, id: ClosureShapeId) -> Arc<ClosureShape> {
        let shapes = self
            .closure_shapes
            .read()
            .unwrap_or_else(|e| e.into_inner());
        shapes[id.0 as usize].clone()
    }

    fn intern_class_type(&self, class: ClassType) -> TypeId {
        let class = Arc::new(class);
        let id = *self.class_map.entry(class.clone()).or_insert_with(|| {
            let mut classes = self.class_types.write().unwrap_or_else(|e| e.into_inner());
            let id = ClassTypeId(classes.len() as u32);
            classes.push(class);
            id
        });
        self.intern(TypeData::Class(id))
    }

    fn intern_closure_shape(&self, shape: ClosureShape) -> TypeId {
        let shape = Arc::new(shape);
        let id = *self.closure_map.entry(shape.clone()).or_insert_with(|| {
            let mut shapes = self
                .closure_shapes
                .write()
                .unwrap_or_else(|e| e.into_inner());
            let id = ClosureShapeId(shapes.len() as u32);
            shapes.push(shape);
            id
        });
        self.intern(TypeData::Closure(id))
    }

    fn class_def(&self, id: DefId) -> Arc<ClassDef> {
        self.defs.get(id)
    }

    fn add_class(&self, def: ClassDef) -> DefId {
        self.defs.add(def)
    }

    fn intern_string(&self, text: &str) -> Atom {
        self.strings.intern(text)
    }

    fn resolve_atom(&self, atom: Atom) -> Arc<str> {
        self.strings.resolve(atom)
    }

    fn builtins(&self) -> Builtins {
        self.builtins
    }
}
