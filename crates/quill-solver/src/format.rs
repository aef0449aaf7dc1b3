//! Human-readable type rendering for diagnostics and log lines.

use crate::db::TypeDatabase;
use crate::types::{IntrinsicKind, LiteralValue, TypeData, TypeId};

pub struct TypeFormatter<'a> {
    db: &'a dyn TypeDatabase,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(db: &'a dyn TypeDatabase) -> Self {
        Self { db }
    }

    pub fn format(&self, id: TypeId) -> String {
        let Some(data) = self.db.lookup(id) else {
            return "<unknown>".to_string();
        };
        match data {
            TypeData::Intrinsic(kind) => match kind {
                IntrinsicKind::Void => "void".to_string(),
                IntrinsicKind::Null => "null".to_string(),
                IntrinsicKind::Int => "int".to_string(),
                IntrinsicKind::Float => "float".to_string(),
                IntrinsicKind::Bool => "bool".to_string(),
            },
            TypeData::LiteralClass(value) => match value {
                LiteralValue::String(atom) => format!("'{}'", self.db.resolve_atom(atom)),
                LiteralValue::Int(n) => n.to_string(),
                LiteralValue::Bool(b) => b.to_string(),
            },
            TypeData::Class(class_id) => {
                let class = self.db.class_type(class_id);
                let name = self.db.resolve_atom(self.db.class_def(class.def).name);
                if class.args.is_empty() {
                    name.to_string()
                } else {
                    let args: Vec<String> =
                        class.args.iter().map(|&arg| self.format(arg)).collect();
                    format!("{}<{}>", name, args.join(", "))
                }
            }
            TypeData::Array(component) => format!("{}[]", self.format(component)),
            TypeData::Wildcard(None) => "?".to_string(),
            TypeData::Wildcard(Some(bound)) => format!("? extends {}", self.format(bound)),
            TypeData::TypeParameter(info) => self.db.resolve_atom(info.name).to_string(),
            TypeData::Closure(shape_id) => {
                let shape = self.db.closure_shape(shape_id);
                let params: Vec<String> =
                    shape.params.iter().map(|&param| self.format(param)).collect();
                format!("({}) -> {}", params.join(", "), self.format(shape.return_type))
            }
        }
    }
}
