mod arena;
mod record;

pub use self::arena::{ArenaIndex, ArenaOfType, ITypeArena, TypeArena};
pub use self::record::{Field, Record};

use std::collections::HashSet;

use crate::{RED_ZONE, STACK_SIZE};

/// The inferred type graph of one JSON document
#[derive(Debug)]
pub struct Schema {
    pub arena: TypeArena,
    pub root: ArenaIndex,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Type {
    Record(Record),
    Array(ArenaIndex),
    String,
    Int,
    Float,
    Bool,
    Any,
}

impl Type {
    pub fn as_record(&self) -> Option<&Record> {
        match *self {
            Self::Record(ref record) => Some(record),
            _ => None,
        }
    }

    pub fn is_record(&self) -> bool {
        self.as_record().is_some()
    }

    pub fn as_array(&self) -> Option<ArenaIndex> {
        match *self {
            Self::Array(r#type) => Some(r#type),
            _ => None,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(*self, Self::String)
    }

    pub fn is_int(&self) -> bool {
        matches!(*self, Self::Int)
    }

    pub fn is_float(&self) -> bool {
        matches!(*self, Self::Float)
    }

    pub fn is_bool(&self) -> bool {
        matches!(*self, Self::Bool)
    }

    pub fn is_any(&self) -> bool {
        matches!(*self, Self::Any)
    }
}

impl Default for Type {
    fn default() -> Self {
        Type::Any
    }
}

impl Schema {
    pub fn get(&self, i: ArenaIndex) -> Option<&Type> {
        ITypeArena::get(&self.arena, i)
    }

    pub fn root_record(&self) -> Option<&Record> {
        self.get(self.root).and_then(Type::as_record)
    }

    /// Look up a record by its (unique) name
    pub fn record(&self, name: &str) -> Option<&Record> {
        self.arena
            .iter()
            .filter_map(|(_, r#type)| r#type.as_record())
            .find(|record| record.name == name)
    }

    /// Iterate over records in declaration order: depth-first pre-order from the root, visiting
    /// fields sorted by their derived names. Each record is yielded once.
    pub fn iter_topdown(&self) -> impl Iterator<Item = ArenaIndex> {
        let mut order = Vec::new();
        let mut visited = HashSet::new();
        self.visit(self.root, &mut visited, &mut order);
        order.into_iter()
    }

    fn visit(
        &self,
        arni: ArenaIndex,
        visited: &mut HashSet<ArenaIndex>,
        order: &mut Vec<ArenaIndex>,
    ) {
        stacker::maybe_grow(RED_ZONE, STACK_SIZE, || match self.get(arni) {
            Some(Type::Record(record)) => {
                if !visited.insert(arni) {
                    return;
                }
                order.push(arni);
                for field in record.sorted_fields() {
                    self.visit(field.r#type, visited, order);
                }
            }
            Some(&Type::Array(inner)) => self.visit(inner, visited, order),
            _ => {}
        })
    }
}
