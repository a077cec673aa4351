use indexmap::IndexMap;
use itertools::Itertools;

use std::fmt::{self, Display};

use super::arena::ArenaIndex;

/// A named collection of fields, keyed by their original JSON keys in insertion order
///
/// Generally, it is inferred from [`serde_json::Value::Object`]
/// (i.e. `{ "key": "value", ... }`) and generated as a `struct` declaration.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Record {
    pub name: String,
    pub fields: IndexMap<String, Field>,
}

/// A single member of a [`Record`]
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Field {
    /// The verbatim JSON key, preserved in the serialization tag
    pub key: String,
    /// The identifier derived from `key`, used in declarations and for ordering
    pub name: String,
    pub r#type: ArenaIndex,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Record {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Fields ordered by derived name, compared byte-wise
    pub fn sorted_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .values()
            .sorted_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()))
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.name.fmt(f)
    }
}
