//! Infer a schema from a given JSONValue
use serde::Deserialize;
use serde_json::{Number, Value as JSONValue};
use tracing::trace;

use std::collections::HashSet;

use super::naming::to_go_name;
use crate::error::{kind_of, MalformedInput, Result};
use crate::schema::{ArenaIndex, Field, ITypeArena, Record, Schema, Type, TypeArena};
use crate::{RED_ZONE, STACK_SIZE};

/// Parse `json` and infer a [`Schema`] whose root record is named `root_name`
pub fn infer_from_slice(root_name: &str, json: &[u8]) -> Result<Schema> {
    let mut deserializer = serde_json::Deserializer::from_slice(json);
    deserializer.disable_recursion_limit();
    let value = JSONValue::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    infer_from_json(root_name, &value)
}

/// Infer a [`Schema`] from an already parsed document whose root must be an object
pub fn infer_from_json(root_name: &str, json: &JSONValue) -> Result<Schema> {
    if !json.is_object() {
        return Err(MalformedInput::RootNotObject {
            found: kind_of(json),
        }
        .into());
    }
    Ok(BasicInferrerClosure::new().infer(json, root_name))
}

/// An closure for the inferrer to work
pub struct BasicInferrerClosure {
    arena: TypeArena,
    record_names: HashSet<String>,
}

impl BasicInferrerClosure {
    pub fn new() -> Self {
        BasicInferrerClosure {
            arena: TypeArena::new(),
            record_names: HashSet::new(),
        }
    }

    pub fn infer(mut self, json: &JSONValue, root_name: &str) -> Schema {
        let root = self.rinfer(json, root_name);

        let arena = self.arena;
        Schema { arena, root }
    }

    /// `outer_name` is the name a record would get if `json` (or the first element of an array
    /// along the way) turns out to be an object.
    fn rinfer(&mut self, json: &JSONValue, outer_name: &str) -> ArenaIndex {
        stacker::maybe_grow(RED_ZONE, STACK_SIZE, || match *json {
            JSONValue::Number(ref number) => infer_number(&self.arena, number),
            JSONValue::Bool(_) => self.arena.bool(),
            JSONValue::String(_) => self.arena.string(),
            JSONValue::Null => self.arena.any(),
            JSONValue::Array(ref array) => {
                // Only the first element is observed; later ones are never unified with it.
                let inner = match array.first() {
                    Some(value) => self.rinfer(value, outer_name),
                    None => self.arena.any(),
                };
                self.arena.insert(Type::Array(inner))
            }
            JSONValue::Object(ref map) => {
                let mut record = Record::new(self.claim_name(outer_name));
                for (key, value) in map.iter() {
                    let name = to_go_name(key);
                    let r#type = self.rinfer(value, &name);
                    record.fields.insert(
                        key.to_owned(),
                        Field {
                            key: key.to_owned(),
                            name,
                            r#type,
                        },
                    );
                }
                trace!(record = %record.name, fields = record.fields.len(), "inferred record");
                self.arena.insert(Type::Record(record))
            }
        })
    }

    /// Reserve a record name, suffixing `2`, `3`, ... when it is already taken
    fn claim_name(&mut self, base: &str) -> String {
        if self.record_names.insert(base.to_owned()) {
            return base.to_owned();
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}{}", base, n);
            if self.record_names.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

impl Default for BasicInferrerClosure {
    fn default() -> Self {
        Self::new()
    }
}

/// A literal with a fraction or an exponent is a float; so is an integer that fits in neither
/// `i64` nor `u64`.
fn infer_number(arena: &TypeArena, number: &Number) -> ArenaIndex {
    let literal = number.to_string();
    if literal.contains(|c: char| matches!(c, '.' | 'e' | 'E')) {
        arena.float()
    } else if number.as_i64().is_some() || number.as_u64().is_some() {
        arena.int()
    } else {
        arena.float()
    }
}
