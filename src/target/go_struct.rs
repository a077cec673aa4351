use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Write};

use crate::schema::{ArenaIndex, Field, Record, Schema, Type};
use crate::{RED_ZONE, STACK_SIZE};

use super::{with_context, Contexted, Indentation, TargetGenerator};

#[derive(Clone, Copy, Debug)]
struct Context<'c>(&'c Schema, &'c GoStruct);

/// Go `struct` declarations with `encoding/json` field tags
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GoStruct {
    /// Name in the `package` clause
    pub package: String,
    /// Whether to import `encoding/json` after the package clause
    pub import_json: bool,
    pub indentation: Indentation,
}

impl Default for GoStruct {
    fn default() -> Self {
        GoStruct {
            package: String::from("main"),
            import_json: false,
            indentation: Indentation::Tab,
        }
    }
}

impl GoStruct {
    pub fn write_header(&self, header: &mut dyn Write) -> fmt::Result {
        write!(header, "package {}\n\n", self.package)?;
        if self.import_json {
            write!(
                header,
                "import (\n{}\"encoding/json\"\n)\n\n",
                self.indentation
            )?;
        }
        Ok(())
    }

    /// Write the declaration of the record at `arni`; anything but a record writes nothing
    pub fn write_declaration(
        &self,
        schema: &Schema,
        arni: ArenaIndex,
        body: &mut dyn Write,
    ) -> fmt::Result {
        match schema.get(arni) {
            Some(Type::Record(record)) => {
                write!(body, "{}", with_context(record, Context(schema, self)))
            }
            Some(_) => Ok(()),
            None => Err(fmt::Error),
        }
    }

    /// One declaration block per record, in emission order
    pub fn declarations(&self, schema: &Schema) -> Result<Vec<String>, fmt::Error> {
        schema
            .iter_topdown()
            .map(|arni| {
                let mut declaration = String::new();
                self.write_declaration(schema, arni, &mut declaration)?;
                Ok(declaration)
            })
            .collect()
    }
}

impl TargetGenerator for GoStruct {
    fn write_output(
        &self,
        schema: &Schema,
        header: &mut dyn Write,
        body: &mut dyn Write,
    ) -> fmt::Result {
        self.write_header(header)?;
        for arni in schema.iter_topdown() {
            self.write_declaration(schema, arni, body)?;
        }
        Ok(())
    }
}

impl<'c> Display for Contexted<&'c Record, Context<'c>> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let record = self.inner;
        writeln!(f, "type {} struct {{", record.name)?;
        for field in record.sorted_fields() {
            self.wrap(field).fmt(f)?;
        }
        writeln!(f, "}}")
    }
}

impl<'c> Display for Contexted<&'c Field, Context<'c>> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let &Contexted {
            inner: field,
            context: Context(schema, options),
        } = self;
        let r#type = schema.get(field.r#type).ok_or(fmt::Error)?;
        write!(f, "{}", options.indentation)?;
        if r#type.is_record() {
            // Object-valued fields are always embedded under the nested type's name.
            write!(f, "{}", self.wrap(r#type))?;
        } else {
            write!(f, "{} {}", field.name, self.wrap(r#type))?;
        }
        writeln!(f, " `json:\"{}\"`", field.key)
    }
}

impl<'c> Display for Contexted<&'c Type, Context<'c>> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let &Contexted {
            inner: r#type,
            context: Context(schema, _options),
        } = self;
        match *r#type {
            Type::Record(ref record) => record.fmt(f),
            Type::Array(inner) => {
                let inner = schema.get(inner).ok_or(fmt::Error)?;
                stacker::maybe_grow(RED_ZONE, STACK_SIZE, || {
                    write!(f, "[]{}", self.wrap(inner))
                })
            }
            Type::String => write!(f, "string"),
            Type::Int => write!(f, "int"),
            Type::Float => write!(f, "float64"),
            Type::Bool => write!(f, "bool"),
            Type::Any => write!(f, "interface{{}}"),
        }
    }
}
