use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Write};

use crate::schema::Schema;

mod go_struct;
pub use go_struct::GoStruct;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenOutput {
    pub header: String,
    pub body: String,
}

pub trait TargetGenerator {
    fn generate(&self, schema: &Schema) -> Result<GenOutput, fmt::Error> {
        let mut header = String::new();
        let mut body = String::new();
        self.write_output(schema, &mut header, &mut body)?;
        Ok(GenOutput { header, body })
    }

    fn write_output(
        &self,
        schema: &Schema,
        header: &mut dyn Write,
        body: &mut dyn Write,
    ) -> fmt::Result;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Indentation {
    Space(usize),
    Tab,
}

impl Default for Indentation {
    fn default() -> Self {
        Indentation::Tab
    }
}

impl Display for Indentation {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Indentation::Space(len) => {
                for _ in 0..len {
                    write!(fmt, " ")?;
                }
            }
            Indentation::Tab => {
                write!(fmt, "\t")?;
            }
        }
        Ok(())
    }
}

/// A helper type that facilitate taking advantage of [`Display`](std::fmt::Display)
struct Contexted<I, C: Copy> {
    inner: I,
    context: C,
}

impl<I, C: Copy> Contexted<I, C> {
    /// Wrap another type using the schema and the generator options of the current wrapper
    fn wrap<OtherI>(&self, another: OtherI) -> Contexted<OtherI, C> {
        with_context(another, self.context)
    }
}

/// Create and return a new [`Contexted`]
fn with_context<I, C: Copy>(inner: I, context: C) -> Contexted<I, C> {
    Contexted { inner, context }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indentation_renders() {
        assert_eq!(Indentation::Tab.to_string(), "\t");
        assert_eq!(Indentation::Space(4).to_string(), "    ");
        assert_eq!(Indentation::Space(0).to_string(), "");
    }
}
