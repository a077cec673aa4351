use serde_json::Value as JSONValue;
use thiserror::Error;

use std::{fmt, io};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// The input could not be turned into a record schema
#[derive(Debug, Error)]
pub enum MalformedInput {
    #[error("invalid JSON at line {line}, column {column}: {source}")]
    Syntax {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("the root value must be an object, found {found}")]
    RootNotObject { found: &'static str },
}

impl Error {
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Error::MalformedInput(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

impl From<serde_json::Error> for MalformedInput {
    fn from(source: serde_json::Error) -> Self {
        MalformedInput::Syntax {
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error::Io(io::Error::new(
            io::ErrorKind::Other,
            "failed to format declarations",
        ))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::MalformedInput(error.into())
    }
}

/// A short noun for the kind of a JSON value, used in diagnostics
pub(crate) fn kind_of(value: &JSONValue) -> &'static str {
    match *value {
        JSONValue::Null => "null",
        JSONValue::Bool(_) => "a boolean",
        JSONValue::Number(_) => "a number",
        JSONValue::String(_) => "a string",
        JSONValue::Array(_) => "an array",
        JSONValue::Object(_) => "an object",
    }
}
