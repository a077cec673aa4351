//! End-to-end generation of a Go source file from a JSON sample

use serde::{Deserialize, Serialize};
use tracing::debug;

use std::io::{Read, Write};

use crate::error::Result;
use crate::inferrer::infer_from_slice;
use crate::target::{GoStruct, Indentation};

/// File-level settings of a [`Transmogrifier`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Options {
    /// Name in the `package` clause
    pub package: String,
    /// Whether to import `encoding/json` after the package clause
    pub import_json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            package: String::from("main"),
            import_json: false,
        }
    }
}

impl From<&Options> for GoStruct {
    fn from(options: &Options) -> Self {
        GoStruct {
            package: options.package.clone(),
            import_json: options.import_json,
            indentation: Indentation::Tab,
        }
    }
}

/// Reads one JSON document from `reader` and writes the generated Go file to `writer`
#[derive(Debug)]
pub struct Transmogrifier<R, W> {
    name: String,
    reader: R,
    writer: W,
    options: Options,
}

impl<R: Read, W: Write> Transmogrifier<R, W> {
    pub fn new(name: impl Into<String>, reader: R, writer: W) -> Self {
        Transmogrifier {
            name: name.into(),
            reader,
            writer,
            options: Options::default(),
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn set_package(&mut self, package: impl Into<String>) {
        self.options.package = package.into();
    }

    pub fn set_import_json(&mut self, import_json: bool) {
        self.options.import_json = import_json;
    }

    /// Read, infer, render and write; the writer is flushed on every exit path
    pub fn run(&mut self) -> Result<()> {
        let result = self.transmogrify();
        let flushed = self.writer.flush();
        result?;
        flushed?;
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn transmogrify(&mut self) -> Result<()> {
        let mut input = Vec::new();
        self.reader.read_to_end(&mut input)?;
        debug!(bytes = input.len(), "read JSON input");

        let schema = infer_from_slice(&self.name, &input)?;
        let target = GoStruct::from(&self.options);

        let mut header = String::new();
        target.write_header(&mut header)?;
        self.writer.write_all(header.as_bytes())?;

        let mut declarations = 0;
        for arni in schema.iter_topdown() {
            let mut declaration = String::new();
            target.write_declaration(&schema, arni, &mut declaration)?;
            self.writer.write_all(declaration.as_bytes())?;
            declarations += 1;
        }
        debug!(
            declarations,
            package = %self.options.package,
            import_json = self.options.import_json,
            "wrote Go declarations"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::Error;

    use std::io;

    const BASIC: &[u8] = include_bytes!("../tests/data/basic.json");
    const EXPECTED_BASIC: &str = "type Basic struct {\n\tBar string `json:\"bar\"`\n\tBaz float64 `json:\"baz\"`\n\tBiz int `json:\"biz\"`\n\tFoo string `json:\"foo\"`\n\tFooBar string `json:\"foo_bar\"`\n}\n";

    #[test]
    fn test_transmogrify() {
        let tests = vec![
            (None, false, format!("package main\n\n{}", EXPECTED_BASIC)),
            (Some("test"), false, format!("package test\n\n{}", EXPECTED_BASIC)),
            (
                None,
                true,
                format!(
                    "package main\n\nimport (\n\t\"encoding/json\"\n)\n\n{}",
                    EXPECTED_BASIC
                ),
            ),
            (
                Some("test"),
                true,
                format!(
                    "package test\n\nimport (\n\t\"encoding/json\"\n)\n\n{}",
                    EXPECTED_BASIC
                ),
            ),
        ];

        for (package, import_json, expected) in tests {
            let mut output = Vec::new();
            let mut calvin = Transmogrifier::new("Basic", BASIC, &mut output);
            if let Some(package) = package {
                calvin.set_package(package);
            }
            calvin.set_import_json(import_json);
            calvin.run().unwrap();
            assert_eq!(String::from_utf8(output).unwrap(), expected);
        }
    }

    #[test]
    fn with_options_replaces_defaults() {
        let options = Options {
            package: "models".to_owned(),
            import_json: true,
        };
        let transmogrifier =
            Transmogrifier::new("Basic", BASIC, Vec::new()).with_options(options.clone());
        assert_eq!(transmogrifier.options(), &options);
    }

    #[test]
    fn malformed_input_is_returned_unmodified() {
        let mut transmogrifier = Transmogrifier::new("Basic", &b"[1, 2, 3]"[..], Vec::new());
        let error = transmogrifier.run().unwrap_err();
        assert!(error.is_malformed_input());
        let (_, output) = transmogrifier.into_inner();
        assert!(output.is_empty());
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "source vanished"))
        }
    }

    #[test]
    fn read_failure_is_io_error() {
        let error = Transmogrifier::new("Basic", FailingReader, Vec::new())
            .run()
            .unwrap_err();
        assert!(matches!(error, Error::Io(_)));
    }

    /// A sink that accepts writes but counts flushes and fails after `limit` bytes
    struct LimitedWriter {
        written: usize,
        limit: usize,
        flushes: usize,
    }

    impl Write for LimitedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written + buf.len() > self.limit {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
            }
            self.written += buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_io_error_and_still_flushes() {
        let writer = LimitedWriter {
            written: 0,
            limit: 16,
            flushes: 0,
        };
        let mut transmogrifier = Transmogrifier::new("Basic", BASIC, writer);
        let error = transmogrifier.run().unwrap_err();
        assert!(error.is_io());
        let (_, writer) = transmogrifier.into_inner();
        assert_eq!(writer.flushes, 1);
        assert_eq!(writer.written, "package main\n\n".len());
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: Options = serde_json::from_str(r#"{"import_json": true}"#).unwrap();
        assert_eq!(options.package, "main");
        assert!(options.import_json);
    }
}
