//! Minimal CLI: JSON sample → Go struct declarations
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use json2struct::{Options, Transmogrifier};

/// generate Go struct declarations, tagged for encoding/json, from a sample JSON document
#[derive(Parser, Debug)]
#[command(name = "json2struct", version)]
struct CommandLineInterface {
    /// input .json file (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// output .go file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// name of the top-level struct
    #[arg(short, long, default_value = "Root")]
    name: String,

    /// name in the package clause
    #[arg(short, long, default_value = "main")]
    package: String,

    /// import encoding/json after the package clause
    #[arg(long, default_value_t = false)]
    import_json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = CommandLineInterface::parse();

    let reader: Box<dyn Read> = match cli.input.as_ref() {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin()),
    };
    let writer: Box<dyn Write> = match cli.output.as_ref() {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout()),
    };

    let options = Options {
        package: cli.package,
        import_json: cli.import_json,
    };
    Transmogrifier::new(cli.name, reader, writer)
        .with_options(options)
        .run()
        .context("failed to generate Go declarations")?;
    Ok(())
}
