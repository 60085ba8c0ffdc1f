//! `json-pointer`: look up a JSON Pointer (RFC 6901) in a document.
//!
//! Usage:
//!   json-pointer '<pointer>' [--doc FILE]
//!
//! The document is read from `--doc`, or from stdin when it is absent.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use jsonpatch::json_cli::{lookup_pointer, OutputFormat};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "json-pointer")]
#[command(about = "Look up a JSON Pointer (RFC 6901) in a JSON document")]
#[command(version)]
struct Cli {
    /// JSON Pointer, e.g. /foo/0 (empty string for the whole document)
    pointer: String,

    /// Input document file (defaults to stdin if not specified)
    #[arg(short, long)]
    doc: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Pretty)]
    format: FormatArg,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Pretty,
    Compact,
}

impl From<FormatArg> for OutputFormat {
    fn from(val: FormatArg) -> Self {
        match val {
            FormatArg::Pretty => OutputFormat::Pretty,
            FormatArg::Compact => OutputFormat::Compact,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .init();

    let doc = match &cli.doc {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read document from stdin")?;
            buf
        }
    };

    tracing::debug!(pointer = %cli.pointer, "looking up pointer");
    let result = lookup_pointer(doc.trim(), &cli.pointer, cli.format.into())?;
    println!("{result}");
    Ok(())
}
