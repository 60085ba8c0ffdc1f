//! `json-patch`: apply a JSON Patch (RFC 6902) to a document.
//!
//! Usage:
//!   json-patch '<patch-array-json>' [--doc FILE]
//!   json-patch @patch.json [--doc FILE]
//!
//! The document is read from `--doc`, or from stdin when it is absent.
//!
//! Exit status is 0 on success, 2 when a `test` operation rejected the
//! document, and 1 for every other error.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use jsonpatch::json_cli::{apply_json_patch, CliError, OutputFormat, PatchLimits};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "json-patch")]
#[command(about = "Apply a JSON Patch (RFC 6902) to a JSON document")]
#[command(version)]
struct Cli {
    /// Patch as a JSON array, or @FILE to read it from a file
    patch: String,

    /// Input document file (defaults to stdin if not specified)
    #[arg(short, long)]
    doc: Option<PathBuf>,

    /// Output file (defaults to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Pretty)]
    format: FormatArg,

    /// Reject patches with more operations than this
    #[arg(long)]
    max_ops: Option<usize>,

    /// Reject documents nested deeper than this
    #[arg(long)]
    max_depth: Option<usize>,

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

fn read_patch(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read patch file: {path}")),
        None => Ok(arg.to_string()),
    }
}

fn read_doc(doc: Option<&PathBuf>) -> Result<String> {
    match doc {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read document from stdin")?;
            Ok(buf)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let patch = read_patch(&cli.patch)?;
    let doc = read_doc(cli.doc.as_ref())?;
    let limits = PatchLimits {
        max_ops: cli.max_ops,
        max_depth: cli.max_depth,
    };

    let result = apply_json_patch(doc.trim(), patch.trim(), &limits, cli.format.into())?;

    match cli.output {
        Some(path) => fs::write(&path, format!("{result}\n"))
            .with_context(|| format!("Failed to write output: {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(result.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let rejected_by_test = matches!(
                err.downcast_ref::<CliError>(),
                Some(CliError::Patch(failure)) if failure.is_test_failure()
            );
            if rejected_by_test {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
