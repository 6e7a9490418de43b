//! Loads a ledger exported by the parser, runs the SQL import over it and writes the result.
//!
//! The input is JSON of the form
//!
//! ```text
//! {
//!   "entries": [{"type": "open", "date": "2020-01-01", "account": "Assets:Cash"}, ...],
//!   "documents": ["documents"],
//!   "errors": ["main.beancount:12: Invalid token"]
//! }
//! ```

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use beancount_core::{Directive, Ledger};
use beancount_sql::{generate, ImportOptions, Statements};
use log::{info, warn};
use serde::Deserialize;

pub use cli::Cli;

pub mod cli;

#[derive(Debug, Deserialize)]
struct LedgerFile {
    entries: Vec<Directive<'static>>,
    #[serde(default)]
    documents: Vec<Cow<'static, str>>,
    #[serde(default)]
    errors: Vec<String>,
}

/// A ledger together with the errors the parser reported for it.
#[derive(Debug)]
pub struct LoadedLedger {
    pub ledger: Ledger<'static>,
    pub errors: Vec<String>,
}

/// Result of a completed run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Outcome {
    pub statements: usize,
    pub parse_errors: usize,
}

impl Outcome {
    pub fn success(&self) -> bool {
        self.parse_errors == 0
    }
}

pub fn load(path: &Path) -> Result<LoadedLedger> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let parsed: LedgerFile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read ledger entries from {}", path.display()))?;
    Ok(LoadedLedger {
        ledger: Ledger::builder()
            .directives(parsed.entries)
            .documents(parsed.documents)
            .build(),
        errors: parsed.errors,
    })
}

/// The first `documents` option, resolved against the directory of the ledger file.
///
/// The result is relative when `input` is; [`run`] makes it absolute before importing.
pub fn document_root(input: &Path, ledger: &Ledger<'_>) -> Option<PathBuf> {
    let first = ledger.documents.first()?;
    let base = input.parent().unwrap_or_else(|| Path::new(""));
    Some(base.join(&**first))
}

/// Writes `statements` to `path` through a temporary file in the same directory, so that a
/// failed write never leaves a truncated file behind.
pub fn write_statements(path: &Path, statements: &Statements) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp_file =
        tempfile::NamedTempFile::new_in(parent).context("Failed to create temp file")?;
    {
        let mut writer = BufWriter::new(temp_file.as_file_mut());
        statements
            .write_to(&mut writer)
            .context("Failed to write to temp file")?;
        writer.flush().context("Failed to write to temp file")?;
    }
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist {}", path.display()))?;
    Ok(())
}

/// Parse errors do not stop the import; they are reported and counted in the [`Outcome`].
pub fn run(cli: &Cli) -> Result<Outcome> {
    let loaded = load(&cli.input)?;
    for error in &loaded.errors {
        warn!("{}", error);
    }

    let root = cli
        .document_root
        .clone()
        .or_else(|| document_root(&cli.input, &loaded.ledger))
        .map(|root| {
            std::path::absolute(&root)
                .with_context(|| format!("Failed to resolve document root {}", root.display()))
        })
        .transpose()?;
    let options = ImportOptions::builder().document_root(root).build();

    let statements = generate(&loaded.ledger, &options)
        .with_context(|| format!("Failed to import {}", cli.input.display()))?;
    write_statements(&cli.output, &statements)?;
    info!(
        "wrote {} statements to {}",
        statements.len(),
        cli.output.display()
    );

    Ok(Outcome {
        statements: statements.len(),
        parse_errors: loaded.errors.len(),
    })
}
