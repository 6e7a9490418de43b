use std::path::PathBuf;

use clap::Parser;

/// Converts a parsed Beancount ledger into SQL statements.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "beanpost-import", version, about, long_about = None)]
pub struct Cli {
    /// Ledger entries as exported by the parser (JSON)
    pub input: PathBuf,

    /// Where to write the SQL statements
    pub output: PathBuf,

    /// Directory document paths are stored relative to [default: first `documents` option]
    #[arg(long, value_name = "DIR")]
    pub document_root: Option<PathBuf>,
}
