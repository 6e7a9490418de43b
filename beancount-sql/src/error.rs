use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("an io error occurred")]
    Io(#[from] io::Error),
    #[error("account `{0}` is referenced before it is opened")]
    UnknownAccount(String),
    #[error("transaction {transaction_id} has {count} postings, at most {max} are supported")]
    TooManyPostings {
        transaction_id: i64,
        count: usize,
        max: i64,
    },
    #[error("could not read document `{}`", path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("document `{}` is not inside the document root `{}`", path.display(), root.display())]
    DocumentOutsideRoot { path: PathBuf, root: PathBuf },
    #[error("could not serialize metadata")]
    Meta(#[from] serde_json::Error),
}
