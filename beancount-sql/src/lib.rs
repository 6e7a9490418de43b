//! Maps a Beancount [`Ledger`] onto SQL statements that rebuild it in a normalized schema.
//!
//! The statements are meant to be executed in order against the schema in `schema.sql`. They
//! start by clearing every table, so running a newer export over an older import replaces it.
//!
//! ```
//! use beancount_core::{Directive, Ledger, Open};
//! use beancount_sql::{generate, ImportOptions};
//!
//! let ledger = Ledger::builder()
//!     .directives(vec![Directive::Open(
//!         Open::builder()
//!             .date("2020-01-01")
//!             .account("Assets:Bank:Checking")
//!             .build(),
//!     )])
//!     .build();
//! let statements = generate(&ledger, &ImportOptions::default()).unwrap();
//! assert!(statements
//!     .iter()
//!     .any(|s| s.starts_with("INSERT INTO account (id, name, account_type")));
//! ```

use std::io::Write;

use beancount_core::Ledger;

pub use error::ImportError;
pub use keys::{KeyAllocator, POSTING_ID_STRIDE};
pub use pipeline::Stage;
pub use session::{ImportOptions, ImportSession};
pub use statements::Statements;

mod accounts;
mod assertions;
pub mod categories;
mod commodities;
mod documents;
mod error;
pub mod escape;
pub mod keys;
mod lookups;
pub mod meta;
mod pipeline;
mod prices;
mod session;
pub mod statements;
mod transactions;


/// Translates one kind of record into rows, resolving foreign keys along the way.
pub trait RecordBuilder<T> {
    type Error;
    fn build(&mut self, record: T) -> Result<(), Self::Error>;
}

/// Runs every stage over `ledger` and returns the statements in execution order.
pub fn generate(ledger: &Ledger<'_>, options: &ImportOptions) -> Result<Statements, ImportError> {
    let mut session = ImportSession::new(options.clone());
    for stage in Stage::ALL.iter() {
        stage.run(&mut session, ledger)?;
    }
    Ok(session.into_statements())
}

/// Generates the statements for `ledger` and writes them to `w`, one per line.
///
/// Nothing is written if generation fails.
pub fn import<W: Write>(
    w: &mut W,
    ledger: &Ledger<'_>,
    options: &ImportOptions,
) -> Result<(), ImportError> {
    generate(ledger, options)?.write_to(w)?;
    Ok(())
}
