use std::fmt;
use std::time::Instant;

use beancount_core::{Directive, Ledger};
use log::info;

use crate::statements::table;
use crate::{ImportError, ImportSession, RecordBuilder};

/// One step of an import. Stages run in the order of [`Stage::ALL`]; each one only reads keys
/// allocated by the stages before it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Stage {
    /// Deletes all rows, children before parents, so that re-importing replaces the data.
    ClearTables,
    /// Accounts, their categories and currencies, from `open` directives.
    Accounts,
    /// Close dates from `close` directives. Requires accounts.
    CloseDates,
    /// Transactions, tags, links and postings. Requires accounts.
    Transactions,
    /// Balance assertions. Requires accounts.
    Balances,
    Prices,
    Commodities,
    /// Document contents. Requires accounts and a configured document root.
    Documents,
}

impl Stage {
    pub const ALL: [Stage; 8] = [
        Stage::ClearTables,
        Stage::Accounts,
        Stage::CloseDates,
        Stage::Transactions,
        Stage::Balances,
        Stage::Prices,
        Stage::Commodities,
        Stage::Documents,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::ClearTables => "clear_tables",
            Stage::Accounts => "import_accounts",
            Stage::CloseDates => "import_close_dates",
            Stage::Transactions => "import_transactions",
            Stage::Balances => "import_balances",
            Stage::Prices => "import_prices",
            Stage::Commodities => "import_commodities",
            Stage::Documents => "import_documents",
        }
    }

    pub fn run(self, session: &mut ImportSession, ledger: &Ledger<'_>) -> Result<(), ImportError> {
        let started = Instant::now();
        let before = session.statements.len();

        match self {
            Stage::ClearTables => {
                for name in table::CLEAR_ORDER.iter() {
                    session.statements.push(format!("DELETE FROM {};", name));
                }
            }
            Stage::Documents if session.options.document_root.is_none() => {
                info!("{}: no document root configured, skipping", self);
                return Ok(());
            }
            _ => {
                for directive in &ledger.directives {
                    self.build(session, directive)?;
                }
            }
        }

        info!(
            "{}: {} statements in {:.2?}",
            self,
            session.statements.len() - before,
            started.elapsed()
        );
        Ok(())
    }

    fn build(
        self,
        session: &mut ImportSession,
        directive: &Directive<'_>,
    ) -> Result<(), ImportError> {
        match (self, directive) {
            (Stage::Accounts, Directive::Open(open)) => session.build(open),
            (Stage::CloseDates, Directive::Close(close)) => session.build(close),
            (Stage::Transactions, Directive::Transaction(txn)) => session.build(txn),
            (Stage::Balances, Directive::Balance(balance)) => session.build(balance),
            (Stage::Prices, Directive::Price(price)) => session.build(price),
            (Stage::Commodities, Directive::Commodity(commodity)) => session.build(commodity),
            (Stage::Documents, Directive::Document(document)) => session.build(document),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
