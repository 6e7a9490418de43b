use beancount_core::Transaction;

use crate::keys::KeyAllocator;
use crate::lookups::{distinct, Lookup};
use crate::statements::table;
use crate::{ImportError, ImportSession, RecordBuilder};

/// Requires every posted-to account to be imported already.
impl<'a> RecordBuilder<&'a Transaction<'_>> for ImportSession {
    type Error = ImportError;
    fn build(&mut self, txn: &'a Transaction<'_>) -> Result<(), Self::Error> {
        let id = self.keys.next_transaction();
        KeyAllocator::check_posting_count(id, txn.postings.len())?;

        self.statements.insert(
            table::TRANSACTION,
            &[
                ("id", &id),
                ("flag", &txn.flag),
                ("payee", &txn.payee),
                ("narration", &txn.narration),
            ],
        );

        for tag in distinct(txn.tags.iter().map(|t| &**t)) {
            self.associate(Lookup::Tag, id, tag);
        }
        for link in distinct(txn.links.iter().map(|l| &**l)) {
            self.associate(Lookup::Link, id, link);
        }

        for (index, posting) in txn.postings.iter().enumerate() {
            let account_id = self.keys.account_id(posting.account.name())?;
            let price = posting.price.as_ref();
            let cost = posting.cost.as_ref();
            self.statements.insert(
                table::POSTING,
                &[
                    ("id", &KeyAllocator::posting_id(id, index)),
                    ("date", &txn.date),
                    ("account_id", &account_id),
                    ("transaction_id", &id),
                    ("flag", &posting.flag),
                    ("amount_number", &posting.units.num),
                    ("amount_currency", &posting.units.currency),
                    ("price_number", &price.map(|p| p.num)),
                    ("price_currency", &price.map(|p| &p.currency)),
                    ("cost_number", &cost.map(|c| c.number)),
                    ("cost_currency", &cost.map(|c| &c.currency)),
                    ("cost_date", &cost.and_then(|c| c.date.as_ref())),
                    ("cost_label", &cost.and_then(|c| c.label.as_ref())),
                ],
            );
        }
        Ok(())
    }
}
