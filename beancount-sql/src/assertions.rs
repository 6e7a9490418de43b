use beancount_core::Balance;

use crate::keys::Positional;
use crate::statements::table;
use crate::{ImportError, ImportSession, RecordBuilder};

impl<'a> RecordBuilder<&'a Balance<'_>> for ImportSession {
    type Error = ImportError;
    fn build(&mut self, balance: &'a Balance<'_>) -> Result<(), Self::Error> {
        let id = self.keys.next_position(Positional::Assertion);
        let account_id = self.keys.account_id(balance.account.name())?;
        self.statements.insert(
            table::ASSERTION,
            &[
                ("id", &id),
                ("date", &balance.date),
                ("account_id", &account_id),
                ("amount_number", &balance.amount.num),
                ("amount_currency", &balance.amount.currency),
            ],
        );
        Ok(())
    }
}
