use beancount_core::Price;

use crate::keys::Positional;
use crate::statements::table;
use crate::{ImportError, ImportSession, RecordBuilder};

impl<'a> RecordBuilder<&'a Price<'_>> for ImportSession {
    type Error = ImportError;
    fn build(&mut self, price: &'a Price<'_>) -> Result<(), Self::Error> {
        let id = self.keys.next_position(Positional::Price);
        self.statements.insert(
            table::PRICE,
            &[
                ("id", &id),
                ("date", &price.date),
                ("currency", &price.currency),
                ("amount_number", &price.amount.num),
                ("amount_currency", &price.amount.currency),
            ],
        );
        Ok(())
    }
}
