use beancount_core::{Close, Open};
use log::warn;

use crate::escape::Literal;
use crate::meta::normalize;
use crate::statements::table;
use crate::{ImportError, ImportSession, RecordBuilder};

impl<'a> RecordBuilder<&'a Open<'_>> for ImportSession {
    type Error = ImportError;
    fn build(&mut self, open: &'a Open<'_>) -> Result<(), Self::Error> {
        let account = &open.account;
        let id = match self.keys.open_account(account.name()) {
            Some(id) => id,
            None => {
                warn!("{} is opened more than once, keeping the first open", account);
                return Ok(());
            }
        };
        let category_id = self.ensure_category(account);
        let meta = normalize(&open.meta)?;
        self.statements.insert(
            table::ACCOUNT,
            &[
                ("id", &id),
                ("name", account),
                ("account_type", &account.ty()),
                ("account_category_id", &category_id),
                ("open_date", &open.date),
                ("meta", &meta),
            ],
        );
        for currency in &open.currencies {
            self.statements.insert(
                table::ACCOUNT_CURRENCY,
                &[("account_id", &id), ("currency", currency)],
            );
        }
        Ok(())
    }
}

/// Close dates are matched by name; this runs after every account row exists.
impl<'a> RecordBuilder<&'a Close<'_>> for ImportSession {
    type Error = ImportError;
    fn build(&mut self, close: &'a Close<'_>) -> Result<(), Self::Error> {
        if !self.keys.contains_account(close.account.name()) {
            warn!("{} is closed but was never opened", close.account);
        }
        self.statements.push(format!(
            "UPDATE {} SET close_date = {} WHERE name = {};",
            table::ACCOUNT,
            close.date.to_literal(),
            close.account.to_literal()
        ));
        Ok(())
    }
}
