//! Two-level account categories derived from account names.
//!
//! Only the second component of a name becomes a category. Deeper components are not
//! represented, and `parent_id` is always left NULL.

use beancount_core::account::SEPARATOR;
use beancount_core::Account;
use log::debug;

use crate::keys::Allocation;
use crate::statements::table;
use crate::ImportSession;

/// Splits an account name into its type and optional category.
///
/// An empty second component counts as no category.
pub fn split_account_name(name: &str) -> (&str, Option<&str>) {
    let mut components = name.split(SEPARATOR);
    let account_type = components.next().unwrap_or_default();
    let category = components.next().filter(|c| !c.is_empty());
    (account_type, category)
}

impl ImportSession {
    /// Id of the account's category, emitting the category row on first use.
    ///
    /// Accounts without a category resolve to `None`, never to an id.
    pub(crate) fn ensure_category(&mut self, account: &Account<'_>) -> Option<i64> {
        let (account_type, category) = split_account_name(account.name());
        let category = category?;
        let allocation = self.keys.category(account_type, category);
        if let Allocation::Created(id) = allocation {
            debug!("new category {} under {}", category, account_type);
            self.statements.insert(
                table::ACCOUNT_CATEGORY,
                &[
                    ("id", &id),
                    ("name", &category),
                    ("parent_id", &None::<i64>),
                    ("account_type", &account_type),
                ],
            );
        }
        Some(allocation.id())
    }
}
