use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between the components of an account name.
pub const SEPARATOR: char = ':';

/// Represents an account.
///
/// Beancount accumulates commodities in accounts.  An account name is a
/// colon-separated list of capitalized words which begin with a letter, and whose first word is
/// the account type.
///
/// Some example accounts:
///
/// ```text
/// Assets:US:BofA:Checking
/// Liabilities:CA:RBC:CreditCard
/// Equity:Retained-Earnings
/// Income:US:Acme:Salary
/// Expenses:Food:Groceries
/// ```
///
/// Root names can be renamed with options in the source file, so the type is kept verbatim
/// instead of being restricted to the five default names.
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.17ry42rqbuiu>
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Account<'a> {
    name: Cow<'a, str>,
}

impl<'a> Account<'a> {
    pub fn new<S: Into<Cow<'a, str>>>(name: S) -> Self {
        Account { name: name.into() }
    }

    /// The full, colon-separated name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type of the account, i.e. the first component of the name.
    pub fn ty(&self) -> &str {
        self.components().next().unwrap_or_default()
    }

    /// All components of the name, starting with the account type.
    pub fn components(&self) -> std::str::Split<'_, char> {
        self.name.split(SEPARATOR)
    }
}

impl<'a> From<&'a str> for Account<'a> {
    fn from(s: &'a str) -> Self {
        Account::new(s)
    }
}

impl From<String> for Account<'_> {
    fn from(s: String) -> Self {
        Account::new(s)
    }
}

impl fmt::Display for Account<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_is_first_component() {
        let account = Account::from("Assets:US:BofA:Checking");
        assert_eq!(account.ty(), "Assets");
        assert_eq!(
            account.components().collect::<Vec<_>>(),
            vec!["Assets", "US", "BofA", "Checking"]
        );
    }

    #[test]
    fn single_component_account() {
        let account = Account::from("Equity");
        assert_eq!(account.ty(), "Equity");
        assert_eq!(account.components().count(), 1);
    }

    #[test]
    fn renamed_root_is_kept_verbatim() {
        assert_eq!(Account::from("Actifs:Banque").ty(), "Actifs");
    }
}
