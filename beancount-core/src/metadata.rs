use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata that can be attached to other Beancount information.
///
/// Keys are kept sorted so that anything derived from a map is independent of the order in
/// which the parser produced its entries.
pub type Meta<'a> = BTreeMap<Cow<'a, str>, MetaValue<'a>>;

/// An enum of the valid values in a metadata map.
///
/// Richer values (accounts, dates, amounts) arrive in their textual form as `Text`.
#[derive(Eq, PartialEq, Debug, Clone, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue<'a> {
    Bool(bool),
    Text(Cow<'a, str>),
    Number(Decimal),
}

impl<'a> From<&'a str> for MetaValue<'a> {
    fn from(s: &'a str) -> Self {
        MetaValue::Text(Cow::from(s))
    }
}

impl From<Decimal> for MetaValue<'_> {
    fn from(num: Decimal) -> Self {
        MetaValue::Number(num)
    }
}

impl From<bool> for MetaValue<'_> {
    fn from(b: bool) -> Self {
        MetaValue::Bool(b)
    }
}

impl fmt::Display for MetaValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            MetaValue::Text(t) => f.write_str(t),
            MetaValue::Number(num) => write!(f, "{}", num),
        }
    }
}

/// Tag associated with a transaction directive.  Tags allow you to mark a subset of transactions,
/// enabling filtering on a tag(s) when generating a report.
///
/// In the below transaction, #berlin-trip-2014 is the tag:
///
/// ```text
///
/// 2014-04-23 * "Flight to Berlin" #berlin-trip-2014
///     Expenses:Flights              -1230.27 USD
///     Liabilities:CreditCard
/// ```
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.oivvp5olom2v>
pub type Tag<'a> = Cow<'a, str>;

/// Links provide a way to link transactions together.  You may think of the link as a special kind
/// of tag that can be used to group together a set of financially related transactions over time.
///
/// Some transactions that have links:
///
/// ```text
/// 2014-02-05 * "Invoice for January" ^invoice-pepe-studios-jan14
///     Income:Clients:PepeStudios           -8450.00 USD
///     Assets:AccountsReceivable
///
/// 2014-02-20 * "Check deposit - payment from Pepe" ^invoice-pepe-studios-jan14
///     Assets:BofA:Checking                  8450.00 USD
///     Assets:AccountsReceivable
/// ```
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.k4v5vkjukel7>
pub type Link<'a> = Cow<'a, str>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn untagged_values_from_json() {
        let meta: Meta<'static> =
            serde_json::from_str(r#"{"note": "hello", "precise": true, "n": 3}"#).unwrap();
        assert_eq!(meta["note"], MetaValue::from("hello"));
        assert_eq!(meta["precise"], MetaValue::Bool(true));
        assert_eq!(meta["n"], MetaValue::Number(Decimal::from(3)));
    }

    #[test]
    fn numeric_strings_stay_text() {
        let value: MetaValue<'static> = serde_json::from_str(r#""12.50""#).unwrap();
        assert_eq!(value, MetaValue::from("12.50"));
        assert_ne!(value, MetaValue::Number(Decimal::from_str("12.50").unwrap()));
    }
}
