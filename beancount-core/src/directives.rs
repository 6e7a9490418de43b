use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::{Account, Amount, Currency, Date, Flag, Link, Meta, Posting, Tag};

/// A single dated entry of a ledger.
///
/// Serialized with an internal `type` tag, e.g. `{"type": "open", "date": "2014-05-01", ...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Directive<'a> {
    Open(Open<'a>),
    Close(Close<'a>),
    Transaction(Transaction<'a>),
    Balance(Balance<'a>),
    Price(Price<'a>),
    Commodity(Commodity<'a>),
    Document(Document<'a>),
    Pad(Pad<'a>),
    Note(Note<'a>),
    Event(Event<'a>),
}

impl<'a> Directive<'a> {
    pub fn date(&self) -> &Date<'a> {
        use Directive::*;
        match self {
            Open(d) => &d.date,
            Close(d) => &d.date,
            Transaction(d) => &d.date,
            Balance(d) => &d.date,
            Price(d) => &d.date,
            Commodity(d) => &d.date,
            Document(d) => &d.date,
            Pad(d) => &d.date,
            Note(d) => &d.date,
            Event(d) => &d.date,
        }
    }
}

/// Represents an `open` directive, the start of the lifetime of an account.
///
/// ```text
/// 2014-05-01 open Liabilities:CreditCard:CapitalOne     USD
/// ```
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.omdbtbrfqqb>
#[derive(Clone, Debug, PartialEq, TypedBuilder, Serialize, Deserialize)]
pub struct Open<'a> {
    /// Date the account was opened.
    pub date: Date<'a>,

    /// Account being opened.
    pub account: Account<'a>,

    /// Commodities the account is constrained to hold.
    #[builder(default)]
    #[serde(default)]
    pub currencies: Vec<Currency<'a>>,

    #[builder(default)]
    #[serde(default)]
    pub meta: Meta<'a>,
}

/// Represents a `close` directive.  This directive signifies the closing of an account.
///
/// ```text
/// ; Closing credit card after fraud was detected.
/// 2016-11-28 close Liabilities:CreditCard:CapitalOne
/// ```
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.wf248e8stnac>
#[derive(Clone, Debug, PartialEq, TypedBuilder, Serialize, Deserialize)]
pub struct Close<'a> {
    /// Date the account was closed.
    pub date: Date<'a>,

    /// Account being closed.
    pub account: Account<'a>,

    #[builder(default)]
    #[serde(default)]
    pub meta: Meta<'a>,
}

/// Represents a transaction, the most common directive of a ledger.
///
/// ```text
/// 2014-05-05 * "Cafe Mogador" "Lamb tagine with wine" #trip ^invoice-12
///   Liabilities:CreditCard:CapitalOne         -37.45 USD
///   Expenses:Restaurant
/// ```
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.up4dj751q84w>
#[derive(Clone, Debug, PartialEq, TypedBuilder, Serialize, Deserialize)]
pub struct Transaction<'a> {
    /// Date of the transaction.
    pub date: Date<'a>,

    #[builder(default)]
    #[serde(default)]
    pub flag: Flag<'a>,

    #[builder(default)]
    #[serde(default)]
    pub payee: Option<Cow<'a, str>>,

    #[builder(default)]
    #[serde(default)]
    pub narration: Option<Cow<'a, str>>,

    #[builder(default)]
    #[serde(default)]
    pub tags: Vec<Tag<'a>>,

    #[builder(default)]
    #[serde(default)]
    pub links: Vec<Link<'a>>,

    /// Postings in the order they were written.
    #[builder(default)]
    #[serde(default)]
    pub postings: Vec<Posting<'a>>,

    #[builder(default)]
    #[serde(default)]
    pub meta: Meta<'a>,
}

/// Represents a `balance` directive, which is a way for you to input your statement balance into
/// the flow of transactions.
///
/// ```text
/// ; Check cash balances from wallet
/// 2014-08-09 balance Assets:Cash     562.00 USD
/// ```
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.l0pvgeniwvq8>
#[derive(Clone, Debug, PartialEq, TypedBuilder, Serialize, Deserialize)]
pub struct Balance<'a> {
    /// Date of the balance.
    pub date: Date<'a>,

    /// Account to check the balance of.
    pub account: Account<'a>,

    /// Amount to balance.
    pub amount: Amount<'a>,

    #[builder(default)]
    #[serde(default)]
    pub meta: Meta<'a>,
}

/// Represents a `price` directive, the price of a commodity in terms of another at a date.
///
/// ```text
/// 2014-07-09 price HOOL  579.18 USD
/// ```
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.f78ym1dxtemh>
#[derive(Clone, Debug, PartialEq, TypedBuilder, Serialize, Deserialize)]
pub struct Price<'a> {
    pub date: Date<'a>,

    /// The commodity being priced.
    pub currency: Currency<'a>,

    /// Value of one unit of `currency`.
    pub amount: Amount<'a>,

    #[builder(default)]
    #[serde(default)]
    pub meta: Meta<'a>,
}

/// Represents a `commodity` directive, declaring a commodity and attaching metadata to it.
///
/// ```text
/// 1867-07-01 commodity CAD
///   name: "Canadian Dollar"
///   decimal_places: 2
/// ```
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.a3si01ejc035>
#[derive(Clone, Debug, PartialEq, TypedBuilder, Serialize, Deserialize)]
pub struct Commodity<'a> {
    pub date: Date<'a>,

    pub currency: Currency<'a>,

    #[builder(default)]
    #[serde(default)]
    pub meta: Meta<'a>,
}

/// Represents a `document` directive, which associates an external file with an account.
///
/// ```text
/// 2013-11-03 document Liabilities:CreditCard "/home/joe/stmts/apr-2014.pdf"
/// ```
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.w8zkw1qmq0vm>
#[derive(Clone, Debug, PartialEq, TypedBuilder, Serialize, Deserialize)]
pub struct Document<'a> {
    pub date: Date<'a>,

    pub account: Account<'a>,

    /// Location of the file, as resolved by the loader.
    pub path: Cow<'a, str>,

    #[builder(default)]
    #[serde(default)]
    pub meta: Meta<'a>,
}

/// Represents a `pad` directive.
///
/// ```text
/// 2014-06-01 pad Assets:BofA:Checking Equity:Opening-Balances
/// ```
#[derive(Clone, Debug, PartialEq, TypedBuilder, Serialize, Deserialize)]
pub struct Pad<'a> {
    pub date: Date<'a>,

    pub account: Account<'a>,

    pub source_account: Account<'a>,

    #[builder(default)]
    #[serde(default)]
    pub meta: Meta<'a>,
}

/// Represents a `note` directive, a dated comment attached to an account.
#[derive(Clone, Debug, PartialEq, TypedBuilder, Serialize, Deserialize)]
pub struct Note<'a> {
    pub date: Date<'a>,

    pub account: Account<'a>,

    pub comment: Cow<'a, str>,

    #[builder(default)]
    #[serde(default)]
    pub meta: Meta<'a>,
}

/// Represents an `event` directive, the value of a named variable from a date on.
#[derive(Clone, Debug, PartialEq, TypedBuilder, Serialize, Deserialize)]
pub struct Event<'a> {
    pub date: Date<'a>,

    pub name: Cow<'a, str>,

    pub description: Cow<'a, str>,

    #[builder(default)]
    #[serde(default)]
    pub meta: Meta<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn deserialize_tagged_directives() {
        let directives: Vec<Directive<'static>> = serde_json::from_str(
            r#"[
                {"type": "open", "date": "2014-05-01", "account": "Assets:Cash", "currencies": ["USD"]},
                {"type": "transaction", "date": "2014-05-05", "flag": "*", "narration": "Lunch",
                 "tags": ["food"],
                 "postings": [
                    {"account": "Assets:Cash", "units": {"num": "-12.50", "currency": "USD"}},
                    {"account": "Expenses:Food", "units": {"num": "12.50", "currency": "USD"},
                     "flag": "!"}
                 ]},
                {"type": "note", "date": "2014-05-06", "account": "Assets:Cash", "comment": "hi"}
            ]"#,
        )
        .unwrap();

        assert_eq!(directives.len(), 3);
        assert_eq!(directives[2].date().as_str(), "2014-05-06");
        match &directives[1] {
            Directive::Transaction(txn) => {
                assert_eq!(txn.flag, Flag::Okay);
                assert_eq!(txn.payee, None);
                assert_eq!(txn.postings[0].units.num, Decimal::new(-1250, 2));
                assert_eq!(txn.postings[1].flag, Some(Flag::Warning));
            }
            other => panic!("unexpected directive {:?}", other),
        }
    }

    #[test]
    fn builder_defaults() {
        let open = Open::builder()
            .date("2020-01-01")
            .account("Assets:Bank")
            .build();
        assert!(open.currencies.is_empty());
        assert!(open.meta.is_empty());
    }
}
