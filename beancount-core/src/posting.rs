use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::account::Account;
use super::amount::Amount;
use super::flags::Flag;
use super::position::Cost;
use super::Meta;

/// Represents a transaction posting.  Postings represent a single amount being deposited to or
/// withdrawn from an account.
///
/// Postings can optionally have a cost, a price, or both:
///
/// ```text
/// 2012-11-03 * "Transfer to account in Canada"
///     Assets:MyBank:Checking            -400.00 USD @ 1.09 CAD
///     Assets:FR:SocGen:Checking          436.01 CAD
/// ```
///
/// Units are always complete here; interpolating missing amounts is the parser's job.
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.mtqrwt24wnzs>
#[derive(Clone, Debug, PartialEq, TypedBuilder, Serialize, Deserialize)]
pub struct Posting<'a> {
    /// Account being posted to.
    pub account: Account<'a>,

    /// The amount being posted.
    pub units: Amount<'a>,

    /// The cost of this posting.
    #[builder(default)]
    #[serde(default)]
    pub cost: Option<Cost<'a>>,

    /// The price of this posting.
    #[builder(default)]
    #[serde(default)]
    pub price: Option<Amount<'a>>,

    #[builder(default)]
    #[serde(default)]
    pub flag: Option<Flag<'a>>,

    #[builder(default)]
    #[serde(default)]
    pub meta: Meta<'a>,
}
