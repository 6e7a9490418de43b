use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::{Currency, Date};

// Amounts specified as either per-share or total costs are always unsigned. By the time a cost
// reaches this type the booking step has resolved it to a per-unit number.

/// Represents a resolved "cost", which typically belongs to a [Posting](struct.Posting.html).
///
/// <https://docs.google.com/document/d/1wAMVrKIA2qtRGmoVDSUBJGmYZSygUaR0uOMW1GV3YE0/edit#heading=h.mtqrwt24wnzs>
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder, Serialize, Deserialize)]
pub struct Cost<'a> {
    /// Per-unit cost.
    pub number: Decimal,

    /// The type of commodity for this cost.
    pub currency: Currency<'a>,

    /// The date of the lot.
    #[builder(default)]
    #[serde(default)]
    pub date: Option<Date<'a>>,

    /// The label of the lot.
    #[builder(default)]
    #[serde(default)]
    pub label: Option<Cow<'a, str>>,
}
