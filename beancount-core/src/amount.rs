use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::Currency;

/// A number of units of a certain commodity.
///
/// Numbers keep the scale they were written with, so `100.00 USD` stays `100.00`.
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder, Serialize, Deserialize)]
pub struct Amount<'a> {
    /// The value of the amount.
    pub num: Decimal,

    /// The commodity of the amount.
    pub currency: Currency<'a>,
}

impl fmt::Display for Amount<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.num, self.currency)
    }
}
