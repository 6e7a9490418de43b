use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

pub use account::Account;
pub use amount::Amount;
pub use date::Date;
pub use directives::*;
pub use flags::Flag;
pub use metadata::{Link, Meta, MetaValue, Tag};
pub use position::Cost;
pub use posting::Posting;

pub mod account;
pub mod amount;
mod date;
pub mod directives;
pub mod flags;
pub mod metadata;
pub mod position;
pub mod posting;

/// Represents the complete ledger consisting of a number of directives.
#[derive(Clone, Debug, PartialEq, TypedBuilder, Serialize, Deserialize)]
pub struct Ledger<'a> {
    /// Directives in file order.
    #[serde(rename = "entries")]
    pub directives: Vec<Directive<'a>>,

    /// Values of the `documents` option, in declaration order.
    #[builder(default)]
    #[serde(default)]
    pub documents: Vec<Cow<'a, str>>,
}

pub type Currency<'a> = Cow<'a, str>;
