//! Tags and links: name-keyed lookup tables joined to transactions.

use crate::escape::quote;
use crate::statements::table;
use crate::ImportSession;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Lookup {
    Tag,
    Link,
}

impl Lookup {
    fn table(self) -> &'static str {
        match self {
            Lookup::Tag => table::TAG,
            Lookup::Link => table::LINK,
        }
    }

    fn association(self) -> &'static str {
        match self {
            Lookup::Tag => table::TRANSACTION_TAG,
            Lookup::Link => table::TRANSACTION_LINK,
        }
    }

    fn foreign_key(self) -> &'static str {
        match self {
            Lookup::Tag => "tag_id",
            Lookup::Link => "link_id",
        }
    }
}

impl ImportSession {
    /// Ensures `name` exists in the lookup table and associates it with the transaction.
    ///
    /// The insert is a no-op when the name already exists; the association resolves the id
    /// by name, so this never needs to know whether the row was new.
    pub(crate) fn associate(&mut self, lookup: Lookup, transaction_id: i64, name: &str) {
        let name = quote(name);
        self.statements.push(format!(
            "INSERT OR IGNORE INTO {} (name) VALUES ({});",
            lookup.table(),
            name
        ));
        self.statements.push(format!(
            "INSERT INTO {} (transaction_id, {}) SELECT {}, id FROM {} WHERE name = {};",
            lookup.association(),
            lookup.foreign_key(),
            transaction_id,
            lookup.table(),
            name
        ));
    }
}

/// Each name once, in first-seen order.
pub(crate) fn distinct<'n, I>(names: I) -> Vec<&'n str>
where
    I: IntoIterator<Item = &'n str>,
{
    let mut seen = Vec::new();
    for name in names {
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}
