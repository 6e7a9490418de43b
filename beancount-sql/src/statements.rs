use std::io::{self, Write};

use crate::escape::Literal;

/// Names of the destination tables, quoted where they collide with SQL keywords.
pub mod table {
    pub const ACCOUNT_CATEGORY: &str = "account_category";
    pub const ACCOUNT: &str = "account";
    pub const ACCOUNT_CURRENCY: &str = "account_currency";
    pub const TRANSACTION: &str = "\"transaction\"";
    pub const TAG: &str = "tag";
    pub const TRANSACTION_TAG: &str = "transaction_tag";
    pub const LINK: &str = "link";
    pub const TRANSACTION_LINK: &str = "transaction_link";
    pub const POSTING: &str = "posting";
    pub const ASSERTION: &str = "\"assertion\"";
    pub const PRICE: &str = "price";
    pub const COMMODITY: &str = "commodity";
    pub const DOCUMENT: &str = "document";

    /// Every table, children before the tables they reference.
    pub const CLEAR_ORDER: [&str; 13] = [
        DOCUMENT,
        POSTING,
        TRANSACTION_LINK,
        TRANSACTION_TAG,
        LINK,
        TAG,
        TRANSACTION,
        PRICE,
        ASSERTION,
        ACCOUNT_CURRENCY,
        ACCOUNT,
        ACCOUNT_CATEGORY,
        COMMODITY,
    ];
}

/// Generated statements, in the order they have to be executed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Statements {
    statements: Vec<String>,
}

impl Statements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<S: Into<String>>(&mut self, statement: S) {
        self.statements.push(statement.into());
    }

    /// Appends an `INSERT` of a single row given as `(column, value)` pairs.
    pub fn insert(&mut self, table: &str, row: &[(&str, &dyn Literal)]) {
        let columns = row.iter().map(|(c, _)| *c).collect::<Vec<_>>().join(", ");
        let values = row
            .iter()
            .map(|(_, v)| v.to_literal())
            .collect::<Vec<_>>()
            .join(", ");
        self.push(format!(
            "INSERT INTO {} ({}) VALUES ({});",
            table, columns, values
        ));
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.statements.iter().map(String::as_str)
    }

    /// Writes one statement per line.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for statement in &self.statements {
            writeln!(w, "{}", statement)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_renders_columns_and_literals() {
        let mut statements = Statements::new();
        let payee: Option<&str> = None;
        statements.insert(
            table::TRANSACTION,
            &[("id", &1i64), ("payee", &payee), ("narration", &"it's")],
        );
        assert_eq!(
            statements.iter().collect::<Vec<_>>(),
            vec![r#"INSERT INTO "transaction" (id, payee, narration) VALUES (1, NULL, 'it''s');"#]
        );
    }

    #[test]
    fn write_keeps_production_order() {
        let mut statements = Statements::new();
        statements.push("DELETE FROM b;");
        statements.push("DELETE FROM a;");
        let mut out = Vec::new();
        statements.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "DELETE FROM b;\nDELETE FROM a;\n");
    }
}
