//! Rendering of values as SQL literals.

use std::borrow::Cow;

use beancount_core::{Account, Date, Flag};
use rust_decimal::Decimal;

pub const NULL: &str = "NULL";

/// Quotes `s` as a string literal, doubling any embedded single quote.
///
/// Line breaks are spliced in with `char()` so that every statement stays on a single line.
pub fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for c in s.chars() {
        match c {
            '\'' => quoted.push_str("''"),
            '\n' => quoted.push_str("' || char(10) || '"),
            '\r' => quoted.push_str("' || char(13) || '"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

/// A value that can be embedded into a statement.
pub trait Literal {
    fn to_literal(&self) -> String;
}

impl<T: Literal + ?Sized> Literal for &T {
    fn to_literal(&self) -> String {
        (**self).to_literal()
    }
}

impl<T: Literal> Literal for Option<T> {
    fn to_literal(&self) -> String {
        match self {
            Some(value) => value.to_literal(),
            None => NULL.to_string(),
        }
    }
}

impl Literal for str {
    fn to_literal(&self) -> String {
        quote(self)
    }
}

impl Literal for String {
    fn to_literal(&self) -> String {
        quote(self)
    }
}

impl Literal for Cow<'_, str> {
    fn to_literal(&self) -> String {
        quote(self)
    }
}

impl Literal for i64 {
    fn to_literal(&self) -> String {
        self.to_string()
    }
}

impl Literal for u32 {
    fn to_literal(&self) -> String {
        self.to_string()
    }
}

impl Literal for Decimal {
    fn to_literal(&self) -> String {
        self.to_string()
    }
}

impl Literal for Date<'_> {
    fn to_literal(&self) -> String {
        quote(self.as_str())
    }
}

impl Literal for Account<'_> {
    fn to_literal(&self) -> String {
        quote(self.name())
    }
}

impl Literal for Flag<'_> {
    fn to_literal(&self) -> String {
        quote(&self.to_string())
    }
}

/// Binary data, rendered as a blob literal with two lowercase hex digits per byte.
#[derive(Clone, Copy, Debug)]
pub struct Blob<'a>(pub &'a [u8]);

impl Literal for Blob<'_> {
    fn to_literal(&self) -> String {
        format!("X'{}'", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(quote("Joe's Diner"), "'Joe''s Diner'");
        assert_eq!(quote("''"), "''''''");
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn line_breaks_do_not_split_statements() {
        assert_eq!(quote("a\nb"), "'a' || char(10) || 'b'");
        assert_eq!(quote("a\r\n"), "'a' || char(13) || '' || char(10) || ''");
    }

    #[test]
    fn absent_values_are_null_not_empty() {
        let payee: Option<&str> = None;
        assert_eq!(payee.to_literal(), "NULL");
        assert_eq!(Some("").to_literal(), "''");
    }

    #[test]
    fn decimals_keep_their_scale() {
        assert_eq!(Decimal::new(10000, 2).to_literal(), "100.00");
        assert_eq!(Decimal::new(-37, 0).to_literal(), "-37");
    }

    #[test]
    fn blobs_are_hex_encoded() {
        assert_eq!(Blob(&[0x00, 0x0f, 0xab, 0xff]).to_literal(), "X'000fabff'");
        assert_eq!(Blob(&[]).to_literal(), "X''");
    }

    #[test]
    fn flags_use_their_symbol() {
        assert_eq!(Flag::Warning.to_literal(), "'!'");
        assert_eq!(Flag::from("P").to_literal(), "'P'");
    }
}
