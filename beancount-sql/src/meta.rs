//! Normalization of metadata maps into the JSON stored in `meta` columns.

use beancount_core::{Meta, MetaValue};
use log::warn;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Map, Value};

use crate::ImportError;

/// Keys the loader attaches to every directive to locate it in the source file.
pub const TRANSIENT_KEYS: [&str; 2] = ["filename", "lineno"];

pub const DECIMAL_PLACES: &str = "decimal_places";

/// Serializes `meta` without the transient keys, keys in sorted order.
///
/// An empty map serializes to `{}`.
pub fn normalize(meta: &Meta<'_>) -> Result<String, ImportError> {
    let object = meta
        .iter()
        .filter(|(key, _)| !is_transient(key))
        .map(|(key, value)| (key.to_string(), json_value(value)))
        .collect::<Map<String, Value>>();
    Ok(serde_json::to_string(&Value::Object(object))?)
}

fn is_transient(key: &str) -> bool {
    TRANSIENT_KEYS.contains(&key)
}

// Integral numbers become JSON numbers. Anything with a fractional part is kept as a string so
// that no digits are lost to floating point.
fn json_value(value: &MetaValue<'_>) -> Value {
    match value {
        MetaValue::Bool(b) => Value::Bool(*b),
        MetaValue::Text(t) => Value::String(t.to_string()),
        MetaValue::Number(num) => match (num.fract().is_zero(), num.to_i64()) {
            (true, Some(int)) => Value::from(int),
            _ => Value::String(num.to_string()),
        },
    }
}

/// Removes `decimal_places` from `meta` and returns its value.
///
/// Absent or unusable values count as 0; the latter are logged against `currency`.
pub fn take_decimal_places(meta: &mut Meta<'_>, currency: &str) -> u32 {
    let value = match meta.remove(DECIMAL_PLACES) {
        Some(value) => value,
        None => return 0,
    };
    let places = match &value {
        MetaValue::Number(num) if num.fract().is_zero() => num.to_u32(),
        MetaValue::Text(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    };
    places.unwrap_or_else(|| {
        warn!(
            "commodity {} has an invalid decimal_places value `{}`, using 0",
            currency, value
        );
        0
    })
}
