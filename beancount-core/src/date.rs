use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "chrono")]
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A directive date, kept in its `YYYY-MM-DD` textual form.
#[derive(Eq, PartialEq, Debug, Clone, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date<'a> {
    s: Cow<'a, str>,
}

impl Date<'_> {
    pub fn as_str(&self) -> &str {
        &self.s
    }
}

impl<'a> From<Cow<'a, str>> for Date<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        Date { s }
    }
}

impl<'a> From<&'a str> for Date<'a> {
    fn from(s: &'a str) -> Self {
        Cow::from(s).into()
    }
}

impl fmt::Display for Date<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.s)
    }
}

#[cfg(feature = "chrono")]
impl From<NaiveDate> for Date<'static> {
    fn from(d: NaiveDate) -> Self {
        Cow::from(d.format("%Y-%m-%d").to_string()).into()
    }
}

#[cfg(feature = "chrono")]
#[test]
fn test_date_from_chrono() {
    assert_eq!(
        Date::from(chrono::NaiveDate::from_ymd_opt(2020, 5, 5).unwrap()),
        Date::from("2020-05-05")
    );
}
