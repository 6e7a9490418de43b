use beancount_core::Commodity;

use crate::keys::Positional;
use crate::meta::{normalize, take_decimal_places};
use crate::statements::table;
use crate::{ImportError, ImportSession, RecordBuilder};

impl<'a> RecordBuilder<&'a Commodity<'_>> for ImportSession {
    type Error = ImportError;
    fn build(&mut self, commodity: &'a Commodity<'_>) -> Result<(), Self::Error> {
        let id = self.keys.next_position(Positional::Commodity);
        // decimal_places has its own column and is kept out of the metadata blob.
        let mut meta = commodity.meta.clone();
        let decimal_places = take_decimal_places(&mut meta, &commodity.currency);
        let meta = normalize(&meta)?;
        self.statements.insert(
            table::COMMODITY,
            &[
                ("id", &id),
                ("date", &commodity.date),
                ("currency", &commodity.currency),
                ("decimal_places", &decimal_places),
                ("meta", &meta),
            ],
        );
        Ok(())
    }
}
