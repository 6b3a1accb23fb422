use serde::Deserialize;
use time::Date;

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct TicketFilter {
    ///
    /// Only tickets scheduled on this day are listed
    ///
    #[serde(rename = "filterDate", default, with = "de_date")]
    pub filter_date: Option<Date>,
}

mod de_date {
    //!
    //! Browsers submit an empty value when the date input is cleared.
    //! Empty and unreadable values mean the list is not filtered.
    //!

    use crate::dto::datetime::parse_filter_date;
    use serde::{Deserialize, Deserializer};
    use time::Date;

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Date>, D::Error> {
        let value = Option::<String>::deserialize(d)?;

        let filter_date = match value.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => match parse_filter_date(value) {
                Ok(filter_date) => Some(filter_date),
                Err(err) => {
                    tracing::debug!(value, %err, "ignoring unreadable filter date");
                    None
                }
            },
        };

        Ok(filter_date)
    }
}
