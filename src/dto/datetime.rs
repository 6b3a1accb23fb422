//!
//! Textual formats of dates exchanged with the presentation layer.
//!
//! Movie dates are local (they carry no offset) and use the same layout
//! as HTML `datetime-local` inputs. Seconds and their fraction are optional on input.
//!

use time::{macros::format_description, Date, PrimitiveDateTime};

pub fn parse_movie_date(value: &str) -> Result<PrimitiveDateTime, time::error::Parse> {
    PrimitiveDateTime::parse(
        value.trim(),
        format_description!(
            "[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
        ),
    )
}

pub fn format_movie_date(value: &PrimitiveDateTime) -> Result<String, time::error::Format> {
    value.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second]"
    ))
}

pub fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
}

///
/// Accepts either a date or a movie date, in the latter case only its day is kept
///
pub fn parse_filter_date(value: &str) -> Result<Date, time::error::Parse> {
    parse_date(value).or_else(|_| parse_movie_date(value).map(|movie_date| movie_date.date()))
}
