mod ticket_details_find_entity;
mod ticket_find_entity;
mod ticket_insert_entity;

pub use ticket_details_find_entity::*;
pub use ticket_find_entity::*;
pub use ticket_insert_entity::*;

use bson::DateTime;
use time::{OffsetDateTime, PrimitiveDateTime};

///
/// Movie dates have no offset, they are stored as if they were UTC
///
pub fn movie_date_to_bson(movie_date: PrimitiveDateTime) -> DateTime {
    DateTime::from(movie_date.assume_utc())
}

pub fn movie_date_from_bson(movie_date: DateTime) -> PrimitiveDateTime {
    let movie_date = OffsetDateTime::from(movie_date);

    PrimitiveDateTime::new(movie_date.date(), movie_date.time())
}
