use super::Movie;
use crate::repository;
use serde::Serialize;
use time::PrimitiveDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticket {
    pub id: Uuid,
    #[serde(with = "se_movie_date")]
    pub movie_date: PrimitiveDateTime,
    pub ticket_price: f32,
    pub movie: Option<Movie>,
    pub version: i64,
}

impl From<repository::Ticket> for Ticket {
    fn from(value: repository::Ticket) -> Self {
        Self {
            id: value.id,
            movie_date: value.movie_date,
            ticket_price: value.ticket_price,
            movie: None,
            version: value.version,
        }
    }
}

impl From<repository::TicketDetails> for Ticket {
    fn from(value: repository::TicketDetails) -> Self {
        Self {
            movie: value.movie.map(Movie::from),
            ..Self::from(value.ticket)
        }
    }
}

mod se_movie_date {
    use crate::dto::datetime::format_movie_date;
    use serde::{Serialize, Serializer};
    use time::PrimitiveDateTime;

    pub fn serialize<S: Serializer>(v: &PrimitiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        let formatted = format_movie_date(v).map_err(serde::ser::Error::custom)?;

        String::serialize(&formatted, s)
    }
}
