use super::TicketFindEntity;
use crate::repository::movies_repository::MovieFindEntity;
use bson::{DateTime, Uuid};
use serde::Deserialize;

///
/// Ticket joined with its movie by `$lookup` and `$unwind`.
/// `movie` is missing when ticket has no movie or the movie does not exist.
///
#[derive(Deserialize)]
pub struct TicketDetailsFindEntity {
    pub _id: Uuid,
    pub movie_date: DateTime,
    pub ticket_price: f64,
    pub movie_id: Option<Uuid>,
    pub version: i64,

    #[serde(default)]
    pub movie: Option<MovieFindEntity>,
}

impl TicketDetailsFindEntity {
    pub fn split(self) -> (TicketFindEntity, Option<MovieFindEntity>) {
        let ticket = TicketFindEntity {
            _id: self._id,
            movie_date: self.movie_date,
            ticket_price: self.ticket_price,
            movie_id: self.movie_id,
            version: self.version,
        };

        (ticket, self.movie)
    }
}
