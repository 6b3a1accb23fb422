use super::super::entity::{movie_date_from_bson, TicketFindEntity};
use time::PrimitiveDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: Uuid,
    pub movie_date: PrimitiveDateTime,
    pub ticket_price: f32,
    pub movie_id: Option<Uuid>,

    ///
    /// Incremented on every update
    ///
    pub version: i64,
}

impl From<TicketFindEntity> for Ticket {
    fn from(value: TicketFindEntity) -> Self {
        Self {
            id: value._id.into(),
            movie_date: movie_date_from_bson(value.movie_date),
            ticket_price: value.ticket_price as f32,
            movie_id: value.movie_id.map(Uuid::from),
            version: value.version,
        }
    }
}
