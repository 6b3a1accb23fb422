use bson::{DateTime, Uuid};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TicketFindEntity {
    pub _id: Uuid,
    pub movie_date: DateTime,
    pub ticket_price: f64,
    pub movie_id: Option<Uuid>,
    pub version: i64,
}
