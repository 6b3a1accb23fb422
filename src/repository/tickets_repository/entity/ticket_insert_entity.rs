use bson::{DateTime, Uuid};
use serde::Serialize;

#[derive(Serialize)]
pub struct TicketInsertEntity {
    pub _id: Uuid,
    pub movie_date: DateTime,
    pub ticket_price: f64,
    pub movie_id: Option<Uuid>,
    pub version: i64,
}
