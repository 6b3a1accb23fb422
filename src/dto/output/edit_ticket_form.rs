use super::FieldError;
use crate::dto::input;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EditTicketForm {
    pub id: String,
    pub movie_date: String,
    pub ticket_price: String,
    pub version: String,
    pub errors: Vec<FieldError>,
}

impl EditTicketForm {
    pub fn rejected(ticket: input::EditTicket, errors: Vec<FieldError>) -> Self {
        Self {
            id: ticket.id,
            movie_date: ticket.movie_date,
            ticket_price: ticket.ticket_price,
            version: ticket.version,
            errors,
        }
    }
}
