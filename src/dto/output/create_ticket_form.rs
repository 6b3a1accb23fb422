use super::{Actor, FieldError, Movie};
use crate::dto::input;
use serde::Serialize;

///
/// Model of the create form.
///
/// Blank when the form is displayed for the first time,
/// holds the user input and errors when it's displayed again after failed validation.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTicketForm {
    pub movie_date: String,
    pub movie_id: String,
    pub ticket_price: String,
    pub all_movies: Vec<Movie>,
    pub all_actors: Vec<Actor>,
    pub errors: Vec<FieldError>,
}

impl CreateTicketForm {
    pub fn rejected(
        ticket: input::CreateTicket,
        all_movies: Vec<Movie>,
        all_actors: Vec<Actor>,
        errors: Vec<FieldError>,
    ) -> Self {
        Self {
            movie_date: ticket.movie_date,
            movie_id: ticket.movie_id,
            ticket_price: ticket.ticket_price,
            all_movies,
            all_actors,
            errors,
        }
    }
}
