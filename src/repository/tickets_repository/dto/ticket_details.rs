use super::{super::entity::TicketDetailsFindEntity, Ticket};
use crate::repository::Movie;

///
/// Ticket with its movie loaded
///
#[derive(Debug, Clone, PartialEq)]
pub struct TicketDetails {
    pub ticket: Ticket,
    pub movie: Option<Movie>,
}

impl From<TicketDetailsFindEntity> for TicketDetails {
    fn from(value: TicketDetailsFindEntity) -> Self {
        let (ticket, movie) = value.split();

        Self {
            ticket: Ticket::from(ticket),
            movie: movie.map(Movie::from),
        }
    }
}
