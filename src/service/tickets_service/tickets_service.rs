use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Find all tickets with their movies.
    /// When filter date is set only tickets scheduled on that day are returned.
    ///
    async fn find_tickets(&self, filter: input::TicketFilter)
        -> Result<Vec<output::Ticket>, Error>;

    ///
    /// Find ticket with its movie
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when
    ///     - id is missing
    ///     - ticket with id does not exist
    ///
    async fn find_ticket(&self, id: Option<Uuid>) -> Result<output::Ticket, Error>;

    ///
    /// Blank create form with all movies and actors to choose from
    ///
    async fn create_ticket_form(&self) -> Result<output::CreateTicketForm, Error>;

    ///
    /// Save new ticket
    ///
    /// ### Returns
    /// - [output::Submission::Accepted] with ID of created ticket
    /// - [output::Submission::Rejected] with the form to display again when
    ///     - movie_date is missing or invalid
    ///     - ticket_price is missing, invalid, negative or too large
    ///     - movie_id is not a valid UUID
    ///
    async fn create_ticket(
        &self,
        ticket: input::CreateTicket,
    ) -> Result<output::Submission<Uuid, output::CreateTicketForm>, Error>;

    ///
    /// Find ticket that is about to be edited
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when
    ///     - id is missing
    ///     - ticket with id does not exist
    ///
    async fn find_ticket_to_edit(&self, id: Option<Uuid>) -> Result<output::Ticket, Error>;

    ///
    /// Update movie_date and ticket_price of the ticket.
    /// Movie of the ticket can't be changed.
    ///
    /// ### Returns
    /// - [output::Submission::Rejected] with the form to display again when
    ///     - movie_date is missing or invalid
    ///     - ticket_price is missing, invalid, negative or too large
    ///     - version is missing or invalid
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when
    ///     - id is not the same as ticket id
    ///     - ticket does not exist
    /// - [Error::ConcurrencyConflict] when
    ///     - ticket was modified since it was read
    ///
    async fn edit_ticket(
        &self,
        id: Uuid,
        ticket: input::EditTicket,
    ) -> Result<output::Submission<(), output::EditTicketForm>, Error>;

    ///
    /// Find ticket that is about to be deleted
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when
    ///     - id is missing
    ///     - ticket with id does not exist
    ///
    async fn find_ticket_to_delete(&self, id: Option<Uuid>) -> Result<output::Ticket, Error>;

    ///
    /// Delete ticket
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when
    ///     - ticket does not exist
    ///
    async fn delete_ticket(&self, id: Uuid) -> Result<(), Error>;
}
