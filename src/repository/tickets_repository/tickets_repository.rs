use super::{Ticket, TicketDetails};
use crate::repository;
use axum::async_trait;
use time::{Date, PrimitiveDateTime};
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Inserts new ticket with version 0
    ///
    async fn insert(
        &self,
        id: Uuid,
        movie_date: PrimitiveDateTime,
        ticket_price: f32,
        movie_id: Option<Uuid>,
    ) -> Result<(), repository::Error>;

    async fn find(&self, id: Uuid) -> Result<Option<Ticket>, repository::Error>;

    async fn find_with_movie(&self, id: Uuid) -> Result<Option<TicketDetails>, repository::Error>;

    ///
    /// Finds all tickets together with their movies.
    /// When movie_date is set only tickets scheduled on that day are returned.
    /// Tickets are sorted by movie date.
    ///
    async fn find_many_with_movie(
        &self,
        movie_date: Option<Date>,
    ) -> Result<Vec<TicketDetails>, repository::Error>;

    ///
    /// Updates movie_date and ticket_price of the ticket
    /// if its version is still equal to version and increments the version
    ///
    /// ### Errors
    /// - [repository::Error::UpdateConflict] when
    ///     - [repository::UpdateConflict::Deleted] ticket does not exist
    ///     - [repository::UpdateConflict::Modified] ticket has different version
    ///
    async fn update(
        &self,
        id: Uuid,
        version: i64,
        movie_date: PrimitiveDateTime,
        ticket_price: f32,
    ) -> Result<(), repository::Error>;

    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentDeleted] when ticket does not exist
    ///
    async fn delete(&self, id: Uuid) -> Result<(), repository::Error>;

    async fn exists(&self, id: Uuid) -> Result<bool, repository::Error>;
}
