use super::TicketsService;
use crate::{
    dto::{
        datetime,
        input::{self, FormField},
        output::{self, FieldError, Submission},
    },
    error::Error,
    repository::{self, ActorsRepository, MoviesRepository, TicketsRepository, UpdateConflict},
};
use axum::async_trait;
use std::sync::Arc;
use time::PrimitiveDateTime;
use uuid::Uuid;

pub struct TicketsServiceImpl {
    tickets_repository: Arc<dyn TicketsRepository>,
    movies_repository: Arc<dyn MoviesRepository>,
    actors_repository: Arc<dyn ActorsRepository>,
}

struct ValidCreateTicket {
    movie_date: PrimitiveDateTime,
    ticket_price: f32,
    movie_id: Option<Uuid>,
}

struct ValidEditTicket {
    movie_date: PrimitiveDateTime,
    ticket_price: f32,
    version: i64,
}

impl TicketsServiceImpl {
    pub fn new(
        tickets_repository: Arc<dyn TicketsRepository>,
        movies_repository: Arc<dyn MoviesRepository>,
        actors_repository: Arc<dyn ActorsRepository>,
    ) -> Self {
        Self {
            tickets_repository,
            movies_repository,
            actors_repository,
        }
    }

    async fn find_all_movies(&self) -> Result<Vec<output::Movie>, Error> {
        let movies = self.movies_repository.find_all().await?;

        Ok(movies.into_iter().map(output::Movie::from).collect())
    }

    async fn find_all_actors(&self) -> Result<Vec<output::Actor>, Error> {
        let actors = self.actors_repository.find_all().await?;

        Ok(actors.into_iter().map(output::Actor::from).collect())
    }

    async fn find_ticket_without_movie(&self, id: Option<Uuid>) -> Result<output::Ticket, Error> {
        let id = id.ok_or(Error::TicketNotExist)?;

        let ticket = self
            .tickets_repository
            .find(id)
            .await?
            .ok_or(Error::TicketNotExist)?;

        Ok(ticket.into())
    }

    fn validate_create_ticket(
        ticket: &input::CreateTicket,
    ) -> Result<ValidCreateTicket, Vec<FieldError>> {
        let movie_date = Self::validate_movie_date(&ticket.movie_date);
        let ticket_price = Self::validate_ticket_price(&ticket.ticket_price);
        let movie_id = Self::validate_movie_id(&ticket.movie_id);

        match (movie_date, ticket_price, movie_id) {
            (Ok(movie_date), Ok(ticket_price), Ok(movie_id)) => Ok(ValidCreateTicket {
                movie_date,
                ticket_price,
                movie_id,
            }),
            (movie_date, ticket_price, movie_id) => Err([
                movie_date.err(),
                ticket_price.err(),
                movie_id.err(),
            ]
            .into_iter()
            .flatten()
            .collect()),
        }
    }

    fn validate_edit_ticket(ticket: &input::EditTicket) -> Result<ValidEditTicket, Vec<FieldError>> {
        let movie_date = Self::validate_movie_date(&ticket.movie_date);
        let ticket_price = Self::validate_ticket_price(&ticket.ticket_price);
        let version = Self::validate_version(&ticket.version);

        match (movie_date, ticket_price, version) {
            (Ok(movie_date), Ok(ticket_price), Ok(version)) => Ok(ValidEditTicket {
                movie_date,
                ticket_price,
                version,
            }),
            (movie_date, ticket_price, version) => Err([
                movie_date.err(),
                ticket_price.err(),
                version.err(),
            ]
            .into_iter()
            .flatten()
            .collect()),
        }
    }

    fn validate_movie_date(movie_date: &str) -> Result<PrimitiveDateTime, FieldError> {
        if movie_date.trim().is_empty() {
            return Err(FieldError::new(
                FormField::MovieDate,
                "movie date is required",
            ));
        }

        datetime::parse_movie_date(movie_date)
            .map_err(|_| FieldError::new(FormField::MovieDate, "movie date is invalid"))
    }

    ///
    /// Price is entered with double precision and stored with single precision
    ///
    fn validate_ticket_price(ticket_price: &str) -> Result<f32, FieldError> {
        let ticket_price = ticket_price.trim();
        if ticket_price.is_empty() {
            return Err(FieldError::new(
                FormField::TicketPrice,
                "ticket price is required",
            ));
        }

        let ticket_price = ticket_price
            .parse::<f64>()
            .ok()
            .filter(|ticket_price| ticket_price.is_finite())
            .ok_or(FieldError::new(
                FormField::TicketPrice,
                "ticket price is invalid",
            ))?;

        if ticket_price < 0.0 {
            return Err(FieldError::new(
                FormField::TicketPrice,
                "ticket price cannot be negative",
            ));
        }
        if ticket_price > f64::from(f32::MAX) {
            return Err(FieldError::new(
                FormField::TicketPrice,
                "ticket price is too large",
            ));
        }

        Ok(ticket_price as f32)
    }

    fn validate_movie_id(movie_id: &str) -> Result<Option<Uuid>, FieldError> {
        let movie_id = movie_id.trim();
        if movie_id.is_empty() {
            return Ok(None);
        }

        Uuid::parse_str(movie_id)
            .map(Some)
            .map_err(|_| FieldError::new(FormField::MovieId, "movie id is invalid"))
    }

    fn validate_version(version: &str) -> Result<i64, FieldError> {
        version
            .trim()
            .parse::<i64>()
            .map_err(|_| FieldError::new(FormField::Version, "version is invalid"))
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn find_tickets(
        &self,
        filter: input::TicketFilter,
    ) -> Result<Vec<output::Ticket>, Error> {
        tracing::info!("finding tickets");
        tracing::trace!(?filter);

        let tickets = self
            .tickets_repository
            .find_many_with_movie(filter.filter_date)
            .await?;

        let selected_date = filter.filter_date.map(|date| date.to_string());
        tracing::info!(
            count = tickets.len(),
            selected_date = selected_date.as_deref().unwrap_or("None"),
            "found tickets"
        );

        let tickets = tickets.into_iter().map(output::Ticket::from).collect();

        Ok(tickets)
    }

    async fn find_ticket(&self, id: Option<Uuid>) -> Result<output::Ticket, Error> {
        tracing::info!(?id, "finding ticket");

        let id = id.ok_or(Error::TicketNotExist)?;

        let ticket = self
            .tickets_repository
            .find_with_movie(id)
            .await?
            .ok_or(Error::TicketNotExist)?;

        tracing::info!(
            movie_name = ticket.movie.as_ref().map(|movie| movie.movie_name.as_str()),
            "found ticket"
        );

        Ok(ticket.into())
    }

    async fn create_ticket_form(&self) -> Result<output::CreateTicketForm, Error> {
        tracing::info!("preparing create ticket form");

        Ok(output::CreateTicketForm {
            all_movies: self.find_all_movies().await?,
            all_actors: self.find_all_actors().await?,
            ..Default::default()
        })
    }

    async fn create_ticket(
        &self,
        ticket: input::CreateTicket,
    ) -> Result<Submission<Uuid, output::CreateTicketForm>, Error> {
        tracing::info!("creating ticket");
        tracing::trace!(?ticket);

        let ValidCreateTicket {
            movie_date,
            ticket_price,
            movie_id,
        } = match Self::validate_create_ticket(&ticket) {
            Ok(valid_ticket) => valid_ticket,
            Err(errors) => {
                tracing::info!(?errors, "create ticket form invalid");
                let form = output::CreateTicketForm::rejected(
                    ticket,
                    self.find_all_movies().await?,
                    self.find_all_actors().await?,
                    errors,
                );
                return Ok(Submission::Rejected(form));
            }
        };

        let movie = match movie_id {
            Some(movie_id) => self.movies_repository.find(movie_id).await?,
            None => None,
        };
        if movie.is_none() {
            tracing::debug!(?movie_id, "movie not found, ticket will have no movie");
        }

        let id = Uuid::new_v4();
        self.tickets_repository
            .insert(id, movie_date, ticket_price, movie.map(|movie| movie.id))
            .await?;

        tracing::info!(%id, "created ticket");

        Ok(Submission::Accepted(id))
    }

    async fn find_ticket_to_edit(&self, id: Option<Uuid>) -> Result<output::Ticket, Error> {
        tracing::info!(?id, "finding ticket to edit");

        let ticket = self.find_ticket_without_movie(id).await?;

        tracing::info!("found ticket");

        Ok(ticket)
    }

    async fn edit_ticket(
        &self,
        id: Uuid,
        ticket: input::EditTicket,
    ) -> Result<Submission<(), output::EditTicketForm>, Error> {
        tracing::info!(%id, "editing ticket");
        tracing::trace!(?ticket);

        if Uuid::parse_str(ticket.id.trim()).ok() != Some(id) {
            tracing::info!(ticket_id = %ticket.id, "ticket id does not match");
            return Err(Error::TicketNotExist);
        }

        let ValidEditTicket {
            movie_date,
            ticket_price,
            version,
        } = match Self::validate_edit_ticket(&ticket) {
            Ok(valid_ticket) => valid_ticket,
            Err(errors) => {
                tracing::info!(?errors, "edit ticket form invalid");
                let form = output::EditTicketForm::rejected(ticket, errors);
                return Ok(Submission::Rejected(form));
            }
        };

        self.tickets_repository
            .update(id, version, movie_date, ticket_price)
            .await
            .map_err(|err| match err {
                repository::Error::UpdateConflict(UpdateConflict::Deleted) => {
                    Error::TicketNotExist
                }
                repository::Error::UpdateConflict(UpdateConflict::Modified) => {
                    Error::ConcurrencyConflict
                }
                err => Error::Database(err),
            })?;

        tracing::info!("edited ticket");

        Ok(Submission::Accepted(()))
    }

    async fn find_ticket_to_delete(&self, id: Option<Uuid>) -> Result<output::Ticket, Error> {
        tracing::info!(?id, "finding ticket to delete");

        let ticket = self.find_ticket_without_movie(id).await?;

        tracing::info!("found ticket");

        Ok(ticket)
    }

    async fn delete_ticket(&self, id: Uuid) -> Result<(), Error> {
        tracing::info!(%id, "deleting ticket");

        self.tickets_repository
            .delete(id)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentDeleted => Error::TicketNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!("deleted ticket");

        Ok(())
    }
}
