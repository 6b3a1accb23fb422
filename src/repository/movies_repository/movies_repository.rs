use super::Movie;
use crate::repository;
use axum::async_trait;
use uuid::Uuid;

///
/// Read-only access to movies. Movies are managed by other part of the system.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MoviesRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Movie>, repository::Error>;

    async fn find(&self, id: Uuid) -> Result<Option<Movie>, repository::Error>;
}
