use super::Actor;
use crate::repository;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActorsRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Actor>, repository::Error>;
}
