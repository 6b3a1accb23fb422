use super::{Movie, MovieFindEntity, MoviesRepository};
use crate::repository;
use axum::async_trait;
use bson::doc;
use futures_util::TryStreamExt;
use mongodb::Database;
use uuid::Uuid;

pub(in crate::repository) const MOVIES: &str = "movies";

pub struct MoviesRepositoryImpl {
    database: Database,
}

impl MoviesRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl MoviesRepository for MoviesRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Movie>, repository::Error> {
        let movies = self
            .database
            .collection::<MovieFindEntity>(MOVIES)
            .find(doc! {})
            .await?
            .map_ok(Movie::from)
            .try_collect()
            .await?;

        Ok(movies)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Movie>, repository::Error> {
        let movie = self
            .database
            .collection::<MovieFindEntity>(MOVIES)
            .find_one(doc! {
                "_id": bson::Uuid::from(id),
            })
            .await?
            .map(Movie::from);

        Ok(movie)
    }
}
