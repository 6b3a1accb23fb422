use super::{entity::ActorFindEntity, Actor, ActorsRepository};
use crate::repository;
use axum::async_trait;
use bson::doc;
use futures_util::TryStreamExt;
use mongodb::Database;

const ACTORS: &str = "actors";

pub struct ActorsRepositoryImpl {
    database: Database,
}

impl ActorsRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl ActorsRepository for ActorsRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Actor>, repository::Error> {
        let actors = self
            .database
            .collection::<ActorFindEntity>(ACTORS)
            .find(doc! {})
            .await?
            .map_ok(Actor::from)
            .try_collect()
            .await?;

        Ok(actors)
    }
}
