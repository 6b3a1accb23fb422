use crate::repository;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: Uuid,
    pub movie_name: String,
}

impl From<repository::Movie> for Movie {
    fn from(value: repository::Movie) -> Self {
        Self {
            id: value.id,
            movie_name: value.movie_name,
        }
    }
}
