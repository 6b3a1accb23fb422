use super::super::entity::MovieFindEntity;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: Uuid,
    pub movie_name: String,
}

impl From<MovieFindEntity> for Movie {
    fn from(value: MovieFindEntity) -> Self {
        Self {
            id: value._id.into(),
            movie_name: value.movie_name,
        }
    }
}
