use bson::Uuid;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct MovieFindEntity {
    pub _id: Uuid,
    pub movie_name: String,
}
