use bson::Uuid;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ActorFindEntity {
    pub _id: Uuid,
    pub name: String,
}
