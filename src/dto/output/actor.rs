use crate::repository;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Actor {
    pub id: Uuid,
    pub name: String,
}

impl From<repository::Actor> for Actor {
    fn from(value: repository::Actor) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}
