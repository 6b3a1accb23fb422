use super::super::entity::ActorFindEntity;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: Uuid,
    pub name: String,
}

impl From<ActorFindEntity> for Actor {
    fn from(value: ActorFindEntity) -> Self {
        Self {
            id: value._id.into(),
            name: value.name,
        }
    }
}
