mod actor_find_entity;

pub use actor_find_entity::*;
