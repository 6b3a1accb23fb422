mod movie_find_entity;

pub use movie_find_entity::*;
