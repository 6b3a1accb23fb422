mod dto;
mod entity;
mod movies_repository;
mod movies_repository_impl;

pub(super) use entity::MovieFindEntity;
pub(super) use movies_repository_impl::MOVIES;

pub use dto::Movie;
pub use movies_repository::*;
pub use movies_repository_impl::*;
