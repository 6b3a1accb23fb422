mod actors_repository;
mod actors_repository_impl;
mod dto;
mod entity;

pub use actors_repository::*;
pub use actors_repository_impl::*;
pub use dto::Actor;
