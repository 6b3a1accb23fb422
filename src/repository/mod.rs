mod actors_repository;
mod error;
mod movies_repository;
mod tickets_repository;

pub use actors_repository::*;
pub use error::*;
pub use movies_repository::*;
pub use tickets_repository::*;
