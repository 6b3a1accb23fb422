mod anti_forgery_tokens;
mod anti_forgery_validator;
mod dto;

pub use anti_forgery_tokens::*;
pub use anti_forgery_validator::*;
