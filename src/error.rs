use crate::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ticket not exist")]
    TicketNotExist,

    #[error("ticket was modified concurrently")]
    ConcurrencyConflict,

    #[error("anti-forgery token error: {0}")]
    AntiForgery(#[from] jsonwebtoken::errors::Error),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::TicketNotExist => StatusCode::NOT_FOUND,
            Error::ConcurrencyConflict => StatusCode::CONFLICT,
            Error::AntiForgery(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}
