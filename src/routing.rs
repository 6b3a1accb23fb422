use crate::{
    anti_forgery::AntiForgeryTokens,
    application::{ApplicationMiddleware, ApplicationState},
    dto::{
        input,
        output::{self, FormPage, Submission},
    },
    error::Error,
    service::tickets_service::TicketsService,
};
use axum::{
    extract::{Path, Query, State},
    http::{header::SET_COOKIE, StatusCode},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
    routing::get,
    Form, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

const TICKETS_INDEX: &str = "/Tickets";

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route(TICKETS_INDEX, get(index))
        .route("/Tickets/Index", get(index))
        .route("/Tickets/Details", get(details))
        .route("/Tickets/Details/:id", get(details))
        .route("/Tickets/Create", get(create_form).post(create))
        .route("/Tickets/Edit", get(edit_form))
        .route("/Tickets/Edit/:id", get(edit_form).post(edit))
        .route("/Tickets/Delete", get(delete_form))
        .route("/Tickets/Delete/:id", get(delete_form).post(delete))
        .route_layer(application_middleware.anti_forgery.clone())
        .layer(application_middleware.body_limit)
}

async fn index(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Query(filter): Query<input::TicketFilter>,
) -> Result<Json<Vec<output::Ticket>>, Error> {
    let tickets = tickets_service.find_tickets(filter).await?;

    Ok(Json(tickets))
}

async fn details(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    id: Option<Path<String>>,
) -> Result<Json<output::Ticket>, Error> {
    let ticket = tickets_service.find_ticket(parse_id(id)).await?;

    Ok(Json(ticket))
}

async fn create_form(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    State(anti_forgery_tokens): State<AntiForgeryTokens>,
) -> Result<Response, Error> {
    let form = tickets_service.create_ticket_form().await?;

    form_page(&anti_forgery_tokens, StatusCode::OK, form)
}

async fn create(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    State(anti_forgery_tokens): State<AntiForgeryTokens>,
    Form(ticket): Form<input::CreateTicket>,
) -> Result<Response, Error> {
    match tickets_service.create_ticket(ticket).await? {
        Submission::Accepted(_) => Ok(Redirect::to(TICKETS_INDEX).into_response()),
        Submission::Rejected(form) => {
            form_page(&anti_forgery_tokens, StatusCode::UNPROCESSABLE_ENTITY, form)
        }
    }
}

async fn edit_form(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    State(anti_forgery_tokens): State<AntiForgeryTokens>,
    id: Option<Path<String>>,
) -> Result<Response, Error> {
    let ticket = tickets_service.find_ticket_to_edit(parse_id(id)).await?;

    form_page(&anti_forgery_tokens, StatusCode::OK, ticket)
}

async fn edit(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    State(anti_forgery_tokens): State<AntiForgeryTokens>,
    Path(id): Path<String>,
    Form(ticket): Form<input::EditTicket>,
) -> Result<Response, Error> {
    let id = Uuid::parse_str(&id).map_err(|_| Error::TicketNotExist)?;

    match tickets_service.edit_ticket(id, ticket).await? {
        Submission::Accepted(()) => Ok(Redirect::to(TICKETS_INDEX).into_response()),
        Submission::Rejected(form) => {
            form_page(&anti_forgery_tokens, StatusCode::UNPROCESSABLE_ENTITY, form)
        }
    }
}

async fn delete_form(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    State(anti_forgery_tokens): State<AntiForgeryTokens>,
    id: Option<Path<String>>,
) -> Result<Response, Error> {
    let ticket = tickets_service.find_ticket_to_delete(parse_id(id)).await?;

    form_page(&anti_forgery_tokens, StatusCode::OK, ticket)
}

async fn delete(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(id): Path<String>,
) -> Result<Redirect, Error> {
    let id = Uuid::parse_str(&id).map_err(|_| Error::TicketNotExist)?;

    tickets_service.delete_ticket(id).await?;

    Ok(Redirect::to(TICKETS_INDEX))
}

/// Ids that cannot be parsed are treated like missing ones
fn parse_id(id: Option<Path<String>>) -> Option<Uuid> {
    id.and_then(|Path(id)| Uuid::parse_str(&id).ok())
}

///
/// Renders form model with a fresh anti-forgery token,
/// the same token is also handed over in a cookie
///
fn form_page<T: Serialize>(
    anti_forgery_tokens: &AntiForgeryTokens,
    status: StatusCode,
    form: T,
) -> Result<Response, Error> {
    let request_verification_token = anti_forgery_tokens.issue()?;
    let cookie = AntiForgeryTokens::cookie(&request_verification_token);

    let page = FormPage {
        request_verification_token,
        form,
    };

    Ok((status, AppendHeaders([(SET_COOKIE, cookie)]), Json(page)).into_response())
}
