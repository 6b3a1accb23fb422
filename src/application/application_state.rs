use super::ApplicationEnv;
use crate::{
    anti_forgery::AntiForgeryTokens,
    repository::{ActorsRepositoryImpl, MoviesRepositoryImpl, TicketsRepositoryImpl},
    service::tickets_service::{TicketsService, TicketsServiceImpl},
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tickets_service: Arc<dyn TicketsService>,
    pub anti_forgery_tokens: AntiForgeryTokens,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
    anti_forgery_tokens: AntiForgeryTokens,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let tickets_repository = TicketsRepositoryImpl::new(db.clone()).await?;
    let tickets_repository = Arc::new(tickets_repository);
    let movies_repository = MoviesRepositoryImpl::new(db.clone());
    let movies_repository = Arc::new(movies_repository);
    let actors_repository = ActorsRepositoryImpl::new(db);
    let actors_repository = Arc::new(actors_repository);

    tracing::info!("creating services");
    let tickets_service =
        TicketsServiceImpl::new(tickets_repository, movies_repository, actors_repository);
    let tickets_service = Arc::new(tickets_service);

    Ok((
        ApplicationState {
            tickets_service,
            anti_forgery_tokens,
        },
        ApplicationStateToClose { db_client },
    ))
}
