mod anti_forgery;
mod application;
mod dto;
mod error;
mod repository;
mod routing;
mod service;

use anti_forgery::AntiForgeryTokens;
use application::ApplicationEnv;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let anti_forgery_tokens = AntiForgeryTokens::new(
        env.anti_forgery_key.as_bytes(),
        env.anti_forgery_token_lifespan,
    );

    let (state, state_to_close) =
        application::create_state(&env, anti_forgery_tokens.clone()).await?;
    let middleware = application::create_middleware(&env, anti_forgery_tokens);
    let app = application::create_application(state, middleware);

    tracing::info!(address = %env.bind_address, "starting server");
    let listener = TcpListener::bind(env.bind_address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(application::shutdown_signal())
        .await?;

    application::close(state_to_close).await;

    Ok(())
}
