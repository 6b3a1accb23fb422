use anyhow::anyhow;
use std::net::SocketAddr;
use time::Duration;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,

    /// Secret used to sign anti-forgery tokens
    pub anti_forgery_key: String,
    pub anti_forgery_token_lifespan: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("ECINEMA_TICKETS_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("ECINEMA_TICKETS_LOG_FILENAME")?;
        let bind_address = Self::env_var("ECINEMA_TICKETS_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("ECINEMA_TICKETS_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("ECINEMA_TICKETS_DB_NAME")?;
        let max_http_content_len =
            Self::env_var("ECINEMA_TICKETS_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let anti_forgery_key = Self::env_var("ECINEMA_TICKETS_ANTI_FORGERY_KEY")?;
        if anti_forgery_key.is_empty() {
            return Err(anyhow!("ECINEMA_TICKETS_ANTI_FORGERY_KEY cannot be empty"));
        }
        let anti_forgery_token_lifespan =
            Self::env_var("ECINEMA_TICKETS_ANTI_FORGERY_TOKEN_LIFESPAN")?.parse::<u32>()?;
        let anti_forgery_token_lifespan =
            Duration::seconds(i64::from(anti_forgery_token_lifespan));

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            max_http_content_len,
            anti_forgery_key,
            anti_forgery_token_lifespan,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
