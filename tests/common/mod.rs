#![allow(dead_code)]

use bson::doc;
use mongodb::Client;
use reqwest::{redirect::Policy, Response};
use serde_json::Value;
use std::sync::Once;
use uuid::Uuid;

pub const ANTI_FORGERY_COOKIE: &str = "__RequestVerificationToken";
pub const ANTI_FORGERY_HEADER: &str = "RequestVerificationToken";

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("ECINEMA_TICKETS_BIND_ADDRESS").unwrap()
}

///
/// Client that does not follow redirects
/// so the redirect itself can be asserted
///
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .unwrap()
}

pub async fn json(response: Response) -> Value {
    let text = response.text().await.unwrap();
    serde_json::from_str(&text).unwrap()
}

///
/// Fetches form page and returns its body
/// together with the anti-forgery token
///
pub async fn fetch_form(path: &str) -> (Value, String) {
    let response = client()
        .get(format!("http://{}{path}", address()))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body = json(response).await;
    let token = body["request_verification_token"]
        .as_str()
        .unwrap()
        .to_string();

    (body, token)
}

pub async fn post_form(path: &str, token: &str, form: &[(&str, String)]) -> Response {
    client()
        .post(format!("http://{}{path}", address()))
        .header("Cookie", format!("{ANTI_FORGERY_COOKIE}={token}"))
        .header(ANTI_FORGERY_HEADER, token)
        .form(form)
        .send()
        .await
        .unwrap()
}

///
/// Movies are managed outside of this service,
/// tests insert them directly into the database
///
pub async fn insert_movie(movie_name: &str) -> Uuid {
    let connection_string = std::env::var("ECINEMA_TICKETS_DB_CONNECTION_STRING").unwrap();
    let db_name = std::env::var("ECINEMA_TICKETS_DB_NAME").unwrap();

    let client = Client::with_uri_str(connection_string).await.unwrap();
    let id = Uuid::new_v4();
    client
        .database(&db_name)
        .collection::<bson::Document>("movies")
        .insert_one(doc! {
            "_id": bson::Uuid::from(id),
            "movie_name": movie_name,
        })
        .await
        .unwrap();

    id
}
