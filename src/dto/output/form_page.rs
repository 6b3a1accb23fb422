use serde::Serialize;

///
/// Form model together with the anti-forgery token
/// that must be sent back with the submission
///
#[derive(Debug, Serialize)]
pub struct FormPage<T> {
    pub request_verification_token: String,
    #[serde(flatten)]
    pub form: T,
}
