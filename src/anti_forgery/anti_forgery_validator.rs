use super::{AntiForgeryTokens, ANTI_FORGERY_COOKIE, ANTI_FORGERY_HEADER};
use anyhow::anyhow;
use axum::{
    body::Body,
    http::{header::COOKIE, HeaderMap, Request, Response, StatusCode},
    response::IntoResponse,
};
use tower_http::validate_request::ValidateRequest;

///
/// Middleware that rejects state changing requests
/// without a valid anti-forgery token.
///
/// Token has to be present both in the cookie and in the header
/// and both values must be equal.
///
#[derive(Clone)]
pub struct AntiForgeryValidator {
    tokens: AntiForgeryTokens,
}

impl AntiForgeryValidator {
    pub fn new(tokens: AntiForgeryTokens) -> Self {
        Self { tokens }
    }

    fn try_validate_headers(&self, headers: &HeaderMap) -> anyhow::Result<()> {
        let Some(header_token) = headers.get(ANTI_FORGERY_HEADER) else {
            return Err(anyhow!("missing {ANTI_FORGERY_HEADER} header"));
        };
        let Ok(header_token) = header_token.to_str() else {
            return Err(anyhow!("illegal character in {ANTI_FORGERY_HEADER} header"));
        };
        let Some(cookie_token) = Self::find_cookie(headers) else {
            return Err(anyhow!("missing {ANTI_FORGERY_COOKIE} cookie"));
        };
        if cookie_token != header_token {
            return Err(anyhow!("cookie and header tokens differ"));
        }

        self.tokens.verify(header_token)?;

        Ok(())
    }

    fn find_cookie(headers: &HeaderMap) -> Option<&str> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|cookie| cookie.trim().split_once('='))
            .find(|(name, _)| *name == ANTI_FORGERY_COOKIE)
            .map(|(_, value)| value)
    }
}

impl<B> ValidateRequest<B> for AntiForgeryValidator {
    type ResponseBody = Body;

    fn validate(&mut self, request: &mut Request<B>) -> Result<(), Response<Self::ResponseBody>> {
        if request.method().is_safe() {
            return Ok(());
        }

        self.try_validate_headers(request.headers()).map_err(|err| {
            tracing::warn!(%err, "anti-forgery error");
            StatusCode::BAD_REQUEST.into_response()
        })
    }
}
