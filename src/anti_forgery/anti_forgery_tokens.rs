use super::dto::AntiForgeryClaims;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// Name of the cookie that carries the token back to the server
pub const ANTI_FORGERY_COOKIE: &str = "__RequestVerificationToken";

/// Name of the header that carries the token copied from the form
pub const ANTI_FORGERY_HEADER: &str = "RequestVerificationToken";

///
/// Issues and verifies signed anti-forgery tokens.
///
/// Every token is a HS256 JWT with random id and expiration time.
///
#[derive(Clone)]
pub struct AntiForgeryTokens {
    inner: Arc<AntiForgeryTokensInner>,
}

struct AntiForgeryTokensInner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifespan: Duration,
}

impl AntiForgeryTokens {
    pub fn new(key: &[u8], lifespan: Duration) -> Self {
        let inner = AntiForgeryTokensInner {
            encoding_key: EncodingKey::from_secret(key),
            decoding_key: DecodingKey::from_secret(key),
            validation: Validation::new(Algorithm::HS256),
            lifespan,
        };

        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn issue(&self) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = AntiForgeryClaims {
            jti: Uuid::new_v4(),
            exp: (OffsetDateTime::now_utc() + self.inner.lifespan).unix_timestamp(),
        };

        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.inner.encoding_key,
        )
    }

    ///
    /// ### Errors
    /// - when token is malformed, expired or signed with a different key
    ///
    pub fn verify(&self, token: &str) -> Result<(), jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<AntiForgeryClaims>(
            token,
            &self.inner.decoding_key,
            &self.inner.validation,
        )?;

        Ok(())
    }

    ///
    /// Value of the `Set-Cookie` header that hands the token to the browser
    ///
    pub fn cookie(token: &str) -> String {
        format!("{ANTI_FORGERY_COOKIE}={token}; Path=/; HttpOnly; SameSite=Strict")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn issued_token_verified() {
        let tokens = AntiForgeryTokens::new(b"some secret", Duration::minutes(10));

        let token = tokens.issue().unwrap();

        assert!(tokens.verify(&token).is_ok());
    }

    #[test]
    fn issued_tokens_differ() {
        let tokens = AntiForgeryTokens::new(b"some secret", Duration::minutes(10));

        let token_1 = tokens.issue().unwrap();
        let token_2 = tokens.issue().unwrap();

        assert_ne!(token_1, token_2);
    }

    #[test]
    fn expired_token_rejected() {
        // Validation allows 60 seconds of leeway
        let tokens = AntiForgeryTokens::new(b"some secret", Duration::minutes(-5));

        let token = tokens.issue().unwrap();

        assert!(tokens.verify(&token).is_err());
    }

    #[test]
    fn token_signed_with_different_key_rejected() {
        let tokens = AntiForgeryTokens::new(b"some secret", Duration::minutes(10));
        let other_tokens = AntiForgeryTokens::new(b"other secret", Duration::minutes(10));

        let token = other_tokens.issue().unwrap();

        assert!(tokens.verify(&token).is_err());
    }

    #[test]
    fn malformed_token_rejected() {
        let tokens = AntiForgeryTokens::new(b"some secret", Duration::minutes(10));

        assert!(tokens.verify("that's not correct JWT").is_err());
    }

    #[test]
    fn cookie_value() {
        assert_eq!(
            AntiForgeryTokens::cookie("abc"),
            "__RequestVerificationToken=abc; Path=/; HttpOnly; SameSite=Strict"
        );
    }
}
