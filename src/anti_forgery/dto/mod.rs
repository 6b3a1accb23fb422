mod anti_forgery_claims;

pub use anti_forgery_claims::*;
