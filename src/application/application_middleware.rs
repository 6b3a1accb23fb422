use super::ApplicationEnv;
use crate::anti_forgery::{AntiForgeryTokens, AntiForgeryValidator};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
    validate_request::ValidateRequestHeaderLayer,
};

pub struct ApplicationMiddleware {
    pub anti_forgery: ValidateRequestHeaderLayer<AntiForgeryValidator>,
    pub body_limit: RequestBodyLimitLayer,
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
}

pub fn create_middleware(
    env: &ApplicationEnv,
    anti_forgery_tokens: AntiForgeryTokens,
) -> ApplicationMiddleware {
    let anti_forgery =
        ValidateRequestHeaderLayer::custom(AntiForgeryValidator::new(anti_forgery_tokens));

    let body_limit = RequestBodyLimitLayer::new(env.max_http_content_len);

    let trace = TraceLayer::new_for_http();

    ApplicationMiddleware {
        anti_forgery,
        body_limit,
        trace,
    }
}
