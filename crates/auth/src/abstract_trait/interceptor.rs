use reqwest::RequestBuilder;
use std::sync::Arc;

pub type DynRequestInterceptor = Arc<dyn RequestInterceptor + Send + Sync>;

/// A stage every outgoing backend request passes through before it is sent.
pub trait RequestInterceptor {
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder;
}
