use crate::abstract_trait::{DynCredentialStore, RequestInterceptor};
use reqwest::RequestBuilder;
use tracing::debug;

/// Attaches `Authorization: Bearer <token>` when a token is stored. The store
/// is read on every request, so a login or logout takes effect immediately.
pub struct BearerInterceptor {
    store: DynCredentialStore,
}

impl BearerInterceptor {
    pub fn new(store: DynCredentialStore) -> Self {
        Self { store }
    }
}

impl RequestInterceptor for BearerInterceptor {
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder {
        match self.store.get_token() {
            Some(token) => request.bearer_auth(token),
            None => {
                debug!("No stored token, sending request unauthenticated");
                request
            }
        }
    }
}
