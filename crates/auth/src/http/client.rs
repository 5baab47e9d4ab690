use super::response::ApiFailure;
use crate::abstract_trait::DynRequestInterceptor;
use anyhow::{Context, Result, ensure};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tracing::debug;

/// Backend client bound to one base URL. Every request built through
/// [`ApiClient::request`] passes through the configured interceptors.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    interceptors: Arc<Vec<DynRequestInterceptor>>,
}

pub struct ApiClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    interceptors: Vec<DynRequestInterceptor>,
}

impl ApiClientBuilder {
    /// Caps every request at `timeout`. Without it requests wait for the
    /// transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn interceptor(mut self, interceptor: DynRequestInterceptor) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let base_url = Url::parse(self.base_url.trim_end_matches('/'))
            .with_context(|| format!("Invalid API base URL: {}", self.base_url))?;
        ensure!(
            !base_url.cannot_be_a_base(),
            "API base URL cannot carry paths: {base_url}",
        );

        let mut http = Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http.build().context("Failed to create HTTP client")?;

        Ok(ApiClient {
            http,
            base_url,
            interceptors: Arc::new(self.interceptors),
        })
    }
}

impl ApiClient {
    pub fn builder(base_url: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder {
            base_url: base_url.into(),
            timeout: None,
            interceptors: Vec::new(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends each segment to the base URL, percent-encoding `/`, `?`, `#`
    /// and the like so a segment can never leave its position in the path.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn url(&self, path: &str) -> Url {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        self.endpoint(&segments)
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request_to(method, self.url(path))
    }

    pub fn request_at(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self.request_to(method, self.endpoint(segments))
    }

    fn request_to(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("➡️ {method} {url}");

        self.interceptors
            .iter()
            .fold(self.http.request(method, url), |req, interceptor| {
                interceptor.intercept(req)
            })
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Sends and returns the response only when its status is 2xx.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, ApiFailure> {
        let response = request.send().await?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ApiFailure::from_response(response).await)
        }
    }

    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiFailure> {
        let bytes = self.send(request).await?.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiFailure::Decode(e.to_string()))
    }

    /// Like [`ApiClient::send_json`] but tolerates an empty success body,
    /// returned as `Value::Null`.
    pub async fn send_value(&self, request: RequestBuilder) -> Result<Value, ApiFailure> {
        let bytes = self.send(request).await?.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| ApiFailure::Decode(e.to_string()))
    }

    /// Sends and discards any body on success.
    pub async fn send_empty(&self, request: RequestBuilder) -> Result<(), ApiFailure> {
        self.send(request).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_without_double_slashes() {
        let client = ApiClient::builder("http://localhost:8080/api/")
            .build()
            .unwrap();

        assert_eq!(client.base_url().as_str(), "http://localhost:8080/api");
        assert_eq!(
            client.url("/login").as_str(),
            "http://localhost:8080/api/login",
        );
        assert_eq!(
            client.url("ngos/3").as_str(),
            "http://localhost:8080/api/ngos/3",
        );
    }

    #[test]
    fn bare_host_base_gets_single_slash() {
        let client = ApiClient::builder("http://localhost:8080").build().unwrap();

        assert_eq!(
            client.url("/auth/login").as_str(),
            "http://localhost:8080/auth/login",
        );
    }

    #[test]
    fn path_segments_are_percent_encoded() {
        let client = ApiClient::builder("http://localhost:8080").build().unwrap();

        let url = client.endpoint(&["register", "team/a?x=1#top"]);

        assert_eq!(url.path(), "/register/team%2Fa%3Fx=1%23top");
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn rejects_unparseable_base_url() {
        assert!(ApiClient::builder("not a url").build().is_err());
    }
}
