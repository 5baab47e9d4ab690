use crate::{
    abstract_trait::ResourceClientTrait,
    http::{ApiClient, ApiFailure, into_service_error},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use reqwest::Method as HttpMethod;
use serde::de::DeserializeOwned;
use shared::{
    domain::{
        requests::{
            CreateOpportunityRequest, NgoRegistrationRequest, RegisterRequest,
            UpdateNgoStatusRequest,
        },
        responses::{NgoResponse, OpportunityResponse, UserResponse},
        role::VerificationStatus,
    },
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils},
};
use tokio::time::Instant;
use tracing::{error, info};
use validator::Validate;

/// Authenticated calls behind the dashboards: volunteers, NGOs and
/// opportunities.
#[derive(Clone)]
pub struct ResourceService {
    api: ApiClient,
    metrics: Metrics,
}

impl ResourceService {
    pub fn new(api: ApiClient, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("resource_client", registry);

        Self { api, metrics }
    }

    fn record<T>(
        &self,
        start: Instant,
        method: Method,
        operation: &str,
        result: Result<T, ApiFailure>,
        fallback: &str,
    ) -> Result<T, ServiceError> {
        let elapsed = start.elapsed().as_secs_f64();
        match result {
            Ok(value) => {
                info!("✅ {operation} succeeded");
                self.metrics.record(method, StatusUtils::Success, elapsed);
                Ok(value)
            }
            Err(failure) => {
                error!("❌ {operation} failed: {failure}");
                self.metrics.record(method, StatusUtils::Error, elapsed);
                Err(into_service_error(failure, fallback))
            }
        }
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        path: &str,
        operation: &str,
    ) -> Result<Vec<T>, ServiceError> {
        info!("📥 {operation}");
        let start = Instant::now();

        let result = self.api.send_json::<Vec<T>>(self.api.get(path)).await;
        self.record(
            start,
            Method::Get,
            operation,
            result,
            &format!("{operation} failed. Please try again."),
        )
    }
}

#[async_trait]
impl ResourceClientTrait for ResourceService {
    async fn list_volunteers(&self) -> Result<Vec<UserResponse>, ServiceError> {
        self.fetch_list("/volunteers", "List volunteers").await
    }

    async fn create_volunteer(&self, request: &RegisterRequest) -> Result<(), ServiceError> {
        request.validate()?;
        info!("➕ Creating user {}", request.username);
        let start = Instant::now();

        let result = self
            .api
            .send_empty(self.api.post("/volunteers").json(request))
            .await;
        self.record(
            start,
            Method::Post,
            "Create volunteer",
            result,
            "Could not create the user.",
        )
    }

    async fn delete_volunteer(&self, id: i64) -> Result<(), ServiceError> {
        info!("🗑️ Deleting volunteer {id}");
        let start = Instant::now();

        let id = id.to_string();
        let request = self
            .api
            .request_at(HttpMethod::DELETE, &["volunteers", id.as_str()]);
        let result = self.api.send_empty(request).await;
        self.record(
            start,
            Method::Delete,
            "Delete volunteer",
            result,
            "Could not delete the volunteer.",
        )
    }

    async fn list_ngos(&self) -> Result<Vec<NgoResponse>, ServiceError> {
        self.fetch_list("/ngos", "List NGOs").await
    }

    async fn update_ngo_status(
        &self,
        id: i64,
        status: VerificationStatus,
    ) -> Result<(), ServiceError> {
        info!("🏷️ Setting NGO {id} status to {status}");
        let start = Instant::now();

        let body = UpdateNgoStatusRequest {
            verification_status: status,
        };
        let id = id.to_string();
        let request = self
            .api
            .request_at(HttpMethod::PUT, &["ngos", "update", id.as_str()])
            .json(&body);
        let result = self.api.send_empty(request).await;
        self.record(
            start,
            Method::Put,
            "Update NGO status",
            result,
            "Could not update the NGO status.",
        )
    }

    async fn delete_ngo(&self, id: i64) -> Result<(), ServiceError> {
        info!("🗑️ Deleting NGO {id}");
        let start = Instant::now();

        let id = id.to_string();
        let request = self
            .api
            .request_at(HttpMethod::DELETE, &["ngos", id.as_str()]);
        let result = self.api.send_empty(request).await;
        self.record(
            start,
            Method::Delete,
            "Delete NGO",
            result,
            "Could not delete the NGO.",
        )
    }

    async fn submit_ngo_registration(
        &self,
        username: &str,
        request: &NgoRegistrationRequest,
    ) -> Result<(), ServiceError> {
        request.validate()?;
        if username.trim().is_empty() {
            return Err(ServiceError::Validation(
                "Please log in before registering an NGO".to_string(),
            ));
        }

        info!("🏢 Submitting NGO registration for {username}");
        let start = Instant::now();

        let request = self
            .api
            .request_at(HttpMethod::POST, &["register", username])
            .json(request);
        let result = self.api.send_empty(request).await;
        self.record(
            start,
            Method::Post,
            "Submit NGO registration",
            result,
            "Registration failed. Please try again.",
        )
    }

    async fn list_opportunities(&self) -> Result<Vec<OpportunityResponse>, ServiceError> {
        self.fetch_list("/opportunities", "List opportunities").await
    }

    async fn create_opportunity(
        &self,
        request: &CreateOpportunityRequest,
    ) -> Result<(), ServiceError> {
        request.validate()?;
        info!("📌 Creating opportunity {}", request.title);
        let start = Instant::now();

        let result = self
            .api
            .send_empty(self.api.post("/opportunities").json(request))
            .await;
        self.record(
            start,
            Method::Post,
            "Create opportunity",
            result,
            "Could not create the opportunity.",
        )
    }
}
