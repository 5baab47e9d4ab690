use async_trait::async_trait;
use shared::{
    domain::{
        requests::{CreateOpportunityRequest, NgoRegistrationRequest, RegisterRequest},
        responses::{NgoResponse, OpportunityResponse, UserResponse},
        role::VerificationStatus,
    },
    errors::ServiceError,
};
use std::sync::Arc;

pub type DynResourceClient = Arc<dyn ResourceClientTrait + Send + Sync>;

#[async_trait]
pub trait ResourceClientTrait {
    async fn list_volunteers(&self) -> Result<Vec<UserResponse>, ServiceError>;
    async fn create_volunteer(&self, request: &RegisterRequest) -> Result<(), ServiceError>;
    async fn delete_volunteer(&self, id: i64) -> Result<(), ServiceError>;

    async fn list_ngos(&self) -> Result<Vec<NgoResponse>, ServiceError>;
    async fn update_ngo_status(
        &self,
        id: i64,
        status: VerificationStatus,
    ) -> Result<(), ServiceError>;
    async fn delete_ngo(&self, id: i64) -> Result<(), ServiceError>;
    async fn submit_ngo_registration(
        &self,
        username: &str,
        request: &NgoRegistrationRequest,
    ) -> Result<(), ServiceError>;

    async fn list_opportunities(&self) -> Result<Vec<OpportunityResponse>, ServiceError>;
    async fn create_opportunity(
        &self,
        request: &CreateOpportunityRequest,
    ) -> Result<(), ServiceError>;
}
