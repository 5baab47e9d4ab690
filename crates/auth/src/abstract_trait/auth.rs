use async_trait::async_trait;
use serde_json::Value;
use shared::{
    domain::{
        requests::{ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest},
        responses::LoginResponse,
    },
    errors::ServiceError,
};
use std::sync::Arc;

pub type DynAuthClient = Arc<dyn AuthClientTrait + Send + Sync>;

#[async_trait]
pub trait AuthClientTrait {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ServiceError>;

    async fn register(&self, request: &RegisterRequest) -> Result<Value, ServiceError>;

    async fn request_password_reset(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<(), ServiceError>;

    async fn confirm_password_reset(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<(), ServiceError>;

    /// Local only: the backend is not told about the logout.
    fn logout(&self) -> Result<(), ServiceError>;
}
