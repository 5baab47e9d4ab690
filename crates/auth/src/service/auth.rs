use crate::{
    abstract_trait::{AuthClientTrait, DynCredentialStore},
    http::{ApiClient, ApiFailure},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use reqwest::StatusCode;
use serde_json::Value;
use shared::{
    domain::{
        requests::{ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest},
        responses::LoginResponse,
        role::Role,
    },
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils},
};
use tokio::time::Instant;
use tracing::{error, info, warn};
use validator::Validate;

const LOGIN_FAILED: &str = "Login failed. Please try again.";
const REGISTER_FAILED: &str = "Registration failed. Please try again.";
const FORGOT_FAILED: &str = "Could not send the reset code. Please try again.";
const RESET_FAILED: &str = "Could not reset the password. Please try again.";
const NETWORK_FAILED: &str = "Network error. Please check your connection.";

pub struct AuthServiceDeps {
    pub api: ApiClient,
    pub store: DynCredentialStore,
}

/// Login, registration and password-reset calls against the backend's
/// auth endpoints. A successful login is persisted in the credential store.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    store: DynCredentialStore,
    metrics: Metrics,
}

impl AuthService {
    pub fn new(deps: AuthServiceDeps, registry: &mut Registry) -> Self {
        let AuthServiceDeps { api, store } = deps;

        let metrics = Metrics::new();
        metrics.register("auth_client", registry);

        Self {
            api,
            store,
            metrics,
        }
    }

    fn complete_success(&self, start: Instant, method: Method, message: &str) {
        info!("✅ {message}");
        self.metrics
            .record(method, StatusUtils::Success, start.elapsed().as_secs_f64());
    }

    fn complete_error(&self, start: Instant, method: Method, err: &ServiceError) {
        error!("❌ {err}");
        self.metrics
            .record(method, StatusUtils::Error, start.elapsed().as_secs_f64());
    }

    fn finish<T>(
        &self,
        start: Instant,
        method: Method,
        result: Result<T, ServiceError>,
        message: &str,
    ) -> Result<T, ServiceError> {
        match &result {
            Ok(_) => self.complete_success(start, method, message),
            Err(e) => self.complete_error(start, method, e),
        }
        result
    }

    async fn do_login(&self, request: &LoginRequest) -> Result<LoginResponse, ServiceError> {
        request.validate()?;

        let login: LoginResponse = self
            .api
            .send_json(self.api.post("/auth/login").json(request))
            .await
            .map_err(login_error)?;

        if login.token.is_empty() {
            warn!(
                "Login for {} returned no token, session not saved",
                request.username,
            );
            return Ok(login);
        }

        if let Err(e) = login.role.parse::<Role>() {
            warn!(
                "Login for {} returned {e}, session not saved",
                request.username,
            );
            return Ok(login);
        }

        let username = if login.username.is_empty() {
            request.username.as_str()
        } else {
            login.username.as_str()
        };
        self.store.save(&login.token, &login.role, username)?;

        Ok(login)
    }
}

#[async_trait]
impl AuthClientTrait for AuthService {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ServiceError> {
        info!("🔑 Logging in user: {}", request.username);
        let start = Instant::now();

        let result = self.do_login(request).await;
        self.finish(
            start,
            Method::Post,
            result,
            &format!("User {} logged in", request.username),
        )
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Value, ServiceError> {
        info!("📝 Registering user: {}", request.username);
        let start = Instant::now();

        let result: Result<Value, ServiceError> = async {
            request.validate()?;
            self.api
                .send_value(self.api.post("/auth/register").json(request))
                .await
                .map_err(register_error)
        }
        .await;

        self.finish(
            start,
            Method::Post,
            result,
            &format!("User {} registered", request.username),
        )
    }

    async fn request_password_reset(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<(), ServiceError> {
        info!("📧 Requesting password reset for {}", request.email);
        let start = Instant::now();

        let result: Result<(), ServiceError> = async {
            request.validate()?;
            self.api
                .send_empty(self.api.post("/forgot-password").json(request))
                .await
                .map_err(forgot_password_error)
        }
        .await;

        self.finish(start, Method::Post, result, "Password reset code sent")
    }

    async fn confirm_password_reset(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<(), ServiceError> {
        info!("🔁 Confirming password reset for {}", request.email);
        let start = Instant::now();

        let result: Result<(), ServiceError> = async {
            request.validate()?;
            self.api
                .send_empty(self.api.post("/reset-password").json(request))
                .await
                .map_err(reset_password_error)
        }
        .await;

        self.finish(start, Method::Post, result, "Password reset confirmed")
    }

    fn logout(&self) -> Result<(), ServiceError> {
        info!("🚪 Logging out");
        self.store.clear()?;
        Ok(())
    }
}

fn network_error() -> ServiceError {
    ServiceError::network(NETWORK_FAILED)
}

fn login_error(failure: ApiFailure) -> ServiceError {
    let message = failure.message_or(LOGIN_FAILED);
    match failure {
        ApiFailure::Transport(_) => network_error(),
        ApiFailure::Status { status, .. }
            if matches!(
                status,
                StatusCode::BAD_REQUEST
                    | StatusCode::UNAUTHORIZED
                    | StatusCode::FORBIDDEN
                    | StatusCode::NOT_FOUND
            ) =>
        {
            ServiceError::invalid_credentials(message)
        }
        _ => ServiceError::server(message),
    }
}

fn register_error(failure: ApiFailure) -> ServiceError {
    let message = failure.message_or(REGISTER_FAILED);
    match failure {
        ApiFailure::Transport(_) => network_error(),
        ApiFailure::Status {
            status: StatusCode::CONFLICT,
            field,
            ..
        } => {
            let field = field.or_else(|| infer_conflict_field(&message));
            ServiceError::Conflict { field, message }
        }
        ApiFailure::Status {
            status: StatusCode::BAD_REQUEST,
            ..
        } => ServiceError::Validation(message),
        _ => ServiceError::server(message),
    }
}

fn forgot_password_error(failure: ApiFailure) -> ServiceError {
    let message = failure.message_or(FORGOT_FAILED);
    match failure {
        ApiFailure::Transport(_) => network_error(),
        ApiFailure::Status {
            status: StatusCode::NOT_FOUND,
            ..
        } => ServiceError::NotFound(message),
        ApiFailure::Status {
            status: StatusCode::BAD_REQUEST,
            ..
        } => ServiceError::Validation(message),
        _ => ServiceError::server(message),
    }
}

fn reset_password_error(failure: ApiFailure) -> ServiceError {
    let message = failure.message_or(RESET_FAILED);
    match failure {
        ApiFailure::Transport(_) => network_error(),
        ApiFailure::Status {
            status: StatusCode::NOT_FOUND,
            ..
        } => ServiceError::NotFound(message),
        ApiFailure::Status { status, .. }
            if matches!(
                status,
                StatusCode::BAD_REQUEST
                    | StatusCode::UNAUTHORIZED
                    | StatusCode::GONE
                    | StatusCode::UNPROCESSABLE_ENTITY
            ) =>
        {
            ServiceError::Validation(message)
        }
        _ => ServiceError::server(message),
    }
}

fn infer_conflict_field(message: &str) -> Option<String> {
    let lower = message.to_ascii_lowercase();
    if lower.contains("username") {
        Some("username".to_string())
    } else if lower.contains("email") {
        Some("email".to_string())
    } else {
        None
    }
}
