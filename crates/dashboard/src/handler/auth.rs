use super::public::session_view;
use crate::{
    domain::{
        requests::LoginForm,
        response::{NavigationResponse, PageView, RegisterView},
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use auth::{
    abstract_trait::{DynAuthClient, DynCredentialStore, DynResourceClient},
    router::RoleRouter,
};
use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    domain::{
        navigation::Destination,
        requests::{
            ForgotPasswordRequest, LoginRequest, NgoRegistrationRequest, RegisterRequest,
            ResetPasswordRequest,
        },
        responses::ApiMessage,
        role::Role,
    },
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use tracing::info;
use utoipa_axum::router::OpenApiRouter;

pub async fn login_page_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(PageView {
        page: "login",
        session: session_view(&state),
        notice: None,
        data: (),
    })
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginForm,
    responses(
        (status = 200, description = "Logged in; where to navigate next", body = NavigationResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 401, description = "Invalid credentials or unknown role", body = ErrorResponse),
        (status = 502, description = "Backend failure", body = ErrorResponse),
        (status = 503, description = "Backend unreachable", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login_handler(
    Extension(service): Extension<DynAuthClient>,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginForm>,
) -> Result<impl IntoResponse, HttpError> {
    let request = LoginRequest::from(body);
    let login = service.login(&request).await?;
    let decision = RoleRouter::route(&login)?;

    Ok((StatusCode::OK, Json(NavigationResponse::from(decision))))
}

pub async fn register_page_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let roles = Role::ALL
        .into_iter()
        .filter(|role| *role != Role::Admin)
        .collect();

    Json(PageView {
        page: "register",
        session: session_view(&state),
        notice: None,
        data: RegisterView { roles },
    })
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = NavigationResponse),
        (status = 400, description = "Invalid form", body = ErrorResponse),
        (status = 409, description = "Username or email already taken", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn register_handler(
    Extension(service): Extension<DynAuthClient>,
    SimpleValidatedJson(body): SimpleValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.register(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(NavigationResponse {
            redirect: Destination::Login.path().to_string(),
            notice: Some("Registration successful. Please log in.".to_string()),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/forgot-password",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Reset code sent", body = ApiMessage),
        (status = 404, description = "No account with that email", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn forgot_password_handler(
    Extension(service): Extension<DynAuthClient>,
    SimpleValidatedJson(body): SimpleValidatedJson<ForgotPasswordRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.request_password_reset(&body).await?;
    Ok((
        StatusCode::OK,
        Json(ApiMessage::success("A reset code has been sent to your email")),
    ))
}

#[utoipa::path(
    post,
    path = "/reset-password",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = NavigationResponse),
        (status = 400, description = "Invalid or expired code", body = ErrorResponse),
        (status = 404, description = "No account with that email", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn reset_password_handler(
    Extension(service): Extension<DynAuthClient>,
    SimpleValidatedJson(body): SimpleValidatedJson<ResetPasswordRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.confirm_password_reset(&body).await?;
    Ok((
        StatusCode::OK,
        Json(NavigationResponse {
            redirect: Destination::Login.path().to_string(),
            notice: Some("Password reset successful. Please log in.".to_string()),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 200, description = "Session cleared", body = NavigationResponse)
    ),
    tag = "Auth"
)]
pub async fn logout_handler(
    Extension(service): Extension<DynAuthClient>,
) -> Result<impl IntoResponse, HttpError> {
    service.logout()?;
    Ok(Json(NavigationResponse {
        redirect: Destination::Login.path().to_string(),
        notice: None,
    }))
}

pub async fn ngo_register_page_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(PageView {
        page: "ngo-register",
        session: session_view(&state),
        notice: None,
        data: (),
    })
}

#[utoipa::path(
    post,
    path = "/NGORegister",
    request_body = NgoRegistrationRequest,
    responses(
        (status = 201, description = "Registration submitted for approval", body = NavigationResponse),
        (status = 400, description = "Invalid form or no logged-in user", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Auth"
)]
pub async fn ngo_register_handler(
    Extension(store): Extension<DynCredentialStore>,
    Extension(resources): Extension<DynResourceClient>,
    SimpleValidatedJson(body): SimpleValidatedJson<NgoRegistrationRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let username = store.get_username().unwrap_or_default();
    resources.submit_ngo_registration(&username, &body).await?;

    info!("🏢 NGO {} submitted by {username}", body.organization_name);

    Ok((
        StatusCode::CREATED,
        Json(NavigationResponse {
            redirect: Destination::PublicHome.path().to_string(),
            notice: Some("NGO registration submitted. Awaiting admin approval.".to_string()),
        }),
    ))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/login", get(login_page_handler).post(login_handler))
        .route("/register", get(register_page_handler).post(register_handler))
        .route("/forgot-password", post(forgot_password_handler))
        .route("/reset-password", post(reset_password_handler))
        .route("/logout", post(logout_handler))
        .route(
            "/NGORegister",
            get(ngo_register_page_handler).post(ngo_register_handler),
        )
        .layer(Extension(app_state.di_container.auth_client.clone()))
        .layer(Extension(app_state.di_container.resource_client.clone()))
        .layer(Extension(app_state.di_container.store.clone()))
        .with_state(app_state)
}
