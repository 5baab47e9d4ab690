use super::public::session_view;
use crate::{
    domain::{
        requests::{NgoStatusForm, VolunteerIdQuery},
        response::{AdminView, CoordinatorView, PageView, ProgramManagerView, VolunteerView},
    },
    middleware::{guard::route_guard, validate::SimpleValidatedJson},
    state::AppState,
};
use auth::abstract_trait::DynResourceClient;
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{any, get, post, put},
};
use shared::{
    domain::{
        requests::{CreateOpportunityRequest, RegisterRequest},
        responses::{ApiMessage, RoleBreakdown},
        role::VerificationStatus,
    },
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use tokio::try_join;
use utoipa_axum::router::OpenApiRouter;

pub async fn admin_dashboard_handler(
    State(state): State<Arc<AppState>>,
    Extension(resources): Extension<DynResourceClient>,
) -> Result<impl IntoResponse, HttpError> {
    let (users, ngos) = try_join!(resources.list_volunteers(), resources.list_ngos())?;

    let pending_ngos = ngos.iter().filter(|ngo| ngo.is_pending()).count();

    Ok(Json(PageView {
        page: "admin-dashboard",
        session: session_view(&state),
        notice: None,
        data: AdminView {
            role_breakdown: RoleBreakdown::from_users(&users),
            ngos,
            pending_ngos,
        },
    }))
}

#[utoipa::path(
    put,
    path = "/dashboard/admin/ngos/{id}",
    params(("id" = i64, Path, description = "NGO id")),
    request_body = NgoStatusForm,
    responses(
        (status = 200, description = "Status updated", body = ApiMessage),
        (status = 400, description = "Unknown status", body = ErrorResponse),
        (status = 303, description = "Not logged in as admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_ngo_status_handler(
    Extension(resources): Extension<DynResourceClient>,
    Path(id): Path<i64>,
    SimpleValidatedJson(body): SimpleValidatedJson<NgoStatusForm>,
) -> Result<impl IntoResponse, HttpError> {
    let status = VerificationStatus::parse(&body.verification_status).ok_or_else(|| {
        HttpError::BadRequest(format!(
            "Unknown verification status '{}'",
            body.verification_status
        ))
    })?;

    resources.update_ngo_status(id, status).await?;

    Ok(Json(ApiMessage::success(format!("NGO status set to {status}"))))
}

#[utoipa::path(
    delete,
    path = "/dashboard/admin/ngos/{id}",
    params(("id" = i64, Path, description = "NGO id")),
    responses(
        (status = 200, description = "NGO deleted", body = ApiMessage),
        (status = 404, description = "No such NGO", body = ErrorResponse),
        (status = 303, description = "Not logged in as admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_ngo_handler(
    Extension(resources): Extension<DynResourceClient>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    resources.delete_ngo(id).await?;
    Ok(Json(ApiMessage::success("NGO deleted")))
}

#[utoipa::path(
    post,
    path = "/dashboard/admin/volunteers",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = ApiMessage),
        (status = 400, description = "Invalid form", body = ErrorResponse),
        (status = 409, description = "Username or email already taken", body = ErrorResponse),
        (status = 303, description = "Not logged in as admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_volunteer_handler(
    Extension(resources): Extension<DynResourceClient>,
    SimpleValidatedJson(body): SimpleValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    resources.create_volunteer(&body).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiMessage::success(format!("User {} created", body.username))),
    ))
}

#[utoipa::path(
    delete,
    path = "/dashboard/admin/volunteers",
    params(VolunteerIdQuery),
    responses(
        (status = 200, description = "User deleted", body = ApiMessage),
        (status = 404, description = "No such user", body = ErrorResponse),
        (status = 303, description = "Not logged in as admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_volunteer_handler(
    Extension(resources): Extension<DynResourceClient>,
    Query(query): Query<VolunteerIdQuery>,
) -> Result<impl IntoResponse, HttpError> {
    resources.delete_volunteer(query.id).await?;
    Ok(Json(ApiMessage::success("User deleted")))
}

pub async fn volunteer_dashboard_handler(
    State(state): State<Arc<AppState>>,
    Extension(resources): Extension<DynResourceClient>,
) -> Result<impl IntoResponse, HttpError> {
    let opportunities = resources.list_opportunities().await?;

    Ok(Json(PageView {
        page: "volunteer-dashboard",
        session: session_view(&state),
        notice: None,
        data: VolunteerView { opportunities },
    }))
}

pub async fn coordinator_dashboard_handler(
    State(state): State<Arc<AppState>>,
    Extension(resources): Extension<DynResourceClient>,
) -> Result<impl IntoResponse, HttpError> {
    let (opportunities, ngos) =
        try_join!(resources.list_opportunities(), resources.list_ngos())?;

    Ok(Json(PageView {
        page: "ngo-coordinator-dashboard",
        session: session_view(&state),
        notice: None,
        data: CoordinatorView {
            opportunities,
            ngos,
        },
    }))
}

#[utoipa::path(
    post,
    path = "/dashboard/ngo-coordinator/opportunities",
    request_body = CreateOpportunityRequest,
    responses(
        (status = 201, description = "Opportunity posted", body = ApiMessage),
        (status = 400, description = "Invalid form", body = ErrorResponse),
        (status = 303, description = "Not logged in as NGO coordinator")
    ),
    security(("bearer_auth" = [])),
    tag = "NGO Coordinator"
)]
pub async fn create_opportunity_handler(
    Extension(resources): Extension<DynResourceClient>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOpportunityRequest>,
) -> Result<impl IntoResponse, HttpError> {
    resources.create_opportunity(&body).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiMessage::success(format!("Opportunity '{}' posted", body.title))),
    ))
}

pub async fn program_manager_dashboard_handler(
    State(state): State<Arc<AppState>>,
    Extension(resources): Extension<DynResourceClient>,
) -> Result<impl IntoResponse, HttpError> {
    let (opportunities, users) =
        try_join!(resources.list_opportunities(), resources.list_volunteers())?;
    let breakdown = RoleBreakdown::from_users(&users);

    Ok(Json(PageView {
        page: "program-manager-dashboard",
        session: session_view(&state),
        notice: None,
        data: ProgramManagerView {
            opportunities,
            volunteer_count: breakdown.volunteer,
            volunteer_leader_count: breakdown.volunteer_leader,
        },
    }))
}

/// Unlisted `/dashboard/*` paths that got past the guard.
async fn unknown_dashboard_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

pub fn dashboard_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/dashboard", any(unknown_dashboard_handler))
        .route("/dashboard/{*rest}", any(unknown_dashboard_handler))
        .route("/dashboard/admin", get(admin_dashboard_handler))
        .route(
            "/dashboard/admin/ngos/{id}",
            put(update_ngo_status_handler).delete(delete_ngo_handler),
        )
        .route(
            "/dashboard/admin/volunteers",
            post(create_volunteer_handler).delete(delete_volunteer_handler),
        )
        .route("/dashboard/volunteer", get(volunteer_dashboard_handler))
        .route(
            "/dashboard/ngo-coordinator",
            get(coordinator_dashboard_handler),
        )
        .route(
            "/dashboard/ngo-coordinator/opportunities",
            post(create_opportunity_handler),
        )
        .route(
            "/dashboard/program-manager",
            get(program_manager_dashboard_handler),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            route_guard,
        ))
        .layer(Extension(app_state.di_container.resource_client.clone()))
        .with_state(app_state)
}
