use crate::{
    domain::{
        requests::NoticeQuery,
        response::{NotFoundView, PageView, SessionView},
    },
    state::AppState,
};
use auth::{abstract_trait::DynResourceClient, guard::RouteGuard};
use axum::{
    Extension, Json,
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

pub(super) fn session_view(state: &AppState) -> SessionView {
    SessionView::from_guard(
        &state.di_container.guard,
        state.di_container.store.get_username(),
    )
}

#[utoipa::path(
    get,
    path = "/healthchecker",
    responses(
        (status = 200, description = "Service is up")
    ),
    tag = "Public"
)]
pub async fn health_checker_handler() -> Result<impl IntoResponse, HttpError> {
    const MESSAGE: &str = "Volunteer management dashboard is running";

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "success",
            "message": MESSAGE
        })),
    ))
}

pub async fn home_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NoticeQuery>,
) -> impl IntoResponse {
    Json(PageView {
        page: "home",
        session: session_view(&state),
        notice: query.notice,
        data: (),
    })
}

pub async fn opportunities_handler(
    State(state): State<Arc<AppState>>,
    Extension(resources): Extension<DynResourceClient>,
) -> Result<impl IntoResponse, HttpError> {
    let opportunities = resources.list_opportunities().await?;

    Ok(Json(PageView {
        page: "opportunities",
        session: session_view(&state),
        notice: None,
        data: opportunities,
    }))
}

pub async fn not_found_handler(
    Extension(guard): Extension<RouteGuard>,
    uri: Uri,
) -> impl IntoResponse {
    let session = SessionView::from_guard(&guard, None);

    (
        StatusCode::NOT_FOUND,
        Json(PageView {
            page: "not-found",
            session,
            notice: None,
            data: NotFoundView {
                path: uri.path().to_string(),
            },
        }),
    )
}

pub fn public_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/", get(home_handler))
        .route("/opportunities", get(opportunities_handler))
        .route("/healthchecker", get(health_checker_handler))
        .layer(Extension(app_state.di_container.resource_client.clone()))
        .with_state(app_state)
}
