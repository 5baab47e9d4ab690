use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use shared::domain::navigation::Access;
use std::sync::Arc;
use tracing::info;

/// Runs the route guard before any `/dashboard/*` handler. A denial answers
/// `303 See Other` to the guard's redirect target.
pub async fn route_guard(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();

    match state.di_container.guard.authorize_path(&path) {
        Some(Access::Deny { redirect_to }) => {
            info!("⛔ {path} denied, redirecting to {}", redirect_to.path());
            Redirect::to(redirect_to.path()).into_response()
        }
        Some(Access::Allow) | None => next.run(req).await,
    }
}
