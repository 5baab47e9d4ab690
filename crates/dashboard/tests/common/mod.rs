#![allow(dead_code)]

use auth::{abstract_trait::DynCredentialStore, cache::MemoryCredentialStore};
use axum::{
    Json, Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get as get_route, post, put},
};
use dashboard::{handler::AppRouter, state::AppState};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceExt;

async fn login(Json(body): Json<Value>) -> Response {
    let (token, role) = match body["username"].as_str().unwrap_or_default() {
        "alice" => ("tok123", "VOLUNTEER"),
        "root" => ("tok-root", "ADMIN"),
        "carol" => ("tok-carol", "NGO_COORDINATOR"),
        "mallory" => ("tok-m", "SUPERUSER"),
        _ => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"message": "Invalid username or password"})),
            )
                .into_response();
        }
    };

    Json(json!({"token": token, "role": role, "username": body["username"]})).into_response()
}

async fn volunteers() -> Json<Value> {
    Json(json!([
        {"id": 1, "username": "alice", "email": "a@example.org", "role": "VOLUNTEER"},
        {"id": 2, "username": "root", "email": "r@example.org", "role": "ADMIN"}
    ]))
}

async fn ngos() -> Json<Value> {
    Json(json!([
        {"id": 10, "organizationName": "Helping Hands", "verificationStatus": "pending"}
    ]))
}

async fn opportunities() -> Json<Value> {
    Json(json!([{"id": 1, "title": "Beach cleanup"}]))
}

pub async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/volunteers", get_route(volunteers))
        .route("/ngos", get_route(ngos))
        .route("/ngos/update/{id}", put(|| async { StatusCode::OK }))
        .route("/opportunities", get_route(opportunities));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

pub fn app(base_url: &str, store: Arc<MemoryCredentialStore>) -> Router {
    let store: DynCredentialStore = store;
    AppRouter::build(AppState::with_store(base_url, store).unwrap())
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Response) {
    let response = app.clone().oneshot(request).await.unwrap();
    (response.status(), response)
}

pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
