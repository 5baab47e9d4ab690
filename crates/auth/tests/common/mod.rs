#![allow(dead_code)]

use auth::{
    abstract_trait::{CredentialStoreTrait, DynCredentialStore},
    cache::MemoryCredentialStore,
    di::{DependenciesInject, DependenciesInjectDeps},
};
use axum::{
    Json, Router,
    extract::{Path, Request, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use parking_lot::Mutex;
use prometheus_client::registry::Registry;
use serde_json::{Value, json};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::{net::TcpListener, time::sleep};

/// How long the backend takes to answer a login for `sloth`.
pub const SLOW_LOGIN_DELAY: Duration = Duration::from_secs(17);

/// One request as seen by the mock backend.
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

#[derive(Clone, Default)]
pub struct Recorder {
    seen: Arc<Mutex<Vec<Seen>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

impl Recorder {
    pub fn requests(&self) -> Vec<Seen> {
        self.seen.lock().clone()
    }

    pub fn last(&self) -> Option<Seen> {
        self.seen.lock().last().cloned()
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().clone()
    }
}

pub struct MockBackend {
    pub addr: SocketAddr,
    pub recorder: Recorder,
}

impl MockBackend {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

async fn record(State(recorder): State<Recorder>, request: Request, next: Next) -> Response {
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    recorder.seen.lock().push(Seen {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        authorization,
    });

    next.run(request).await
}

async fn login(Json(body): Json<Value>) -> Response {
    let username = body["username"].as_str().unwrap_or_default();
    let password = body["passwordHash"].as_str().unwrap_or_default();

    match (username, password) {
        ("alice", "h1") => Json(json!({
            "token": "tok123",
            "role": "VOLUNTEER",
            "username": "alice"
        }))
        .into_response(),
        ("carol", _) => Json(json!({
            "token": "tok-carol",
            "role": "NGO_COORDINATOR",
            "username": "carol",
            "ngoProfile": {"organizationName": "Helping Hands", "verificationStatus": "PENDING"}
        }))
        .into_response(),
        ("root", _) => Json(json!({
            "token": "tok-root",
            "role": "ADMIN",
            "username": "root"
        }))
        .into_response(),
        ("mallory", _) => Json(json!({
            "token": "tok-mallory",
            "role": "BOGUS",
            "username": "mallory"
        }))
        .into_response(),
        ("sloth", _) => {
            sleep(SLOW_LOGIN_DELAY).await;
            Json(json!({
                "token": "tok-sloth",
                "role": "VOLUNTEER",
                "username": "sloth"
            }))
            .into_response()
        }
        ("ghost", _) => Json(json!({"token": "", "role": "VOLUNTEER"})).into_response(),
        ("broken", _) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "Database unavailable"})),
        )
            .into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Invalid username or password"})),
        )
            .into_response(),
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    if body["username"] == "taken" {
        return (
            StatusCode::CONFLICT,
            Json(json!({"message": "Username already exists", "field": "username"})),
        )
            .into_response();
    }
    if body["email"] == "dup@example.org" {
        return (
            StatusCode::CONFLICT,
            Json(json!({"message": "Email already registered"})),
        )
            .into_response();
    }

    (
        StatusCode::CREATED,
        Json(json!({"id": 7, "username": body["username"]})),
    )
        .into_response()
}

async fn forgot_password(Json(body): Json<Value>) -> Response {
    if body["email"] == "nobody@example.org" {
        return (StatusCode::NOT_FOUND, "User not found").into_response();
    }
    Json(json!({"message": "OTP sent"})).into_response()
}

async fn reset_password(Json(body): Json<Value>) -> Response {
    if body["otp"] == "000000" {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "Invalid OTP"}))).into_response();
    }
    StatusCode::OK.into_response()
}

async fn volunteers() -> Json<Value> {
    Json(json!([
        {"id": 1, "username": "alice", "email": "alice@example.org", "role": "VOLUNTEER"},
        {"id": 2, "username": "lee", "email": "lee@example.org", "role": "VOLUNTEER_LEADER"},
        {"id": 3, "username": "root", "email": "root@example.org", "role": "ADMIN"}
    ]))
}

async fn create_volunteer(State(recorder): State<Recorder>, Json(body): Json<Value>) -> StatusCode {
    recorder.bodies.lock().push(body);
    StatusCode::CREATED
}

async fn delete_volunteer(Path(id): Path<i64>) -> StatusCode {
    if id == 99 {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn ngos() -> Json<Value> {
    Json(json!([
        {"id": 10, "organizationName": "Helping Hands", "verificationStatus": "PENDING"},
        {"id": 11, "organizationName": "Green Earth", "verificationStatus": "APPROVED"}
    ]))
}

async fn update_ngo(
    State(recorder): State<Recorder>,
    Path(_id): Path<i64>,
    Json(body): Json<Value>,
) -> StatusCode {
    recorder.bodies.lock().push(body);
    StatusCode::OK
}

async fn delete_ngo(Path(id): Path<i64>) -> Response {
    if id == 99 {
        (StatusCode::NOT_FOUND, Json(json!({"message": "NGO not found"}))).into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

async fn register_ngo(
    State(recorder): State<Recorder>,
    Path(username): Path<String>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> StatusCode {
    if !headers.contains_key(AUTHORIZATION) {
        return StatusCode::UNAUTHORIZED;
    }
    body["username"] = Value::String(username);
    recorder.bodies.lock().push(body);
    StatusCode::CREATED
}

async fn opportunities() -> Json<Value> {
    Json(json!([
        {"id": 1, "title": "Beach cleanup", "location": "Bondi"}
    ]))
}

async fn create_opportunity(
    State(recorder): State<Recorder>,
    Json(body): Json<Value>,
) -> StatusCode {
    recorder.bodies.lock().push(body);
    StatusCode::CREATED
}

pub async fn spawn_backend() -> MockBackend {
    let recorder = Recorder::default();

    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/forgot-password", post(forgot_password))
        .route("/reset-password", post(reset_password))
        .route("/volunteers", get(volunteers).post(create_volunteer))
        .route("/volunteers/{id}", delete(delete_volunteer))
        .route("/ngos", get(ngos))
        .route("/ngos/update/{id}", put(update_ngo))
        .route("/ngos/{id}", delete(delete_ngo))
        .route("/register/{username}", post(register_ngo))
        .route("/opportunities", get(opportunities).post(create_opportunity))
        .layer(middleware::from_fn_with_state(recorder.clone(), record))
        .with_state(recorder.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend { addr, recorder }
}

/// An address nothing is listening on.
pub async fn dead_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn wire(base_url: String) -> (DependenciesInject, Arc<MemoryCredentialStore>) {
    let store = Arc::new(MemoryCredentialStore::new());
    let dyn_store: DynCredentialStore = store.clone();
    let mut registry = Registry::default();

    let deps = DependenciesInject::new(
        DependenciesInjectDeps {
            api_base_url: base_url,
            store: dyn_store,
        },
        &mut registry,
    )
    .unwrap();

    (deps, store)
}

pub fn assert_logged_out(store: &dyn CredentialStoreTrait) {
    assert!(store.get_token().is_none());
    assert!(store.get_role().is_none());
    assert!(store.get_username().is_none());
}
