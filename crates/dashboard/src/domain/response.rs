use auth::guard::RouteGuard;
use serde::Serialize;
use shared::domain::{
    navigation::{AuthState, RouteDecision},
    responses::{NgoResponse, OpportunityResponse, RoleBreakdown},
    role::Role,
};
use utoipa::ToSchema;

/// Where the client should go next, plus an optional transient notice.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NavigationResponse {
    pub redirect: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl From<RouteDecision> for NavigationResponse {
    fn from(decision: RouteDecision) -> Self {
        Self {
            redirect: decision.destination.path().to_string(),
            notice: decision.notice,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl SessionView {
    pub fn from_guard(guard: &RouteGuard, username: Option<String>) -> Self {
        match guard.state() {
            AuthState::Authenticated(role) => Self {
                authenticated: true,
                role: Some(role),
                username,
            },
            AuthState::Unauthenticated => Self {
                authenticated: false,
                role: None,
                username: None,
            },
        }
    }
}

/// Envelope for every rendered page.
#[derive(Debug, Clone, Serialize)]
pub struct PageView<T> {
    pub page: &'static str,
    pub session: SessionView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub data: T,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminView {
    pub role_breakdown: RoleBreakdown,
    pub ngos: Vec<NgoResponse>,
    pub pending_ngos: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct VolunteerView {
    pub opportunities: Vec<OpportunityResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoordinatorView {
    pub opportunities: Vec<OpportunityResponse>,
    pub ngos: Vec<NgoResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgramManagerView {
    pub opportunities: Vec<OpportunityResponse>,
    pub volunteer_count: usize,
    pub volunteer_leader_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterView {
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotFoundView {
    pub path: String,
}
