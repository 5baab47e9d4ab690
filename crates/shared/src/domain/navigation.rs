use crate::domain::role::Role;
use serde::Serialize;
use utoipa::ToSchema;

/// Views the client can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Destination {
    PublicHome,
    Login,
    NgoRegistrationForm,
    AdminDashboard,
    VolunteerDashboard,
    NgoCoordinatorDashboard,
    ProgramManagerDashboard,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::PublicHome => "/",
            Destination::Login => "/login",
            Destination::NgoRegistrationForm => "/NGORegister",
            Destination::AdminDashboard => "/dashboard/admin",
            Destination::VolunteerDashboard => "/dashboard/volunteer",
            Destination::NgoCoordinatorDashboard => "/dashboard/ngo-coordinator",
            Destination::ProgramManagerDashboard => "/dashboard/program-manager",
        }
    }
}

/// Outcome of routing a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RouteDecision {
    pub destination: Destination,
    /// Non-blocking informational notice to show alongside the navigation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl RouteDecision {
    pub fn to(destination: Destination) -> Self {
        Self {
            destination,
            notice: None,
        }
    }

    pub fn with_notice(destination: Destination, notice: impl Into<String>) -> Self {
        Self {
            destination,
            notice: Some(notice.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny { redirect_to: Destination },
}

impl Access {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Access::Allow)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated(Role),
}
