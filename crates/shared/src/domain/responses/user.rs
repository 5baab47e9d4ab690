use crate::domain::role::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Raw role label; accounts with labels this client does not know are
    /// still listed.
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
}

/// Per-role account counts shown on the admin stat cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct RoleBreakdown {
    pub volunteer: usize,
    pub volunteer_leader: usize,
    pub ngo_coordinator: usize,
    pub program_manager: usize,
    pub admin: usize,
    pub total: usize,
}

impl RoleBreakdown {
    /// Accounts with unknown role labels are left out of every bucket and
    /// of the total.
    pub fn from_users(users: &[UserResponse]) -> Self {
        let mut breakdown = RoleBreakdown::default();

        for user in users {
            let Ok(role) = user.role.parse::<Role>() else {
                continue;
            };

            match role {
                Role::Volunteer => breakdown.volunteer += 1,
                Role::VolunteerLeader => breakdown.volunteer_leader += 1,
                Role::NgoCoordinator => breakdown.ngo_coordinator += 1,
                Role::ProgramManager => breakdown.program_manager += 1,
                Role::Admin => breakdown.admin += 1,
            }
            breakdown.total += 1;
        }

        breakdown
    }
}
