use crate::domain::role::VerificationStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Organization record attached to a coordinator's login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NgoProfile {
    #[serde(default)]
    pub organization_name: String,
    /// Raw backend label; see [`NgoProfile::status`].
    #[serde(default)]
    pub verification_status: String,
}

impl NgoProfile {
    pub fn status(&self) -> Option<VerificationStatus> {
        VerificationStatus::parse(&self.verification_status)
    }

    pub fn is_approved(&self) -> bool {
        self.status() == Some(VerificationStatus::Approved)
    }
}

/// Body of a successful `POST /auth/login`. Consumed once by the role router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: String,
    /// Raw role label as issued by the backend.
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ngo_profile: Option<NgoProfile>,
}
