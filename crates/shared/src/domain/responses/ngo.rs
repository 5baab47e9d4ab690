use crate::domain::role::VerificationStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NgoResponse {
    pub id: i64,
    #[serde(default)]
    pub organization_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_statement: Option<String>,
    #[serde(default)]
    pub verification_status: String,
}

impl NgoResponse {
    pub fn is_pending(&self) -> bool {
        VerificationStatus::parse(&self.verification_status) == Some(VerificationStatus::Pending)
    }
}
