use crate::domain::role::VerificationStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Organization details a coordinator submits before an admin can approve
/// their account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NgoRegistrationRequest {
    #[validate(length(
        min = 3,
        max = 100,
        message = "Organization name must be 3-100 characters"
    ))]
    pub organization_name: String,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(custom(
        function = "validate_phone",
        message = "Please enter a valid phone number (10-15 digits)"
    ))]
    pub phone_number: String,

    #[validate(custom(
        function = "validate_phone",
        message = "Please enter a valid emergency contact (10-15 digits)"
    ))]
    pub emergency_contact: String,

    #[serde(default)]
    #[validate(length(max = 1000, message = "Description cannot exceed 1000 characters"))]
    pub description: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Mission statement cannot exceed 500 characters"))]
    pub mission_statement: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Contact info cannot exceed 500 characters"))]
    pub contact_info: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_date: Option<String>,
}

/// Optional leading `+`, then 10 to 15 ASCII digits.
fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let digits = value.strip_prefix('+').unwrap_or(value);

    if (10..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("phone"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNgoStatusRequest {
    pub verification_status: VerificationStatus,
}
