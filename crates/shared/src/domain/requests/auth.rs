use crate::domain::role::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Please fill in all fields"))]
    pub username: String,

    #[validate(length(min = 1, message = "Please fill in all fields"))]
    pub password_hash: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}

/// Full registration form. Also used by admins creating accounts directly.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password_hash: String,

    pub role: Role,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volunteer_experience: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication_settings: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

impl RegisterRequest {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            first_name: None,
            last_name: None,
            password_hash: password_hash.into(),
            role,
            phone: None,
            location: None,
            skills: None,
            volunteer_experience: None,
            communication_settings: None,
            date_of_birth: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_uses_backend_field_names() {
        let json = serde_json::to_value(LoginRequest::new("alice", "h1")).unwrap();
        assert_eq!(json["username"], "alice");
        assert_eq!(json["passwordHash"], "h1");
    }

    #[test]
    fn empty_login_fields_fail_validation() {
        assert!(LoginRequest::new("", "h1").validate().is_err());
        assert!(LoginRequest::new("alice", "").validate().is_err());
        assert!(LoginRequest::new("alice", "h1").validate().is_ok());
    }

    #[test]
    fn register_request_omits_absent_optionals() {
        let mut request = RegisterRequest::new("bob", "bob@example.org", "pw", Role::Volunteer);
        request.date_of_birth = Some("1990-01-01".into());

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["role"], "VOLUNTEER");
        assert_eq!(json["dateOfBirth"], "1990-01-01");
        assert!(json.get("phone").is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn register_request_rejects_bad_email() {
        let request = RegisterRequest::new("bob", "not-an-email", "pw", Role::Volunteer);
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }
}
