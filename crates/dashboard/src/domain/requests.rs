use serde::Deserialize;
use shared::domain::requests::LoginRequest;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Login form as typed by the user. The password is forwarded to the backend
/// as `passwordHash`.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "Please fill in all fields"))]
    pub username: String,

    #[validate(length(min = 1, message = "Please fill in all fields"))]
    pub password: String,
}

impl From<LoginForm> for LoginRequest {
    fn from(form: LoginForm) -> Self {
        LoginRequest::new(form.username, form.password)
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

/// Admin approve/reject form. The status label is matched case-insensitively.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NgoStatusForm {
    #[validate(length(min = 1, message = "Status is required"))]
    pub verification_status: String,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VolunteerIdQuery {
    pub id: i64,
}
