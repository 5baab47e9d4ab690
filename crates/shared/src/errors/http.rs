use crate::errors::{
    error::ErrorResponse,
    service::{AuthFailureReason, ServiceError},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    BadGateway(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        let message = err.user_message();

        match err {
            ServiceError::Auth { reason, .. } => match reason {
                AuthFailureReason::InvalidCredentials => HttpError::Unauthorized(message),
                AuthFailureReason::Network => HttpError::ServiceUnavailable(message),
                AuthFailureReason::Server => HttpError::BadGateway(message),
            },
            ServiceError::Conflict { .. } => HttpError::Conflict(message),
            ServiceError::NotFound(_) => HttpError::NotFound(message),
            ServiceError::Validation(_) => HttpError::BadRequest(message),
            ServiceError::UnknownRole(_) => HttpError::Unauthorized(message),
            ServiceError::Storage(_) => HttpError::Internal(message),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            HttpError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_service_errors_to_status_codes() {
        let cases = [
            (
                ServiceError::invalid_credentials("bad"),
                StatusCode::UNAUTHORIZED,
            ),
            (ServiceError::network("down"), StatusCode::SERVICE_UNAVAILABLE),
            (ServiceError::server("boom"), StatusCode::BAD_GATEWAY),
            (
                ServiceError::Conflict {
                    field: Some("email".into()),
                    message: "Email already exists".into(),
                },
                StatusCode::CONFLICT,
            ),
            (ServiceError::NotFound("nope".into()), StatusCode::NOT_FOUND),
            (ServiceError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (ServiceError::UnknownRole("X".into()), StatusCode::UNAUTHORIZED),
        ];

        for (err, expected) in cases {
            let response = HttpError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
