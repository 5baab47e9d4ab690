use reqwest::{Response, StatusCode};
use serde_json::Value;
use shared::errors::ServiceError;
use thiserror::Error;

const MAX_PLAIN_MESSAGE_LEN: usize = 200;

/// Why a backend call did not produce the expected body.
#[derive(Debug, Error)]
pub enum ApiFailure {
    #[error("Request did not reach the backend: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend responded with {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
        field: Option<String>,
    },

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ApiFailure {
    /// Reads a non-success response, pulling `message`/`error`/`field` from a
    /// JSON body or keeping a short plain-text body as the message.
    pub async fn from_response(response: Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let (message, field) = parse_error_body(&body);

        ApiFailure::Status {
            status,
            message,
            field,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiFailure::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Backend-supplied message, or `fallback` when there is none.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiFailure::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

fn parse_error_body(body: &str) -> (Option<String>, Option<String>) {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return (None, None);
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => {
            let text = |key: &str| {
                map.get(key)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            };
            (text("message").or_else(|| text("error")), text("field"))
        }
        Ok(Value::String(s)) if !s.trim().is_empty() => (Some(s.trim().to_string()), None),
        Ok(_) => (None, None),
        Err(_) if trimmed.len() <= MAX_PLAIN_MESSAGE_LEN && !trimmed.starts_with('<') => {
            (Some(trimmed.to_string()), None)
        }
        Err(_) => (None, None),
    }
}

/// Default mapping for backend calls without operation-specific rules.
pub fn into_service_error(failure: ApiFailure, fallback: &str) -> ServiceError {
    match &failure {
        ApiFailure::Transport(_) => {
            ServiceError::network("Network error. Please check your connection.")
        }
        ApiFailure::Decode(_) => ServiceError::server(fallback),
        ApiFailure::Status { status, field, .. } => {
            let message = failure.message_or(fallback);
            match *status {
                StatusCode::BAD_REQUEST => ServiceError::Validation(message),
                StatusCode::NOT_FOUND => ServiceError::NotFound(message),
                StatusCode::CONFLICT => ServiceError::Conflict {
                    field: field.clone(),
                    message,
                },
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    ServiceError::invalid_credentials(message)
                }
                _ => ServiceError::server(message),
            }
        }
    }
}
