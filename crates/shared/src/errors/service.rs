use crate::errors::storage::StorageError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthFailureReason {
    InvalidCredentials,
    Network,
    Server,
}

impl fmt::Display for AuthFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AuthFailureReason::InvalidCredentials => "invalid-credentials",
            AuthFailureReason::Network => "network",
            AuthFailureReason::Server => "server",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Authentication failed ({reason}): {message}")]
    Auth {
        reason: AuthFailureReason,
        message: String,
    },

    #[error("Conflict: {message}")]
    Conflict {
        field: Option<String>,
        message: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid role or credentials: unknown role '{0}'")]
    UnknownRole(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ServiceError {
    pub fn network(message: impl Into<String>) -> Self {
        ServiceError::Auth {
            reason: AuthFailureReason::Network,
            message: message.into(),
        }
    }

    pub fn server(message: impl Into<String>) -> Self {
        ServiceError::Auth {
            reason: AuthFailureReason::Server,
            message: message.into(),
        }
    }

    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        ServiceError::Auth {
            reason: AuthFailureReason::InvalidCredentials,
            message: message.into(),
        }
    }

    /// Text suitable for a transient user-facing notice.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Auth { message, .. } => message.clone(),
            ServiceError::Conflict { message, .. } => message.clone(),
            ServiceError::NotFound(msg) | ServiceError::Validation(msg) => msg.clone(),
            ServiceError::UnknownRole(_) => "Invalid role or credentials".to_string(),
            ServiceError::Storage(_) => "Could not save your session".to_string(),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::Validation(format_validation_errors(&errors))
    }
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut error_messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match error.code.as_ref() {
                    "email" => "Invalid email format".to_string(),
                    "length" => "Invalid length".to_string(),
                    "range" => "Value out of range".to_string(),
                    "custom" => "Custom validation failed".to_string(),
                    _ => format!("Invalid {field}"),
                });
            error_messages.push(format!("{field}: {message}"));
        }
    }

    if error_messages.is_empty() {
        "Validation failed".to_string()
    } else {
        error_messages.sort();
        error_messages.join("; ")
    }
}
