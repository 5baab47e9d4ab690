mod error;
mod http;
mod service;
mod storage;

pub use self::error::ErrorResponse;
pub use self::http::HttpError;
pub use self::service::{AuthFailureReason, ServiceError, format_validation_errors};
pub use self::storage::StorageError;
