use thiserror::Error;

/// Failures of the credentials storage medium. Read failures never leave
/// the store; only write failures (`save`, `clear`) are propagated.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to persist credentials: {0}")]
    Persist(String),
}
