use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body of every error the dashboard returns.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}
