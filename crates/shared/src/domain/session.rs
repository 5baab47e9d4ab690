use crate::domain::role::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a logged-in client holds: the bearer token and the role it was
/// issued for. Token and role are always present together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub username: Option<String>,
}

/// The persisted credentials document. Fields are kept as raw strings so a
/// tampered or outdated file can be detected on read instead of failing to
/// deserialize as a whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredCredentials {
    #[serde(rename = "jwt", default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl StoredCredentials {
    pub fn new(token: &str, role: &str, username: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            role: Some(role.to_string()),
            username: Some(username.to_string()),
            saved_at: Some(Utc::now()),
        }
    }

    /// A document with only half of the token/role pair is unusable.
    pub fn is_complete(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.token) && present(&self.role)
    }
}
