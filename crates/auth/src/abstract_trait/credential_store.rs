use shared::{
    domain::{role::Role, session::Session, session::StoredCredentials},
    errors::StorageError,
};
use std::sync::Arc;
use tracing::warn;

pub type DynCredentialStore = Arc<dyn CredentialStoreTrait + Send + Sync>;

/// Single source of truth for "is there a logged-in user, and what can they
/// do". Writes are atomic; reads fail soft.
pub trait CredentialStoreTrait {
    /// Persists token, role label and username in one write.
    fn save(&self, token: &str, role: &str, username: &str) -> Result<(), StorageError>;

    /// Removes everything. Succeeds when nothing is stored.
    fn clear(&self) -> Result<(), StorageError>;

    /// Returns the stored document when it holds both token and role.
    /// Implementations log and swallow read failures.
    fn load(&self) -> Option<StoredCredentials>;

    // Getters read through `session`, so a token never shows without a
    // usable role.
    fn get_token(&self) -> Option<String> {
        self.session().map(|session| session.token)
    }

    fn get_role(&self) -> Option<Role> {
        self.session().map(|session| session.role)
    }

    fn get_username(&self) -> Option<String> {
        self.session()?.username
    }

    /// Token and role read from a single snapshot of the store.
    fn session(&self) -> Option<Session> {
        let doc = self.load()?;
        let token = doc.token?;
        let role = match doc.role.as_deref().map(str::parse::<Role>) {
            Some(Ok(role)) => role,
            Some(Err(e)) => {
                warn!("Ignoring stored role: {e}");
                return None;
            }
            None => return None,
        };

        Some(Session {
            token,
            role,
            username: doc.username.filter(|name| !name.is_empty()),
        })
    }
}
