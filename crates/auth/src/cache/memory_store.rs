use crate::abstract_trait::CredentialStoreTrait;
use parking_lot::Mutex;
use shared::{domain::session::StoredCredentials, errors::StorageError};
use tracing::warn;

/// Process-local store, for tests and embedders without a writable disk.
#[derive(Default)]
pub struct MemoryCredentialStore {
    inner: Mutex<Option<StoredCredentials>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with an arbitrary document, complete or not.
    pub fn with_document(doc: StoredCredentials) -> Self {
        Self {
            inner: Mutex::new(Some(doc)),
        }
    }
}

impl CredentialStoreTrait for MemoryCredentialStore {
    fn save(&self, token: &str, role: &str, username: &str) -> Result<(), StorageError> {
        *self.inner.lock() = Some(StoredCredentials::new(token, role, username));
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.inner.lock().take();
        Ok(())
    }

    fn load(&self) -> Option<StoredCredentials> {
        let doc = self.inner.lock().clone()?;

        if doc.is_complete() {
            Some(doc)
        } else {
            warn!("Stored credentials are incomplete, treating session as absent");
            None
        }
    }
}
