use crate::abstract_trait::CredentialStoreTrait;
use parking_lot::Mutex;
use shared::{domain::session::StoredCredentials, errors::StorageError};
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Credentials persisted as one JSON document on local disk. Survives
/// restarts; removed only by `clear` or by deleting the file.
pub struct FileCredentialStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn read_document(&self) -> Result<Option<StoredCredentials>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let doc = serde_json::from_str::<StoredCredentials>(&content)?;
        Ok(Some(doc))
    }
}

impl CredentialStoreTrait for FileCredentialStore {
    fn save(&self, token: &str, role: &str, username: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock();

        let dir = self.parent_dir();
        fs::create_dir_all(&dir)?;

        let doc = StoredCredentials::new(token, role, username);
        let json = serde_json::to_vec_pretty(&doc)?;

        // Written beside the target and renamed over it, so readers see either
        // the old document or the new one.
        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(&json)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .map_err(|e| StorageError::Persist(e.error.to_string()))?;

        info!("🔐 Session saved for user {username} with role {role}");
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.lock.lock();

        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Session cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Session clear requested with nothing stored");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn load(&self) -> Option<StoredCredentials> {
        let _guard = self.lock.lock();

        match self.read_document() {
            Ok(Some(doc)) if doc.is_complete() => {
                debug!("Session loaded from {}", self.path.display());
                Some(doc)
            }
            Ok(Some(_)) => {
                warn!(
                    "Stored credentials at {} are incomplete, treating session as absent",
                    self.path.display()
                );
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!(
                    "Failed to read credentials from {}: {e}",
                    self.path.display()
                );
                None
            }
        }
    }
}
