//! Persisted session token storage.
//!
//! Keeps the access token of the signed-in user in `session.toml` under the
//! config directory so the next startup can restore the session before any
//! view renders. The file is cleared on logout and whenever restore finds
//! the token invalid.

use crate::paths::ChartdeskPaths;
use crate::storage::atomic_toml::AtomicTomlFile;
use chartdesk_core::error::Result;
use serde::{Deserialize, Serialize};

/// The on-disk shape of a persisted session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
}

/// Storage for the persisted session token file.
pub struct SessionTokenStorage {
    file: AtomicTomlFile<StoredSession>,
}

impl SessionTokenStorage {
    /// Creates storage rooted at the resolved config directory.
    pub fn new(paths: &ChartdeskPaths) -> Result<Self> {
        Ok(Self {
            file: AtomicTomlFile::new(paths.session_file()?),
        })
    }

    /// Loads the persisted session, if any.
    pub fn load(&self) -> Result<Option<StoredSession>> {
        self.file.load()
    }

    /// Persists the session token.
    pub fn save(&self, session: &StoredSession) -> Result<()> {
        self.file.save(session)
    }

    /// Removes the persisted session. Safe to call when none exists.
    pub fn clear(&self) -> Result<()> {
        self.file.remove()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_in(tmp: &TempDir) -> SessionTokenStorage {
        let paths = ChartdeskPaths::new(Some(tmp.path()));
        SessionTokenStorage::new(&paths).unwrap()
    }

    #[test]
    fn test_empty_storage_loads_none() {
        let tmp = TempDir::new().unwrap();
        let storage = storage_in(&tmp);
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_clear() {
        let tmp = TempDir::new().unwrap();
        let storage = storage_in(&tmp);

        let session = StoredSession {
            access_token: "tok-123".to_string(),
        };
        storage.save(&session).unwrap();
        assert_eq!(storage.load().unwrap(), Some(session));

        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
        // Clearing twice must stay a no-op
        storage.clear().unwrap();
    }
}
