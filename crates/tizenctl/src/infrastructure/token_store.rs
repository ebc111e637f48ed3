//! Pairing token persistence.
//!
//! The token is a single opaque string stored as raw text — no framing, no
//! versioning — so the file stays hand-editable and compatible with other
//! tooling that pairs with the same TV.  Surrounding whitespace is trimmed
//! on load because editors love to append a trailing newline.
//!
//! [`NullTokenStore`] backs sessions with no configured token path: the
//! token then lives only in memory and the TV re-prompts on the next
//! process start.

use std::path::PathBuf;

use tracing::debug;

use crate::application::{StoreError, TokenStore};

/// Stores the pairing token as a raw text file at a fixed path.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store backed by `path`.  The file need not exist yet.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                if token.is_empty() {
                    // An empty file carries no credential.
                    Ok(None)
                } else {
                    debug!("loaded pairing token from {}", self.path.display());
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        // Ensure the parent directory exists before writing.
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(&self.path, token).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!("persisted pairing token to {}", self.path.display());
        Ok(())
    }
}

/// Token store for sessions without a configured token path.
///
/// Loads nothing and discards saves; the session keeps the token in memory
/// for its own lifetime.
#[derive(Debug, Clone, Default)]
pub struct NullTokenStore;

impl TokenStore for NullTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn save(&self, _token: &str) -> Result<(), StoreError> {
        debug!("no token path configured; token kept in memory only");
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> (PathBuf, FileTokenStore) {
        let dir = std::env::temp_dir().join(format!("tizenctl_test_{}", Uuid::new_v4()));
        let path = dir.join("token");
        (dir, FileTokenStore::new(path))
    }

    #[test]
    fn test_load_returns_none_when_file_absent() {
        // Arrange
        let (dir, store) = temp_store();

        // Act / Assert
        assert!(store.load().unwrap().is_none());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_then_load_round_trips() {
        // Arrange
        let (dir, store) = temp_store();

        // Act
        store.save("12345678").unwrap();
        let loaded = store.load().unwrap();

        // Assert
        assert_eq!(loaded.as_deref(), Some("12345678"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_overwrites_previous_token() {
        let (dir, store) = temp_store();

        store.save("old").unwrap();
        store.save("new").unwrap();

        assert_eq!(store.load().unwrap().as_deref(), Some("new"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_trims_surrounding_whitespace() {
        // Arrange: a hand-edited file with a trailing newline
        let (dir, store) = temp_store();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(store.path(), "  abc\n").unwrap();

        // Act / Assert
        assert_eq!(store.load().unwrap().as_deref(), Some("abc"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_treats_empty_file_as_no_token() {
        let (dir, store) = temp_store();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(store.path(), "\n").unwrap();

        assert!(store.load().unwrap().is_none());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_creates_missing_parent_directory() {
        let (dir, store) = temp_store();
        assert!(!dir.exists());

        store.save("t").unwrap();

        assert!(store.path().is_file());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_null_store_loads_nothing_and_accepts_saves() {
        let store = NullTokenStore;
        assert!(store.load().unwrap().is_none());
        store.save("ignored").unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
