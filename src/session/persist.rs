//! Durable credential persistence.
//!
//! A single string key that survives process restarts; presence or absence
//! of the key is the sole bootstrap signal. The surface is infallible:
//! storage failures are logged and read back as absence, so a broken
//! profile directory degrades the client to the anonymous session instead
//! of crashing it.

use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::warn;

pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, raw: &str);
    fn clear(&self);
}

const TOKEN_FILE: &str = "token";

/// File-backed store: one file under the given directory.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { path: dir.as_ref().join(TOKEN_FILE) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let raw = raw.trim();
                if raw.is_empty() { None } else { Some(raw.to_string()) }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(target: "studylance::session", "credential read failed at {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&self, raw: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(target: "studylance::session", "credential dir create failed at {}: {}", parent.display(), e);
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.path, raw) {
            warn!(target: "studylance::session", "credential write failed at {}: {}", self.path.display(), e);
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(target: "studylance::session", "credential remove failed at {}: {}", self.path.display(), e);
            }
        }
    }
}

/// In-process store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    slot: RwLock<Option<String>>,
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<String> {
        self.slot.read().clone()
    }

    fn save(&self, raw: &str) {
        *self.slot.write() = Some(raw.to_string());
    }

    fn clear(&self) {
        *self.slot.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_and_clears() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(tmp.path());

        assert_eq!(store.load(), None);
        store.save("aaa.bbb.ccc");
        assert_eq!(store.load(), Some("aaa.bbb.ccc".to_string()));

        store.clear();
        assert_eq!(store.load(), None);
        // clearing an already-empty store is a no-op
        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn file_store_creates_missing_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(tmp.path().join("profile").join("auth"));
        store.save("tok");
        assert_eq!(store.load(), Some("tok".to_string()));
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryCredentialStore::default();
        assert_eq!(store.load(), None);
        store.save("t");
        assert_eq!(store.load(), Some("t".to_string()));
        store.clear();
        assert_eq!(store.load(), None);
    }
}
