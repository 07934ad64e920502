//! File-backed key-value store for session state.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use flick_core::User;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::Result;

/// Key holding the authenticated user's profile snapshot.
pub const KEY_USER: &str = "session.user";

const STORE_FILE: &str = "session.json";

/// Persistent key-value session store.
///
/// Entries are namespaced string keys with JSON values, held in memory and
/// flushed to a single JSON file on every write. Writes are user-initiated
/// and infrequent (login, register, profile update, logout), so a plain
/// `RwLock` around the map is all the coordination needed.
pub struct SessionStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, serde_json::Value>>,
}

impl SessionStore {
    /// Open (or create) the session store under the given directory.
    ///
    /// An unreadable or corrupt session file is treated as an empty store:
    /// the snapshot is a best-effort cache and the next login rewrites it.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(STORE_FILE);

        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Discarding corrupt session file");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), keys = entries.len(), "Opened session store");
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Get a stored value.
    pub async fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.entries.read().await.get(key).cloned()
    }

    /// Set a value and flush to disk.
    pub async fn set<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value);
        self.persist(&entries).await
    }

    /// Remove a value and flush to disk. Returns whether the key existed.
    pub async fn remove(&self, key: &str) -> Result<bool> {
        let mut entries = self.entries.write().await;
        let existed = entries.remove(key).is_some();
        if existed {
            self.persist(&entries).await?;
        }
        Ok(existed)
    }

    /// The persisted user snapshot, if a session was saved.
    ///
    /// A snapshot that no longer deserializes (schema drift between app
    /// versions) reads as `None` rather than failing the screen.
    pub async fn load_user(&self) -> Option<User> {
        let value = self.get(KEY_USER).await?;
        match serde_json::from_value(value) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "Stored user snapshot no longer deserializes");
                None
            }
        }
    }

    /// Replace the persisted user snapshot.
    pub async fn save_user(&self, user: &User) -> Result<()> {
        debug!(username = %user.username, "Saving user snapshot");
        self.set(KEY_USER, user).await
    }

    /// Drop the persisted user snapshot (logout).
    pub async fn clear_user(&self) -> Result<()> {
        debug!("Clearing user snapshot");
        self.remove(KEY_USER).await?;
        Ok(())
    }

    /// Write the whole map atomically: temp file, then rename over.
    async fn persist(&self, entries: &BTreeMap<String, serde_json::Value>) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
