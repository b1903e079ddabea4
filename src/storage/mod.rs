//! Storage port for LoanFlow
//!
//! The whole system persists through named slots holding JSON strings, the
//! same shape as the original local-storage backing. Keeping the boundary
//! this narrow lets the core logic swap between a file-backed store for the
//! server and an in-memory store for tests without touching the services.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Well-known slot holding the serialized loan application list.
pub const LOAN_APPLICATIONS_SLOT: &str = "loan_applications";

/// Well-known slot holding the serialized chat session list.
pub const CHAT_SESSIONS_SLOT: &str = "chat_sessions";

/// Well-known slot holding the persisted role mode.
pub const USER_ROLE_SLOT: &str = "user_role";

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read slot '{slot}': {source}")]
    ReadError {
        slot: String,
        source: std::io::Error,
    },

    #[error("Failed to write slot '{slot}': {source}")]
    WriteError {
        slot: String,
        source: std::io::Error,
    },

    #[error("Failed to serialize slot '{slot}': {source}")]
    EncodeError {
        slot: String,
        source: serde_json::Error,
    },
}

/// A named-slot key-value store. Writes are last-write-wins; there is no
/// cross-writer coordination by design.
pub trait KeyValueStore: Send + Sync {
    /// Read a slot. A slot that was never written yields `None`.
    fn get(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Replace a slot's contents.
    fn set(&self, slot: &str, value: &str) -> Result<(), StorageError>;

    /// Probe used by the health endpoint. Backends with nothing to check
    /// report healthy.
    fn is_healthy(&self) -> bool {
        true
    }
}

/// Decode a slot into a typed list. Missing or unparseable data is treated as
/// "no data" rather than an error, matching the original load behavior.
pub fn load_list<T: DeserializeOwned>(store: &dyn KeyValueStore, slot: &str) -> Vec<T> {
    let raw = match store.get(slot) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(slot = %slot, error = %e, "Slot read failed, treating as empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!(slot = %slot, error = %e, "Slot contents unparseable, treating as empty");
            Vec::new()
        }
    }
}

/// Serialize and persist a typed list into a slot. Unlike reads, write
/// failures propagate to the caller.
pub fn save_list<T: Serialize>(
    store: &dyn KeyValueStore,
    slot: &str,
    list: &[T],
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(list).map_err(|source| StorageError::EncodeError {
        slot: slot.to_string(),
        source,
    })?;
    store.set(slot, &raw)
}

/// File-backed store: one file per slot under a data directory.
pub struct FileStore {
    dir: PathBuf,
    // Serializes slot access within this process. Concurrent writers outside
    // the process still clobber each other, last write wins.
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, std::io::Error> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            lock: Mutex::new(()),
        })
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn is_healthy(&self) -> bool {
        self.dir.is_dir()
    }

    fn get(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        match std::fs::read_to_string(self.slot_path(slot)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::ReadError {
                slot: slot.to_string(),
                source,
            }),
        }
    }

    fn set(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        std::fs::write(self.slot_path(slot), value).map_err(|source| StorageError::WriteError {
            slot: slot.to_string(),
            source,
        })
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        Ok(slots.get(slot).cloned())
    }

    fn set(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }
}
