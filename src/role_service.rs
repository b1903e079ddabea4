//! Persisted role mode
//!
//! The role is a client-chosen UI mode stored in its own slot. It gates which
//! views a client renders; the server enforces nothing with it.

use std::sync::Arc;

use crate::error::ApiError;
use crate::models::UserRole;
use crate::storage::{KeyValueStore, USER_ROLE_SLOT};

pub struct RoleService {
    store: Arc<dyn KeyValueStore>,
}

impl RoleService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current role, defaulting to `user` when the slot is absent or holds
    /// something unreadable.
    pub fn current(&self) -> UserRole {
        match self.store.get(USER_ROLE_SLOT) {
            Ok(Some(raw)) => UserRole::parse(raw.trim()).unwrap_or_default(),
            Ok(None) => UserRole::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Role slot unreadable, defaulting to user");
                UserRole::default()
            }
        }
    }

    /// Persist a new role. Values outside `user`/`admin` are rejected.
    pub fn set(&self, raw: &str) -> Result<UserRole, ApiError> {
        let role = UserRole::parse(raw)
            .ok_or_else(|| ApiError::BadRequest(format!("Unknown role: {}", raw)))?;
        self.store.set(USER_ROLE_SLOT, role.as_str())?;
        Ok(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_to_user() {
        let service = RoleService::new(Arc::new(MemoryStore::new()));
        assert_eq!(service.current(), UserRole::User);
    }

    #[test]
    fn test_set_and_read_back() {
        let service = RoleService::new(Arc::new(MemoryStore::new()));
        service.set("admin").unwrap();
        assert_eq!(service.current(), UserRole::Admin);
        service.set("user").unwrap();
        assert_eq!(service.current(), UserRole::User);
    }

    #[test]
    fn test_rejects_unknown_role() {
        let service = RoleService::new(Arc::new(MemoryStore::new()));
        assert!(matches!(service.set("root"), Err(ApiError::BadRequest(_))));
        assert_eq!(service.current(), UserRole::User);
    }

    #[test]
    fn test_garbage_slot_reads_as_default() {
        let store = Arc::new(MemoryStore::new());
        store.set(USER_ROLE_SLOT, "superuser").unwrap();
        let service = RoleService::new(store);
        assert_eq!(service.current(), UserRole::User);
    }
}
