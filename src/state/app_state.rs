//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::chat_service::ChatService;
use crate::loan_service::LoanService;
use crate::role_service::RoleService;
use crate::storage::KeyValueStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub loan_service: Arc<LoanService>,
    pub chat_service: Arc<ChatService>,
    pub role_service: Arc<RoleService>,
    // Kept alongside the services so the health endpoint can probe the
    // backend they all share.
    pub store: Arc<dyn KeyValueStore>,
}

impl AppState {
    pub fn new(
        loan_service: Arc<LoanService>,
        chat_service: Arc<ChatService>,
        role_service: Arc<RoleService>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            loan_service,
            chat_service,
            role_service,
            store,
        }
    }
}

impl FromRef<AppState> for Arc<LoanService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.loan_service.clone()
    }
}

impl FromRef<AppState> for Arc<ChatService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.chat_service.clone()
    }
}

impl FromRef<AppState> for Arc<RoleService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.role_service.clone()
    }
}
