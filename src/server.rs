//! Router and state assembly
//!
//! Kept separate from `main` so integration tests can drive the full router
//! in-process against an in-memory store.

use std::sync::Arc;

use axum::extract::State;
use axum::{routing::get, Json, Router};

use crate::chat_service::ChatService;
use crate::loan_service::LoanService;
use crate::role_service::RoleService;
use crate::routes;
use crate::state::AppState;
use crate::storage::KeyValueStore;

/// Wire the services onto a storage backend.
pub fn build_state(store: Arc<dyn KeyValueStore>) -> AppState {
    AppState::new(
        Arc::new(LoanService::new(store.clone())),
        Arc::new(ChatService::new(store.clone())),
        Arc::new(RoleService::new(store.clone())),
        store,
    )
}

/// Assemble the API router. Layers (CORS, tracing) are applied by the caller.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(routes::loan_routes())
        .merge(routes::analytics_routes())
        .merge(routes::chat_routes())
        .merge(routes::role_routes())
        .with_state(state)
}

async fn root() -> &'static str {
    "LoanFlow API Server"
}

/// Health check response
#[derive(serde::Serialize)]
struct HealthResponse {
    status: String,
    storage: String,
    version: String,
}

/// Health check endpoint
async fn health_check(State(app_state): State<AppState>) -> Json<HealthResponse> {
    let storage_ok = app_state.store.is_healthy();
    let storage = if storage_ok { "connected" } else { "unavailable" };
    let status = if storage_ok { "healthy" } else { "unhealthy" };

    Json(HealthResponse {
        status: status.to_string(),
        storage: storage.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
