//! Role route definitions

use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers::{get_role, set_role};
use crate::state::AppState;

pub fn role_routes() -> Router<AppState> {
    Router::new()
        .route("/api/role", get(get_role))
        .route("/api/role", put(set_role))
}
