//! Chat route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{get_chats, save_chat};
use crate::state::AppState;

pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/api/chat", get(get_chats))
        .route("/api/chat", post(save_chat))
}
