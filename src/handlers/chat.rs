//! Chat persistence API handlers
//!
//! These keep the original wire contract: the list endpoint returns a bare
//! array and the save endpoint returns `{"success": true}`, unwrapped.
//! Storage failures surface as error responses instead of being swallowed.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::chat_service::ChatService;
use crate::error::ApiError;
use crate::models::{ChatSession, SaveChatRequest};

/// GET /api/chat - All sessions, no pagination
pub async fn get_chats(
    State(chat_service): State<Arc<ChatService>>,
) -> Result<Json<Vec<ChatSession>>, ApiError> {
    Ok(Json(chat_service.get_chats()))
}

/// POST /api/chat - Upsert the session for a user (full-replace semantics)
pub async fn save_chat(
    State(chat_service): State<Arc<ChatService>>,
    Json(request): Json<SaveChatRequest>,
) -> Result<Json<Value>, ApiError> {
    chat_service.save_chat(request.user, request.messages)?;

    Ok(Json(json!({ "success": true })))
}
