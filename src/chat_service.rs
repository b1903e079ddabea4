//! Chat persistence service
//!
//! A small document-array store keyed by user. Saves use full-replace
//! semantics: an existing session's message list is swapped wholesale, never
//! appended to. Unrelated to the loan data path.

use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{ChatMessage, ChatSession};
use crate::storage::{self, KeyValueStore, CHAT_SESSIONS_SLOT};

pub struct ChatService {
    store: Arc<dyn KeyValueStore>,
}

impl ChatService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All sessions, no pagination.
    pub fn get_chats(&self) -> Vec<ChatSession> {
        storage::load_list(self.store.as_ref(), CHAT_SESSIONS_SLOT)
    }

    /// Upsert the session for `user`. No validation of the user key or the
    /// message shape beyond structural acceptance of role/content pairs.
    pub fn save_chat(&self, user: String, messages: Vec<ChatMessage>) -> Result<(), ApiError> {
        let mut sessions = self.get_chats();

        match sessions.iter_mut().find(|session| session.user == user) {
            Some(session) => session.messages = messages,
            None => sessions.push(ChatSession { user, messages }),
        }

        storage::save_list(self.store.as_ref(), CHAT_SESSIONS_SLOT, &sessions)?;
        Ok(())
    }
}
