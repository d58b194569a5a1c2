//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `recipe-chat-core` (pure Rust).
//! Implementations live in `recipe-chat-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use serde::Serialize;
use recipe_chat_types::{
    Result,
    history::ExchangeRecord,
    message::ChatReply,
};

// ─── History Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait HistoryPort {
    /// Every stored exchange for `user_id`, oldest first
    async fn load_history(&self, user_id: &str) -> Result<Vec<ExchangeRecord>>;
}

// ─── Chat Transport Port ─────────────────────────────────────

/// Request body for one user turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
}

#[async_trait(?Send)]
pub trait ChatTransportPort {
    /// Deliver one message and wait for the assistant's reply.
    /// Any non-success outcome, including a timeout, is an `Err`.
    async fn send_message(&self, req: &ChatRequest) -> Result<ChatReply>;

    /// Name of this transport (for logging/debug)
    fn transport_name(&self) -> &str;
}
