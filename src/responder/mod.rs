pub mod catalog;
pub mod mock;
pub mod rules;
pub mod selector;

use async_trait::async_trait;
use eyre::Result;

pub use catalog::{ResponseCategory, GREETING, RESPONSE_CATALOG};
pub use mock::MockResponder;
pub use selector::{select_response, ResponseSelector, Selection};

use crate::message::ConversationMessage;

/// Source of assistant replies for a chat session
#[async_trait]
pub trait Responder: Send + Sync {
    /// Produce the next assistant reply for `history`.
    async fn respond(&self, history: &[ConversationMessage]) -> Result<String>;
}
