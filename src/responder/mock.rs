use async_trait::async_trait;
use eyre::Result;
use tracing::debug;

use super::selector::{ResponseSelector, Selection};
use super::Responder;
use crate::latency::Latency;
use crate::message::ConversationMessage;

/// Offline assistant backed by [`ResponseSelector`].
pub struct MockResponder {
    selector: ResponseSelector,
    latency: Latency,
}

impl MockResponder {
    pub fn new(latency: Latency) -> Self {
        Self {
            selector: ResponseSelector::new(),
            latency,
        }
    }
}

#[async_trait]
impl Responder for MockResponder {
    async fn respond(&self, history: &[ConversationMessage]) -> Result<String> {
        // Selection happens before the delay so latency can never affect it
        let selection = self.selector.select_category(history);
        match selection {
            Selection::Greeting => debug!("No user message in history, greeting"),
            Selection::Matched(category) => debug!("Matched reply category: {}", category.label()),
        }

        if !self.latency.is_none() {
            debug!("Holding reply for {:?}", self.latency.duration());
        }
        self.latency.wait().await;

        Ok(selection.reply().to_string())
    }
}
