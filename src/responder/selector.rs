use super::catalog::{ResponseCategory, GREETING};
use super::rules::classify;
use crate::message::ConversationMessage;

/// Outcome of a selection, before it is turned into reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// No user message in the history
    Greeting,
    Matched(ResponseCategory),
}

impl Selection {
    pub fn reply(self) -> &'static str {
        match self {
            Selection::Greeting => GREETING,
            Selection::Matched(category) => category.reply(),
        }
    }
}

/// Stateless keyword-based reply picker.
///
/// Only the last user message is considered. Assistant turns are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseSelector;

impl ResponseSelector {
    pub fn new() -> Self {
        Self
    }

    pub fn select_category(&self, history: &[ConversationMessage]) -> Selection {
        let Some(last_user) = history.iter().rev().find(|m| m.is_from_user()) else {
            return Selection::Greeting;
        };

        Selection::Matched(classify(&last_user.text).unwrap_or(ResponseCategory::General))
    }

    pub fn select(&self, history: &[ConversationMessage]) -> &'static str {
        self.select_category(history).reply()
    }
}

pub fn select_response(history: &[ConversationMessage]) -> &'static str {
    ResponseSelector.select(history)
}
