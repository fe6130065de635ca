use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ChatError;
use crate::message::ConversationMessage;

/// Saved conversation, as written by `/save`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub saved_at: DateTime<Utc>,
    pub messages: Vec<ConversationMessage>,
}

/// Either a bare message array or a full transcript
#[derive(Deserialize)]
#[serde(untagged)]
enum HistoryFile {
    Messages(Vec<ConversationMessage>),
    Transcript(Transcript),
}

#[derive(Debug, Default)]
pub struct ConversationState {
    messages: Vec<ConversationMessage>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_messages(messages: Vec<ConversationMessage>) -> Self {
        Self { messages }
    }

    pub fn add_user_message(&mut self, message: &str) {
        self.messages.push(ConversationMessage::user(message));
    }

    pub fn add_assistant_message(&mut self, message: &str) {
        self.messages.push(ConversationMessage::assistant(message));
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn to_transcript(&self) -> Transcript {
        Transcript {
            saved_at: Utc::now(),
            messages: self.messages.clone(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ChatError> {
        let json = serde_json::to_string_pretty(&self.to_transcript())
            .map_err(|e| ChatError::InvalidInput(e.to_string()))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ChatError::io(parent, e))?;
            }
        }

        fs::write(path, json).map_err(|e| ChatError::io(path, e))
    }

    pub fn load(path: &Path) -> Result<Self, ChatError> {
        let data = fs::read_to_string(path).map_err(|e| ChatError::io(path, e))?;
        Self::parse(&data)
    }

    /// Accepts `[{"text": .., "sender": ..}]` or a saved transcript.
    pub fn parse(data: &str) -> Result<Self, ChatError> {
        let file: HistoryFile = serde_json::from_str(data).map_err(|_| {
            ChatError::InvalidInput(
                "expected a list of {\"text\", \"sender\"} messages or a saved transcript"
                    .to_string(),
            )
        })?;

        let messages = match file {
            HistoryFile::Messages(messages) => messages,
            HistoryFile::Transcript(transcript) => transcript.messages,
        };

        Ok(Self::from_messages(messages))
    }
}
