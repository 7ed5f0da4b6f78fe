use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::identifiable::Identifiable;

/// Originator of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Assistant,
}

impl std::fmt::Display for ChatSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatSender::User => write!(f, "user"),
            ChatSender::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for ChatSender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(ChatSender::User),
            "assistant" => Ok(ChatSender::Assistant),
            _ => Err(()),
        }
    }
}

/// Append-only, session-local chat transcript entry. Not persisted by
/// the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: ChatSender,
    pub timestamp: DateTime<Utc>,
}

impl Identifiable for ChatMessage {
    fn get_id(&self) -> &str {
        &self.id
    }
}
