//! Session-local chat transcript for the support page. Append-only and
//! never sent to the backend; the backend only sees the latest message
//! text when a reply is requested.

use chrono::Utc;
use uuid::Uuid;

use finlink_core_model::{ChatMessage, ChatSender};

#[derive(Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatSender::User, text.into())
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatSender::Assistant, text.into())
    }

    fn push(&mut self, sender: ChatSender, text: String) -> &ChatMessage {
        self.messages.push(ChatMessage {
            id: format!("msg-{}", Uuid::new_v4()),
            text,
            sender,
            timestamp: Utc::now(),
        });
        // Just pushed, so the last element exists
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn transcript_preserves_append_order_and_senders() {
        let mut log = ChatLog::new();
        log.push_user("how do I finish kyc?");
        log.push_assistant("Go to the KYC page.");
        log.push_user("thanks");

        let senders: Vec<ChatSender> = log.messages().iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            vec![ChatSender::User, ChatSender::Assistant, ChatSender::User]
        );
        assert_eq!(log.messages()[0].text, "how do I finish kyc?");
    }

    #[test]
    fn message_ids_are_unique() {
        let mut log = ChatLog::new();
        for i in 0..20 {
            log.push_user(format!("message {i}"));
        }
        let ids: HashSet<&str> = log.messages().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), 20);
    }
}
