use chrono::Utc;
use serde::Serialize;

use crate::models::{ChatMessage, MessageId, Sender, Topic};
use crate::responder::RuleTable;

pub const GREETING: &str = "Hello! Welcome to TimeTravel Agency. How can I assist you today?";

/// A user utterance that has been accepted into the transcript and is
/// waiting for its bot reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingReply {
    pub in_reply_to: MessageId,
    pub utterance: String,
}

impl PendingReply {
    pub fn topic(&self, table: &RuleTable) -> Option<Topic> {
        table.classify(&self.utterance)
    }

    pub fn resolve(&self, table: &RuleTable) -> &'static str {
        table.respond(&self.utterance)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        transcript.push(Sender::Bot, GREETING.to_string());
        transcript
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Blank or whitespace-only input leaves the transcript untouched.
    pub fn append_user_message(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }

        let id = self.push(Sender::User, text.to_string());
        Some(PendingReply {
            in_reply_to: id,
            utterance: text.to_string(),
        })
    }

    pub fn append_bot_message(&mut self, text: impl Into<String>) -> MessageId {
        self.push(Sender::Bot, text.into())
    }

    pub fn complete(&mut self, pending: &PendingReply, table: &RuleTable) -> MessageId {
        self.append_bot_message(pending.resolve(table))
    }

    fn push(&mut self, sender: Sender, text: String) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            sender,
            text,
            at: Utc::now(),
        });
        id
    }
}
