//! What the assistant window shows: the worker's conversation snapshot plus
//! the message currently waiting for a reply.

use assistant::briefing::ERROR_REPLY_FALLBACK;
use shared::protocol::ChatMessage;

#[derive(Debug, Default)]
pub struct ChatView {
    transcript: Vec<ChatMessage>,
    pending: Option<ChatMessage>,
    local_tail: Vec<ChatMessage>,
}

impl ChatView {
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Marks `input` as sent; returns the text to forward, or None if it
    /// should not go out (blank, or a reply is still outstanding).
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        if input.trim().is_empty() || self.is_loading() {
            return None;
        }
        self.pending = Some(ChatMessage::user(input));
        Some(input.to_string())
    }

    /// Replaces the view with the authoritative log from the worker.
    pub fn sync(&mut self, messages: Vec<ChatMessage>) {
        self.transcript = messages;
        self.pending = None;
        self.local_tail.clear();
    }

    /// The request never reached the worker: keep the question, answer it
    /// with the error fallback and unlock the input.
    pub fn abandon_pending(&mut self) {
        if let Some(question) = self.pending.take() {
            self.local_tail.push(question);
            self.local_tail.push(ChatMessage::model(ERROR_REPLY_FALLBACK));
        }
    }

    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.transcript
            .iter()
            .chain(self.local_tail.iter())
            .chain(self.pending.iter())
    }
}
