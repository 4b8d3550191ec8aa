use std::sync::atomic::{AtomicBool, Ordering};

use shared::protocol::ChatMessage;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

use crate::{briefing::GREETING, CircuitAssistant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendRejected {
    #[error("message is empty")]
    EmptyInput,
    #[error("an assistant request is already in flight")]
    Busy,
}

/// Append-only chat log with at most one outstanding request.
pub struct Conversation {
    assistant: CircuitAssistant,
    log: Mutex<Vec<ChatMessage>>,
    in_flight: AtomicBool,
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Conversation {
    pub fn new(assistant: CircuitAssistant) -> Self {
        Self {
            assistant,
            log: Mutex::new(vec![ChatMessage::model(GREETING)]),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.log.lock().await.clone()
    }

    /// Records `input`, asks the assistant and records exactly one reply.
    ///
    /// The reply is a fallback text when the service fails, so an accepted
    /// send always ends with a model message in the log.
    pub async fn send(&self, input: &str) -> Result<ChatMessage, SendRejected> {
        if input.trim().is_empty() {
            return Err(SendRejected::EmptyInput);
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("dropping send while a request is outstanding");
            return Err(SendRejected::Busy);
        }
        let _guard = InFlightGuard(&self.in_flight);

        self.log.lock().await.push(ChatMessage::user(input));

        let reply = ChatMessage::model(self.assistant.ask(input).await);
        self.log.lock().await.push(reply.clone());
        Ok(reply)
    }
}
