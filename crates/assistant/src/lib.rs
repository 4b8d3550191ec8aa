use std::sync::Arc;

use async_trait::async_trait;
use shared::error::{AssistantError, ErrorCode};
use tracing::{info, warn};

pub mod briefing;
pub mod config;
mod conversation;
pub mod gemini;

pub use config::{load_settings, AssistantSettings};
pub use conversation::{Conversation, SendRejected};
pub use gemini::GeminiClient;

use crate::briefing::{DESIGN_BRIEFING, EMPTY_REPLY_FALLBACK, ERROR_REPLY_FALLBACK};

/// Hosted text-generation service, reduced to the one call the assistant needs.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system_instruction: &str, prompt: &str)
        -> Result<String, AssistantError>;
}

/// Answers free-text questions about the circuit using the design briefing.
#[derive(Clone)]
pub struct CircuitAssistant {
    generator: Arc<dyn TextGenerator>,
}

impl CircuitAssistant {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn from_settings(settings: &AssistantSettings) -> Result<Self, AssistantError> {
        Ok(Self::new(Arc::new(GeminiClient::new(settings)?)))
    }

    /// Assistant whose every request fails with a transport error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::new(Arc::new(UnavailableGenerator {
            reason: reason.into(),
        }))
    }

    /// Returns the service's answer, or a fallback message if it has none.
    pub async fn ask(&self, query: &str) -> String {
        match self.try_ask(query).await {
            Ok(text) => text,
            Err(err) => {
                warn!(code = ?err.code(), error = %err, "assistant request failed");
                fallback_reply(&err).to_string()
            }
        }
    }

    pub async fn try_ask(&self, query: &str) -> Result<String, AssistantError> {
        info!(query_len = query.len(), "forwarding question to assistant");
        self.generator.generate(DESIGN_BRIEFING, query).await
    }
}

/// Stand-in used when the configured client cannot be built.
struct UnavailableGenerator {
    reason: String,
}

#[async_trait]
impl TextGenerator for UnavailableGenerator {
    async fn generate(&self, _system: &str, _prompt: &str) -> Result<String, AssistantError> {
        Err(AssistantError::transport(self.reason.clone()))
    }
}

pub fn fallback_reply(err: &AssistantError) -> &'static str {
    match err.code() {
        ErrorCode::MissingCredential | ErrorCode::EmptyResponse => EMPTY_REPLY_FALLBACK,
        ErrorCode::Transport | ErrorCode::Upstream => ERROR_REPLY_FALLBACK,
    }
}

pub fn is_fallback_reply(text: &str) -> bool {
    text == EMPTY_REPLY_FALLBACK || text == ERROR_REPLY_FALLBACK
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
