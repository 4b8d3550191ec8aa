use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    MissingCredential,
    Transport,
    Upstream,
    EmptyResponse,
}

/// Failure of a single text-generation request.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("no API key configured for the text-generation service")]
    MissingCredential,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("service returned status {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("service returned no text")]
    EmptyResponse,
}

impl AssistantError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AssistantError::MissingCredential => ErrorCode::MissingCredential,
            AssistantError::Transport(_) => ErrorCode::Transport,
            AssistantError::Upstream { .. } => ErrorCode::Upstream,
            AssistantError::EmptyResponse => ErrorCode::EmptyResponse,
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        AssistantError::Transport(message.into())
    }
}
