use std::{fs, path::Path, time::Duration};

use serde::Deserialize;
use tracing::warn;

pub const ASSISTANT_CONFIG_FILE: &str = "assistant.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub request_timeout_secs: u64,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".into(),
            endpoint: "https://generativelanguage.googleapis.com".into(),
            request_timeout_secs: 30,
        }
    }
}

impl AssistantSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_key: Option<String>,
    model: Option<String>,
    endpoint: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Defaults, then `assistant.toml` in the working directory, then env vars.
pub fn load_settings() -> AssistantSettings {
    load_settings_from(Path::new(ASSISTANT_CONFIG_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(
    config_path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> AssistantSettings {
    let mut settings = AssistantSettings::default();

    if let Ok(raw) = fs::read_to_string(config_path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.api_key {
                    settings.api_key = Some(v);
                }
                if let Some(v) = file_cfg.model {
                    settings.model = v;
                }
                if let Some(v) = file_cfg.endpoint {
                    settings.endpoint = v;
                }
                if let Some(v) = file_cfg.request_timeout_secs {
                    settings.request_timeout_secs = v;
                }
            }
            Err(error) => {
                warn!(path = %config_path.display(), %error, "ignoring malformed assistant config");
            }
        }
    }

    if let Some(v) = env("API_KEY") {
        settings.api_key = Some(v);
    }
    if let Some(v) = env("GEMINI_API_KEY") {
        settings.api_key = Some(v);
    }
    if let Some(v) = env("APP__ASSISTANT_API_KEY") {
        settings.api_key = Some(v);
    }

    if let Some(v) = env("APP__ASSISTANT_MODEL") {
        settings.model = v;
    }

    if let Some(v) = env("APP__ASSISTANT_ENDPOINT") {
        settings.endpoint = v;
    }

    if let Some(v) = env("APP__ASSISTANT_TIMEOUT_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.request_timeout_secs = parsed;
        }
    }

    settings.api_key = settings
        .api_key
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty());

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
