//! `generateContent` client for the Gemini REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::error::AssistantError;
use tracing::debug;
use url::Url;

use crate::{config::AssistantSettings, TextGenerator};

pub struct GeminiClient {
    http: Client,
    endpoint: Url,
    model: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}

impl GeminiClient {
    pub fn new(settings: &AssistantSettings) -> Result<Self, AssistantError> {
        let endpoint = Url::parse(&settings.endpoint).map_err(|err| {
            AssistantError::transport(format!("invalid endpoint '{}': {err}", settings.endpoint))
        })?;
        let http = Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .map_err(|err| AssistantError::transport(format!("failed to build http client: {err}")))?;

        Ok(Self {
            http,
            endpoint,
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
        })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.as_str().trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String, AssistantError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(AssistantError::MissingCredential);
        };

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".into()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: Some(system_instruction.to_string()),
                }],
            },
        };

        debug!(model = %self.model, "sending generateContent request");
        let res = self
            .http
            .post(self.generate_url())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| AssistantError::transport(err.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or(body);
            return Err(AssistantError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = res
            .json()
            .await
            .map_err(|err| AssistantError::transport(format!("malformed response body: {err}")))?;

        let text = first_candidate_text(body);
        if text.trim().is_empty() {
            return Err(AssistantError::EmptyResponse);
        }
        Ok(text)
    }
}

fn first_candidate_text(body: GenerateContentResponse) -> String {
    body.candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default()
}
