//! Gemini `generateContent` client.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{HintError, HintFuture, HintProvider};
use crate::game::HintRequest;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

pub struct GeminiHintProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiHintProvider {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn generate(&self, request: &HintRequest) -> Result<String, HintError> {
        let body = GenerateContentRequest::for_hint(request);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HintError::Status { status, body });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        debug!(model = %self.config.model, "generateContent ok");
        parsed.text().ok_or(HintError::EmptyResponse)
    }
}

impl HintProvider for GeminiHintProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn hint<'a>(&'a self, request: &'a HintRequest) -> HintFuture<'a> {
        Box::pin(self.generate(request))
    }
}

pub(crate) fn build_prompt(request: &HintRequest) -> String {
    let direction = if request.is_high() { "Higher" } else { "Lower" };
    let diff = request.guess.abs_diff(request.target);

    format!(
        "You are a witty game show host. {name} just guessed {guess}. \
         The actual target is {target}. \
         They are {direction} by {diff}. \
         This is attempt #{attempt}. \
         Give a very short (max 15 words) sarcastic or encouraging hint.",
        name = request.player_name,
        guess = request.guess,
        target = request.target,
        attempt = request.attempt,
    )
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn for_hint(request: &HintRequest) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(build_prompt(request)),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.8,
                top_p: 0.9,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, or `None` when it is missing or blank.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        let text = text.trim();

        (!text.is_empty()).then(|| text.to_string())
    }
}
