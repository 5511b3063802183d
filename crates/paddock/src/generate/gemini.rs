//! Google Gemini `generateContent` client.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::model::{GenerationParams, LanguageModel, ModelFuture, ParamsProfile};
use super::GenerateError;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";
/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

const UNKNOWN_BLOCK_REASON: &str = "Unknown reason";

// ── Request types ──────────────────────────────────────────────────

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Debug)]
struct Content<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize, Debug)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

impl From<&GenerationParams> for GenerationConfig {
    fn from(p: &GenerationParams) -> Self {
        Self {
            temperature: p.temperature,
            top_k: p.top_k,
            top_p: p.top_p,
            max_output_tokens: p.max_tokens,
        }
    }
}

// ── Response types ─────────────────────────────────────────────────

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize, Debug)]
struct Part {
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
    block_reason_message: Option<String>,
}

impl PromptFeedback {
    fn reason(self) -> Option<String> {
        let code = self.block_reason.filter(|r| !r.is_empty())?;
        Some(
            self.block_reason_message
                .filter(|m| !m.is_empty())
                .unwrap_or(code),
        )
    }
}

/// Interpret a successful `generateContent` body.
///
/// No candidates means the prompt was blocked; the reason comes from the
/// block message, then the block code, then `"Unknown reason"`. A candidate
/// without parts is [`GenerateError::EmptyCandidate`]. Otherwise the text
/// parts are joined and trimmed.
pub fn interpret_response(body: &str) -> Result<String, GenerateError> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)?;

    let Some(candidate) = parsed.candidates.into_iter().next() else {
        let reason = parsed
            .prompt_feedback
            .and_then(PromptFeedback::reason)
            .unwrap_or_else(|| UNKNOWN_BLOCK_REASON.to_string());
        return Err(GenerateError::Blocked { reason });
    };

    let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
    if parts.is_empty() {
        return Err(GenerateError::EmptyCandidate);
    }

    let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
    Ok(text.trim().to_string())
}

// ── Client ─────────────────────────────────────────────────────────

/// Async HTTP client for the Gemini API.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client for [`DEFAULT_GEMINI_MODEL`]. An empty key is rejected.
    pub fn new(api_key: impl Into<String>) -> Result<Self, GenerateError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GenerateError::MissingCredential { var: API_KEY_VAR });
        }
        let client = reqwest::Client::builder()
            .user_agent(concat!("paddock/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(GenerateError::ClientBuild)?;
        Ok(Self {
            client,
            api_key,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: GEMINI_API_BASE.to_string(),
        })
    }

    /// Read the key from [`API_KEY_VAR`].
    pub fn from_env() -> Result<Self, GenerateError> {
        let key = std::env::var(API_KEY_VAR)
            .map_err(|_| GenerateError::MissingCredential { var: API_KEY_VAR })?;
        Self::new(key)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point at a different API root (proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Send one prompt and return the generated text.
    pub async fn generate_content(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerateError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![TextPart { text: prompt }],
            }],
            generation_config: params.into(),
        };
        debug!(
            "Gemini request: model={}, temp={}, prompt={} chars",
            self.model,
            params.temperature,
            prompt.len()
        );
        trace!(
            "Request payload size: {} bytes",
            serde_json::to_string(&body).map_or(0, |s| s.len())
        );

        let start = Instant::now();
        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(GenerateError::Transport)?;

        let status = resp.status();
        let text = resp.text().await.map_err(GenerateError::Transport)?;
        debug!(
            "Gemini response: HTTP {} in {:.1}s ({} bytes)",
            status,
            start.elapsed().as_secs_f64(),
            text.len()
        );

        if !status.is_success() {
            return Err(GenerateError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        interpret_response(&text)
    }
}

impl LanguageModel for GeminiClient {
    fn provider(&self) -> &str {
        "Gemini"
    }

    fn default_params(&self) -> ParamsProfile {
        ParamsProfile::HOSTED
    }

    fn complete<'a>(&'a self, prompt: &'a str, params: &'a GenerationParams) -> ModelFuture<'a> {
        Box::pin(self.generate_content(prompt, params))
    }
}
