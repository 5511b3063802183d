//! Client for a locally served model over an Ollama-compatible API.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::model::{GenerationParams, LanguageModel, ModelFuture, ParamsProfile};
use super::GenerateError;

pub const DEFAULT_LOCAL_URL: &str = "http://localhost:11434";
pub const DEFAULT_LOCAL_MODEL: &str = "llama3.2:1b";

#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: SamplingOptions,
}

#[derive(Serialize, Debug)]
struct SamplingOptions {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

impl From<&GenerationParams> for SamplingOptions {
    fn from(p: &GenerationParams) -> Self {
        Self {
            temperature: p.temperature,
            top_k: p.top_k,
            top_p: p.top_p,
            num_predict: p.max_tokens,
        }
    }
}

#[derive(Deserialize, Debug)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Interpret a `/api/generate` body.
///
/// An `error` field becomes [`GenerateError::Api`]. Small models often echo
/// the prompt before continuing; a leading copy of `prompt` is stripped.
pub fn interpret_response(body: &str, prompt: &str) -> Result<String, GenerateError> {
    let parsed: GenerateResponse = serde_json::from_str(body)?;
    if let Some(message) = parsed.error {
        return Err(GenerateError::Api { message });
    }

    let raw = parsed.response.unwrap_or_default();
    let text = raw.strip_prefix(prompt).unwrap_or(raw.as_str()).trim();
    if text.is_empty() {
        return Err(GenerateError::EmptyCandidate);
    }
    Ok(text.to_string())
}

/// Async HTTP client for a local model server.
pub struct LocalModelClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl LocalModelClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self, GenerateError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("paddock/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(GenerateError::ClientBuild)?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerateError> {
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: params.into(),
        };
        debug!(
            "Local request: model={}, temp={}, max_tokens={:?}",
            self.model, params.temperature, params.max_tokens
        );

        let start = Instant::now();
        let resp = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(GenerateError::Transport)?;

        let status = resp.status();
        let text = resp.text().await.map_err(GenerateError::Transport)?;
        debug!(
            "Local response: HTTP {} in {:.1}s ({} bytes)",
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

        interpret_response(&text, prompt)
    }
}

impl LanguageModel for LocalModelClient {
    fn provider(&self) -> &str {
        "the local model"
    }

    fn default_params(&self) -> ParamsProfile {
        ParamsProfile::LOCAL
    }

    fn complete<'a>(&'a self, prompt: &'a str, params: &'a GenerationParams) -> ModelFuture<'a> {
        Box::pin(self.generate(prompt, params))
    }
}
