//! Prompt-driven generation over a [`LanguageModel`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use super::prompt::{mention_prompt, post_prompt, reply_prompt};
use super::{GenerateError, GenerateFuture, TextGenerator};
use crate::agent::context::AgentContext;
use crate::agent::events::{AgentEvent, EventHandler, NoopHandler};

/// Boxed future returned by [`LanguageModel::complete`].
pub type ModelFuture<'a> = Pin<Box<dyn Future<Output = Result<String, GenerateError>> + Send + 'a>>;

/// Sampling parameters for one completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_k: Option<u32>,
    pub top_p: Option<f32>,
    /// Upper bound on generated tokens. `None` lets the provider decide.
    pub max_tokens: Option<u32>,
}

impl GenerationParams {
    pub const fn with_temperature(temperature: f32) -> Self {
        Self {
            temperature,
            top_k: None,
            top_p: None,
            max_tokens: None,
        }
    }

    pub const fn sampled(temperature: f32, top_k: u32, top_p: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            top_k: Some(top_k),
            top_p: Some(top_p),
            max_tokens: Some(max_tokens),
        }
    }
}

/// Parameters per kind of output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamsProfile {
    pub post: GenerationParams,
    pub reply: GenerationParams,
    pub mention: GenerationParams,
}

impl ParamsProfile {
    /// Hosted models: a single moderate temperature and no token cap.
    pub const HOSTED: ParamsProfile = ParamsProfile {
        post: GenerationParams::with_temperature(0.5),
        reply: GenerationParams::with_temperature(0.5),
        mention: GenerationParams::with_temperature(0.5),
    };

    /// Small local models: sampled, with tight token budgets.
    pub const LOCAL: ParamsProfile = ParamsProfile {
        post: GenerationParams::sampled(0.75, 50, 0.92, 200),
        reply: GenerationParams::sampled(0.7, 50, 0.9, 150),
        mention: GenerationParams::sampled(0.75, 50, 0.92, 150),
    };
}

/// A backend that completes a prompt.
pub trait LanguageModel: Send + Sync {
    /// Provider name used in placeholder text, e.g. `"Gemini"`.
    fn provider(&self) -> &str;

    /// Default sampling for this provider.
    fn default_params(&self) -> ParamsProfile;

    fn complete<'a>(&'a self, prompt: &'a str, params: &'a GenerationParams) -> ModelFuture<'a>;
}

/// A [`TextGenerator`] that prompts a [`LanguageModel`] with the racer persona.
pub struct ModelGenerator<M> {
    model: M,
    params: ParamsProfile,
    events: Arc<dyn EventHandler>,
}

impl<M: LanguageModel> ModelGenerator<M> {
    pub fn new(model: M) -> Self {
        let params = model.default_params();
        Self {
            model,
            params,
            events: Arc::new(NoopHandler),
        }
    }

    pub fn with_params(mut self, params: ParamsProfile) -> Self {
        self.params = params;
        self
    }

    pub fn with_event_handler(mut self, events: Arc<dyn EventHandler>) -> Self {
        self.events = events;
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    async fn run(&self, kind: &str, prompt: String, params: &GenerationParams) -> String {
        debug!("{} {kind} prompt:\n{prompt}", self.model.provider());
        match self.model.complete(&prompt, params).await {
            Ok(text) => text,
            Err(error) => {
                let provider = self.model.provider();
                self.events.on_event(&AgentEvent::GenerationFailed {
                    provider,
                    error: &error,
                });
                error.placeholder(provider)
            }
        }
    }
}

impl<M: LanguageModel> TextGenerator for ModelGenerator<M> {
    fn name(&self) -> &str {
        self.model.provider()
    }

    fn generate_post<'a>(&'a self, ctx: &'a AgentContext) -> GenerateFuture<'a> {
        Box::pin(self.run("post", post_prompt(ctx), &self.params.post))
    }

    fn generate_reply<'a>(
        &'a self,
        ctx: &'a AgentContext,
        comment: &'a str,
    ) -> GenerateFuture<'a> {
        Box::pin(self.run("reply", reply_prompt(ctx, comment), &self.params.reply))
    }

    fn generate_mention<'a>(
        &'a self,
        ctx: &'a AgentContext,
        entity: &'a str,
        message: &'a str,
    ) -> GenerateFuture<'a> {
        Box::pin(self.run(
            "mention",
            mention_prompt(ctx, entity, message),
            &self.params.mention,
        ))
    }
}
